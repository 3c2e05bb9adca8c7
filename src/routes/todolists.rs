use crate::error::ApiError;
use crate::models::todolist::*;
use crate::state::AppState;
use rocket::serde::json::Json;
use rocket::{State, get, post, put};

/// Todolists that still have work left, newest first
#[get("/api/v1/todolists/incomplete")]
pub async fn incomplete_todolists(
    state: &State<AppState>,
) -> Result<Json<Vec<Todolist>>, ApiError> {
    Ok(Json(state.database.get_incomplete_todolists()?))
}

#[get("/api/v1/todolists/<id>")]
pub async fn get_todolist(
    id: i32,
    state: &State<AppState>,
) -> Result<Json<TodolistWithPackages>, ApiError> {
    state
        .database
        .get_todolist_with_packages(id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Todolist {id} not found")))
}

#[post("/api/v1/todolists/<id>/packages", data = "<request>")]
pub async fn add_todolist_package(
    id: i32,
    request: Json<AddTodolistPackageRequest>,
    state: &State<AppState>,
) -> Result<Json<TodolistPkg>, ApiError> {
    state
        .database
        .add_todolist_package(id, request.pkg_id)
        .map(Json)
        .map_err(|e| match ApiError::from(e) {
            ApiError::Conflict(_) => ApiError::Conflict(format!(
                "Package {} is already on todolist {id}",
                request.pkg_id
            )),
            other => other,
        })
}

#[put("/api/v1/todolists/<id>/packages/<pkg_id>", data = "<request>")]
pub async fn update_todolist_package(
    id: i32,
    pkg_id: i32,
    request: Json<UpdateTodolistPackageRequest>,
    state: &State<AppState>,
) -> Result<Json<TodolistPkg>, ApiError> {
    Ok(Json(state.database.set_todolist_package_complete(
        id,
        pkg_id,
        request.complete,
    )?))
}
