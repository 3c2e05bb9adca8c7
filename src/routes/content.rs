use crate::error::ApiError;
use crate::models::{NewsResponse, Wikipage};
use crate::state::AppState;
use rocket::serde::json::Json;
use rocket::{State, get};

#[get("/news?<limit>")]
pub async fn list_news(
    limit: Option<i64>,
    state: &State<AppState>,
) -> Result<Json<Vec<NewsResponse>>, ApiError> {
    let items = state.database.list_news(limit)?;
    Ok(Json(items.into_iter().map(NewsResponse::from).collect()))
}

#[get("/news/<id>/<_..>")]
pub async fn news_detail(id: i32, state: &State<AppState>) -> Result<Json<NewsResponse>, ApiError> {
    state
        .database
        .get_news(id)?
        .map(|news| Json(NewsResponse::from(news)))
        .ok_or_else(|| ApiError::NotFound(format!("News item {id} not found")))
}

#[get("/wiki/<title>/<_..>")]
pub async fn wiki_page(title: &str, state: &State<AppState>) -> Result<Json<Wikipage>, ApiError> {
    state
        .database
        .get_wikipage_by_title(title)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Wiki page '{title}' not found")))
}
