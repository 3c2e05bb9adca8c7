use crate::error::ApiError;
use crate::models::{PackageDetail, Signoff, SignoffRequest};
use crate::state::AppState;
use log::info;
use rocket::serde::json::Json;
use rocket::{State, get, post};

/// Package detail at its canonical URL, `/packages/<repo>/<arch>/<name>/`
#[get("/packages/<repo>/<arch>/<name>/<_..>")]
pub async fn package_detail(
    repo: &str,
    arch: &str,
    name: &str,
    state: &State<AppState>,
) -> Result<Json<PackageDetail>, ApiError> {
    state
        .database
        .get_package_detail(repo, arch, name)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Package '{repo}/{arch}/{name}' not found")))
}

/// Sign off on the package's current version and release
#[post("/api/v1/packages/<id>/signoffs", data = "<request>")]
pub async fn add_signoff(
    id: i32,
    request: Json<SignoffRequest>,
    state: &State<AppState>,
) -> Result<Json<Signoff>, ApiError> {
    let package = state
        .database
        .get_package(id)?
        .ok_or_else(|| ApiError::NotFound(format!("Package {id} not found")))?;

    let signoff = state.database.add_signoff(&package, request.packager_id)?;

    info!(
        "User {} signed off {} {}-{}",
        request.packager_id, package.pkgname, package.pkgver, package.pkgrel
    );

    Ok(Json(signoff))
}
