use crate::error::ApiError;
use crate::models::{AltForum, Donor, MaintainerFlagStats, Mirror, Press};
use crate::state::AppState;
use log::debug;
use rocket::serde::json::Json;
use rocket::{State, get};

// Health check endpoint
#[get("/api/v1/health")]
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok"
    }))
}

/// Packages per maintainer and how many of them are flagged out of date
#[get("/api/v1/stats/flagged")]
pub async fn flag_stats(
    state: &State<AppState>,
) -> Result<Json<Vec<MaintainerFlagStats>>, ApiError> {
    let stats = state.database.get_flag_stats()?;
    debug!("Flag report covers {} maintainers", stats.len());
    Ok(Json(stats))
}

#[get("/api/v1/mirrors")]
pub async fn list_mirrors(state: &State<AppState>) -> Result<Json<Vec<Mirror>>, ApiError> {
    Ok(Json(state.database.list_mirrors()?))
}

#[get("/api/v1/press")]
pub async fn list_press(state: &State<AppState>) -> Result<Json<Vec<Press>>, ApiError> {
    Ok(Json(state.database.list_press()?))
}

#[get("/api/v1/altforums")]
pub async fn list_alt_forums(state: &State<AppState>) -> Result<Json<Vec<AltForum>>, ApiError> {
    Ok(Json(state.database.list_alt_forums()?))
}

#[get("/api/v1/donors")]
pub async fn list_donors(state: &State<AppState>) -> Result<Json<Vec<Donor>>, ApiError> {
    Ok(Json(state.database.list_donors()?))
}
