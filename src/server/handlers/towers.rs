use axum::extract::{Extension, Json, Path, Query};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::{ApiResponse, TowerPayload, TowerRecord};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct RecentParams {
    limit: Option<usize>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(payload): Json<TowerPayload>,
) -> Result<Json<ApiResponse<TowerRecord>>, Error> {
    let tower = api.submit_tower(payload).await?;

    Ok(ApiResponse::ok("Tower data submitted successfully", tower).into())
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
) -> Result<Json<ApiResponse<Vec<TowerRecord>>>, Error> {
    let towers = api.list_towers().await?;

    Ok(ApiResponse::ok(format!("{} towers", towers.len()), towers).into())
}

pub async fn recent(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<RecentParams>,
) -> Result<Json<ApiResponse<Vec<TowerRecord>>>, Error> {
    let towers = api.recent_towers(params.limit).await?;

    Ok(ApiResponse::ok("Recent submissions", towers).into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TowerRecord>>, Error> {
    let tower = api.find_tower(&id).await?;

    Ok(ApiResponse::ok("Tower details", tower).into())
}
