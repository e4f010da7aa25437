use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::{ApiResponse, TowerRecord};
use crate::error::Error;
use crate::views::Panel;

#[derive(Serialize, Deserialize)]
pub struct SelectParams {
    id: String,
}

pub async fn panel(Extension(api): Extension<DynAPI>) -> Result<Json<ApiResponse<Panel>>, Error> {
    let panel = api.side_panel().await?;

    Ok(ApiResponse::ok("Side panel", panel).into())
}

pub async fn select(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<SelectParams>,
) -> Result<Json<ApiResponse<TowerRecord>>, Error> {
    let tower = api.find_tower(&params.id).await?;
    let tower = api.select_tower(tower).await?;

    Ok(ApiResponse::ok("Tower selected", tower).into())
}

pub async fn clear(Extension(api): Extension<DynAPI>) -> Result<Json<ApiResponse<()>>, Error> {
    api.clear_selection().await?;

    Ok(ApiResponse::ok("Selection cleared", ()).into())
}
