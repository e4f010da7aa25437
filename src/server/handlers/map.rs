use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::ApiResponse;
use crate::error::Error;
use crate::views::MapView;

pub async fn view(Extension(api): Extension<DynAPI>) -> Result<Json<ApiResponse<MapView>>, Error> {
    let view = api.map_view().await?;

    Ok(ApiResponse::ok(view.summary.clone(), view).into())
}
