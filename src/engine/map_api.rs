use async_trait::async_trait;

use super::Engine;

use crate::{api::MapAPI, error::Error, views::MapView};

#[async_trait]
impl MapAPI for Engine {
    async fn map_view(&self) -> Result<MapView, Error> {
        let towers = self.store.all().await?;

        Ok(MapView::new(&towers))
    }
}
