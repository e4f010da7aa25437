use async_trait::async_trait;

use super::Engine;

use crate::{
    api::SelectionAPI,
    entities::TowerRecord,
    error::{not_found_error, Error},
    views::Panel,
};

#[async_trait]
impl SelectionAPI for Engine {
    #[tracing::instrument(skip(self, tower), fields(id = %tower.id))]
    async fn select_tower(&self, tower: TowerRecord) -> Result<TowerRecord, Error> {
        // the slot holds the stored copy, not whatever the caller passed in
        let stored = self
            .store
            .find(&tower.id)
            .await?
            .ok_or_else(|| not_found_error(&tower.id))?;

        *self.selection.write().await = Some(stored.clone());

        Ok(stored)
    }

    #[tracing::instrument(skip(self))]
    async fn clear_selection(&self) -> Result<(), Error> {
        *self.selection.write().await = None;

        Ok(())
    }

    async fn selected_tower(&self) -> Result<Option<TowerRecord>, Error> {
        let mut selection = self.selection.write().await;

        let id = match selection.as_ref() {
            Some(tower) => tower.id.clone(),
            None => return Ok(None),
        };

        if self.store.find(&id).await?.is_none() {
            *selection = None;
        }

        Ok(selection.clone())
    }

    async fn side_panel(&self) -> Result<Panel, Error> {
        let selected = self.selected_tower().await?;
        let towers = self.store.all().await?;

        Ok(Panel::for_selection(
            selected.as_ref(),
            &towers,
            self.recent_limit,
        ))
    }
}
