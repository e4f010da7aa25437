use std::sync::Arc;

use async_trait::async_trait;

use crate::entities::{TowerPayload, TowerRecord};
use crate::error::Error;
use crate::views::{MapView, Panel};

#[async_trait]
pub trait TowerAPI {
    async fn submit_tower(&self, payload: TowerPayload) -> Result<TowerRecord, Error>;
    async fn list_towers(&self) -> Result<Vec<TowerRecord>, Error>;
    async fn find_tower(&self, id: &str) -> Result<TowerRecord, Error>;
    async fn recent_towers(&self, limit: Option<usize>) -> Result<Vec<TowerRecord>, Error>;
    async fn refresh_towers(&self) -> Result<Vec<TowerRecord>, Error>;
}

#[async_trait]
pub trait SelectionAPI {
    async fn select_tower(&self, tower: TowerRecord) -> Result<TowerRecord, Error>;
    async fn clear_selection(&self) -> Result<(), Error>;
    async fn selected_tower(&self) -> Result<Option<TowerRecord>, Error>;
    async fn side_panel(&self) -> Result<Panel, Error>;
}

#[async_trait]
pub trait MapAPI {
    async fn map_view(&self) -> Result<MapView, Error>;
}

pub trait API: TowerAPI + SelectionAPI + MapAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
