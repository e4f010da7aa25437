mod payload;
mod response;
mod tower;

pub use payload::TowerPayload;
pub use response::ApiResponse;
pub use tower::{NewTower, TowerRecord, TowerType};
