pub mod api;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod external;
pub mod seed;
pub mod server;
pub mod store;
pub mod views;
