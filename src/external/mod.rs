pub mod towers_api;

pub use towers_api::RemoteStore;
