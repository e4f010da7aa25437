pub mod map;
pub mod selection;
pub mod towers;
