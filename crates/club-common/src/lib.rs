pub mod api;
pub mod catalog;
pub mod category;
pub mod error;
pub mod model;
pub mod summary;
pub mod tint;
