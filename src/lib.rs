pub mod api;
pub mod constants;
pub mod models;
pub mod runtime;
pub mod types;
