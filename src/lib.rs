pub mod api;
pub mod config;
pub mod data_models;
pub mod imgur;
pub mod picker;
