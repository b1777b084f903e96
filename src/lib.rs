pub mod config;
pub mod core;
pub mod models;
pub mod services;
