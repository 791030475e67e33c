//! Application service layer - config, quoting use cases, scanning, rendering, export

pub mod app;
pub mod config;
pub mod export;
pub mod repository;
pub mod scanner;
