pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod views;
