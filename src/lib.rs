pub mod api;
pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod guards;
pub mod handlers;
pub mod middleware;
pub mod services;

pub use app::{app, AppState};
