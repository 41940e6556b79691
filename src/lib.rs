pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod store;
pub mod views;

pub use error::{BoardError, Result};
