pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::BookingError;
pub use services::booking::BookingManager;
