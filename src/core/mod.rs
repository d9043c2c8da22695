pub mod config;
pub mod detection;
pub mod error;
