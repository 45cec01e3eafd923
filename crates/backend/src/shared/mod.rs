pub mod config;
pub mod data;
pub mod error;
pub mod listener;
pub mod middleware;
pub mod state;
