pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod parser;
pub mod sink;
pub mod stage;
pub mod utils;
