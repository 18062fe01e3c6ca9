// public modules
pub mod config;
pub mod core;
