pub mod app;
pub mod bedrock;
pub mod cli;
pub mod config;
pub mod models;
pub mod server;
