pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod favorites;
pub mod models;
pub mod notify;
pub mod query;
pub mod session;
pub mod state;
pub mod storage;
