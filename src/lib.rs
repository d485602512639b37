pub mod api;
pub mod app;
pub mod attachment;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod filter;
pub mod format;
pub mod models;
pub mod pagination;
pub mod settings;
pub mod shell;
pub mod store;
