pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod style_engine;
pub mod utils;
pub mod web;
