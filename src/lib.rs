pub mod config;
pub mod error;
pub mod models;
pub mod openapi;
pub mod panel;
pub mod routes;
pub mod service;
pub mod store;
