pub mod app;
pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod pagination;
pub mod rest;
pub mod services;
