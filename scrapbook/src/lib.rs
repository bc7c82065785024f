//! Scrapbook library
//!
//! This library exposes the data loader, the decoration engine and the HTTP
//! layer of the scrapbook server for the binary and for tests.

pub mod app;
pub mod config;
pub mod database;
pub mod decoration;
pub mod error;
pub mod http;
pub mod render;
pub mod services;
