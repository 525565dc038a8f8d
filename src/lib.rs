//! Core library for playlist-local-audit
pub mod config;
pub mod models;
pub mod api;
pub mod scan;
pub mod compare;
