//! Implementation blocks for watch services.

pub mod file_watch_service;
