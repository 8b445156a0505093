pub mod app;
pub mod companion;
pub mod config;
pub mod content;
pub mod error;
pub mod event;
pub mod navigate;
pub mod ui;
