//! quickclip - keep short text clips, reorder them, copy them back on demand
//!
//! This library exports the core modules for testing and the binary.

pub mod app;
pub mod clipboard;
pub mod controller;
pub mod logging;
pub mod models;
pub mod storage;
pub mod ui;
