//! This crate contains the page controller for the laptop price prediction and recommendation page. It loads the select options, handles the prediction and recommendation forms, switches tabs, and renders recommended laptops. The page itself is reached through the [`Document`](document::Document) trait and the server through the [`Backend`](backend::Backend) trait, so the same controller runs in the browser and in the headless cli.

pub mod backend;
#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod ids;
pub mod memory;
pub mod render;
pub mod types;

pub use self::backend::{Backend, HttpBackend};
pub use self::config::Config;
pub use self::controller::PageController;
pub use self::document::{Document, Selector};
pub use self::error::{Error, Result};
pub use self::memory::{Element, MemoryDocument};
