// src/lib.rs

//! NPS site directory library.
//!
//! Resolves National Park Service sites by state and enriches them with
//! nearby places. Every fetched result is cached on disk.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;

pub use error::{AppError, Result};
pub use models::{Config, NearbyPlace, SiteRecord, StateIndex};
pub use pipeline::SiteDirectory;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
