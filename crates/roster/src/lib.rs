//! `roster` - A browsable, searchable staff directory
//!
//! This library loads a batch of people from a randomuser.me-compatible API,
//! projects them into summary cards with a name filter, and drives a
//! paginated detail view over the loaded directory.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod gallery;
pub mod loader;
pub mod logging;
pub mod navigator;
pub mod person;
pub mod render;

pub use app::{AppState, Event, Screen, Session};
pub use config::Config;
pub use directory::Directory;
pub use error::{Error, Result};
pub use gallery::{Card, Gallery};
pub use loader::{DirectoryLoader, DirectorySource, HttpSource};
pub use logging::init_logging;
pub use navigator::{DetailView, NavControls, Navigator};
pub use person::{PersonRecord, Street};
