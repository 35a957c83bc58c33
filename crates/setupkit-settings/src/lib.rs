//! SetupKit Settings Crate
//!
//! Handles application configuration and settings persistence.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, HistorySettings, ToolSettings, UnitSettings};
pub use error::{SettingsError, SettingsResult};
pub use setupkit_core::MeasurementSystem;
