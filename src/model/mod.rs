//! Application model - the complete state of the host
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod scene;

pub use scene::{HorizontalAlign, ObjectKind, ObjectStatus, Scene, TextObject};

use crate::config::WritingConfig;

/// The complete application model
#[derive(Debug, Clone, Default)]
pub struct AppModel {
    /// Text objects and the current selection
    pub scene: Scene,
    /// Persisted writing preferences
    pub config: WritingConfig,
}

impl AppModel {
    pub fn new(scene: Scene, config: WritingConfig) -> Self {
        Self { scene, config }
    }
}
