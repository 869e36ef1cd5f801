//! Template library persistence.
//!
//! The whole library is stored as one JSON file, `templates.json`, in the
//! launcher data directory (see `config::data_dir`). A missing or unreadable
//! file yields the seeded defaults.

use super::TemplateLibrary;
use crate::error::Result;
use std::path::{Path, PathBuf};

const TEMPLATES_FILE: &str = "templates.json";

/// JSON-file backed store for the `TemplateLibrary`.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    /// Store rooted in `dir`. The file is created on first save.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(TEMPLATES_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the library, falling back to defaults if the file is missing or
    /// corrupt.
    pub fn load(&self) -> TemplateLibrary {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return TemplateLibrary::default(),
        };
        match serde_json::from_str::<TemplateLibrary>(&raw) {
            Ok(mut library) => {
                library.reconcile();
                library
            }
            Err(e) => {
                log::error!(
                    "[TEMPLATES] Failed to parse {}: {}, using defaults",
                    self.path.display(),
                    e
                );
                TemplateLibrary::default()
            }
        }
    }

    /// Persist the library, creating the data directory if needed.
    pub fn save(&self, library: &TemplateLibrary) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(library)?;
        std::fs::write(&self.path, json)?;
        log::debug!("[TEMPLATES] Saved library to {}", self.path.display());
        Ok(())
    }
}
