//! Template domain: per-business template lists and the active selection.
//!
//! `TemplateSet` always holds at least one template and its selected index
//! is always in range. `TemplateLibrary` holds one set per registered
//! business plus the active business key.

mod defaults;
pub mod store;

pub use store::TemplateStore;

use crate::business::{self, DEFAULT_BUSINESS};
use crate::error::{LauncherError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered templates for one business with a selected index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TemplateSetRaw")]
pub struct TemplateSet {
    templates: Vec<String>,
    selected: usize,
}

/// Unchecked serde form, validated into `TemplateSet`.
#[derive(Deserialize)]
struct TemplateSetRaw {
    templates: Vec<String>,
    #[serde(default)]
    selected: usize,
}

impl TryFrom<TemplateSetRaw> for TemplateSet {
    type Error = String;

    fn try_from(raw: TemplateSetRaw) -> std::result::Result<Self, Self::Error> {
        let mut set = TemplateSet::new(raw.templates).map_err(|e| e.to_string())?;
        if raw.selected < set.len() {
            set.selected = raw.selected;
        }
        Ok(set)
    }
}

impl TemplateSet {
    /// Build a set from `templates`, selecting the first one.
    ///
    /// Blank entries are dropped; a set with nothing left is rejected.
    pub fn new(templates: Vec<String>) -> Result<Self> {
        let templates: Vec<String> = templates
            .into_iter()
            .filter(|t| !t.trim().is_empty())
            .collect();
        if templates.is_empty() {
            return Err(LauncherError::EmptyTemplate);
        }
        Ok(Self {
            templates,
            selected: 0,
        })
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Never true; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &str {
        &self.templates[self.selected]
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.templates.len() {
            return Err(LauncherError::IndexOutOfRange {
                index,
                len: self.templates.len(),
            });
        }
        self.selected = index;
        Ok(())
    }

    /// Select a uniformly random template and return its index.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        self.selected = rng.gen_range(0..self.templates.len());
        self.selected
    }

    /// Append a user-written template. Selection is unchanged.
    pub fn add(&mut self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(LauncherError::EmptyTemplate);
        }
        self.templates.push(text.to_string());
        Ok(())
    }

    /// Insert a generated template at the front and select it.
    pub fn prepend(&mut self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(LauncherError::EmptyTemplate);
        }
        self.templates.insert(0, text.to_string());
        self.selected = 0;
        Ok(())
    }

    /// Remove the template at `index` and return it.
    ///
    /// Refuses to remove the last remaining template. If the selection sat at
    /// or past the new end of the list it moves back to the first template.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<String> {
        let len = self.templates.len();
        assert!(
            index < len,
            "template index {} out of range (have {})",
            index,
            len
        );
        if len == 1 {
            return Err(LauncherError::LastTemplate);
        }
        let removed = self.templates.remove(index);
        if self.selected >= len - 1 {
            self.selected = 0;
        }
        Ok(removed)
    }
}

/// Template sets for every business, plus the active business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateLibrary {
    active: String,
    sets: BTreeMap<String, TemplateSet>,
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        let sets = business::all_businesses()
            .iter()
            .map(|b| (b.key.to_string(), defaults::seed_set(b)))
            .collect();
        Self {
            active: DEFAULT_BUSINESS.to_string(),
            sets,
        }
    }
}

impl TemplateLibrary {
    /// Fill in sets for any registered business missing from a loaded
    /// library, and repair an unknown active key.
    pub(crate) fn reconcile(&mut self) {
        for b in business::all_businesses() {
            self.sets
                .entry(b.key.to_string())
                .or_insert_with(|| defaults::seed_set(b));
        }
        if business::find(&self.active).is_err() {
            log::warn!(
                "[TEMPLATES] Unknown active business '{}', resetting to {}",
                self.active,
                DEFAULT_BUSINESS
            );
            self.active = DEFAULT_BUSINESS.to_string();
        }
    }

    pub fn active_key(&self) -> &str {
        &self.active
    }

    /// Switch the active business. Its selection resets to the first template.
    pub fn set_active(&mut self, key: &str) -> Result<()> {
        business::find(key)?;
        self.active = key.to_string();
        let set = self.set_mut(key)?;
        set.selected = 0;
        Ok(())
    }

    pub fn set(&self, key: &str) -> Result<&TemplateSet> {
        self.sets
            .get(key)
            .ok_or_else(|| LauncherError::UnknownBusiness(key.to_string()))
    }

    pub fn set_mut(&mut self, key: &str) -> Result<&mut TemplateSet> {
        self.sets
            .get_mut(key)
            .ok_or_else(|| LauncherError::UnknownBusiness(key.to_string()))
    }

    pub fn active_set(&self) -> Result<&TemplateSet> {
        self.set(&self.active)
    }

    pub fn active_set_mut(&mut self) -> Result<&mut TemplateSet> {
        let key = self.active.clone();
        self.set_mut(&key)
    }
}
