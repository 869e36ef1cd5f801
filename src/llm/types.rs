//! Generation request and outcome types.

use crate::business::{Business, BusinessType};

/// Parameters for producing a new review template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub business_name: String,
    pub business_type: BusinessType,
    /// Trimmed, never empty when present.
    pub staff_name: Option<String>,
}

impl GenerationRequest {
    pub fn new(
        business_name: impl Into<String>,
        business_type: BusinessType,
        staff_name: Option<&str>,
    ) -> Self {
        Self {
            business_name: business_name.into(),
            business_type,
            staff_name: staff_name
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }

    pub fn for_business(business: &Business, staff_name: &str) -> Self {
        Self::new(business.name, business.business_type, Some(staff_name))
    }

    /// Cache key: `groq-review:<name>:<type>:<staff>` (staff empty when absent).
    pub fn cache_key(&self) -> String {
        format!(
            "groq-review:{}:{}:{}",
            self.business_name,
            self.business_type,
            self.staff_name.as_deref().unwrap_or("")
        )
    }
}

/// Outcome of a generation call.
///
/// `Cached` and `Remote` are successes; `Fallback` means the remote path was
/// unavailable and the text was synthesized locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    Cached(String),
    Remote(String),
    Fallback(String),
}

impl Generated {
    pub fn text(&self) -> &str {
        match self {
            Self::Cached(t) | Self::Remote(t) | Self::Fallback(t) => t,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    /// Short status line for the user.
    pub fn status_message(&self) -> &'static str {
        if self.is_degraded() {
            "⚠️ Using fallback template"
        } else {
            "✨ AI template generated and selected!"
        }
    }
}
