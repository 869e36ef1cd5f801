//! Business registry: the fixed set of launchable businesses.
//!
//! Each business has a review page URL and a `BusinessType`, which selects
//! the keyword banks used for prompt construction and fallback synthesis.

use crate::error::LauncherError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of business. Closed set: the keyword banks are keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Gold,
    Silver,
}

impl BusinessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
        }
    }

    /// Short keyword list fed into the generation prompt.
    pub fn prompt_keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Gold => &[
                "hallmark gold",
                "bridal sets",
                "purity",
                "certification",
                "craftsmanship",
                "wedding jewellery",
                "wholesale rate",
                "fair pricing",
            ],
            Self::Silver => &[
                "925 silver",
                "pure silver",
                "traditional designs",
                "silver ornaments",
                "handcrafted",
                "silver coins",
                "silver utensils",
            ],
        }
    }

    /// Larger keyword bank sampled by fallback synthesis.
    pub fn fallback_keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Gold => &[
                "hallmark gold jewellery",
                "bridal gold sets",
                "authentic gold ornaments",
                "certified gold",
                "traditional designs",
                "modern jewelry",
                "gold purity",
                "craftsmanship",
                "wedding jewelry",
                "gold collection",
                "wholesale rate",
                "genuine rates",
                "fair market prices",
                "designer gold jewellery",
                "kdm gold",
                "custom gold jewelry",
                "gold bangles",
                "gold earrings",
                "trusted gold jeweller",
                "family jewellers",
                "gold necklace",
            ],
            Self::Silver => &[
                "925 hallmark silver",
                "pure silver ornaments",
                "silver craftsmanship",
                "traditional silver",
                "contemporary designs",
                "silver purity",
                "authentic silver",
                "silver collection",
                "handcrafted silver",
                "premium silver",
                "wholesale",
                "silver utensils",
                "silver coins",
                "silver murti",
                "silver idols",
                "sterling silver jewellery",
                "silver gifts",
                "silver jewellery shop",
                "silver pooja items",
                "silver anklets",
                "silver bangles",
            ],
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusinessType {
    type Err = LauncherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gold" => Ok(Self::Gold),
            "silver" => Ok(Self::Silver),
            other => Err(LauncherError::UnknownBusinessType(other.to_string())),
        }
    }
}

/// One launchable business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Business {
    pub key: &'static str,
    pub name: &'static str,
    /// Human-readable category shown next to the name.
    pub category: &'static str,
    pub review_url: &'static str,
    pub business_type: BusinessType,
}

pub const DEFAULT_BUSINESS: &str = "dda-jewels";

static BUSINESSES: [Business; 2] = [
    Business {
        key: "dda-jewels",
        name: "DDA Jewels",
        category: "Gold Jewellery",
        review_url: "https://g.page/r/CaOdDJElz7lZEBM/review",
        business_type: BusinessType::Gold,
    },
    Business {
        key: "deen-dayal",
        name: "Deen Dayal Anand Kumar Saraf",
        category: "Silver Jewellery",
        review_url: "https://g.page/r/CcHmi1ubP54SEBM/review",
        business_type: BusinessType::Silver,
    },
];

/// All registered businesses, in display order.
pub fn all_businesses() -> &'static [Business] {
    &BUSINESSES
}

/// Look up a business by its key.
pub fn find(key: &str) -> Result<&'static Business, LauncherError> {
    BUSINESSES
        .iter()
        .find(|b| b.key == key)
        .ok_or_else(|| LauncherError::UnknownBusiness(key.to_string()))
}
