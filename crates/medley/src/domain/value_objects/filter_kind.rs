//! FilterKind - The filter registry of the image filter page

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Image filter selectable on the image filter page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Blur,
    Contour,
    Detail,
    EdgeEnhance,
    Emboss,
    Sharpen,
    Smooth,
    Greyscale,
}

impl FilterKind {
    /// Every filter, in the order the form lists them
    pub const ALL: [FilterKind; 8] = [
        FilterKind::Blur,
        FilterKind::Contour,
        FilterKind::Detail,
        FilterKind::EdgeEnhance,
        FilterKind::Emboss,
        FilterKind::Sharpen,
        FilterKind::Smooth,
        FilterKind::Greyscale,
    ];

    /// User-facing name, as submitted by the form
    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::Blur => "blur",
            FilterKind::Contour => "contour",
            FilterKind::Detail => "detail",
            FilterKind::EdgeEnhance => "edge enhance",
            FilterKind::Emboss => "emboss",
            FilterKind::Sharpen => "sharpen",
            FilterKind::Smooth => "smooth",
            FilterKind::Greyscale => "greyscale",
        }
    }

    /// Filename-safe form of the name
    pub fn slug(&self) -> &'static str {
        match self {
            FilterKind::EdgeEnhance => "edge-enhance",
            other => other.name(),
        }
    }

    /// User-facing names of every filter
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|f| f.name())
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for FilterKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blur" => Ok(FilterKind::Blur),
            "contour" => Ok(FilterKind::Contour),
            "detail" => Ok(FilterKind::Detail),
            "edge enhance" | "edge-enhance" | "edge_enhance" => Ok(FilterKind::EdgeEnhance),
            "emboss" => Ok(FilterKind::Emboss),
            "sharpen" => Ok(FilterKind::Sharpen),
            "smooth" => Ok(FilterKind::Smooth),
            "greyscale" | "grayscale" => Ok(FilterKind::Greyscale),
            _ => Err(DomainError::Validation(format!(
                "Unknown filter '{}'. Choose one of: {}",
                s.trim(),
                Self::names().collect::<Vec<_>>().join(", ")
            ))),
        }
    }
}
