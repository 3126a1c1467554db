//! StorageKey - Unique name of a stored image

use uuid::Uuid;

use crate::domain::value_objects::FilterKind;

/// Fallback stem when nothing of the uploaded filename survives sanitising
const DEFAULT_STEM: &str = "upload";

/// Longest stem kept from the uploaded filename
const MAX_STEM_LEN: usize = 64;

/// Key under which a filtered image is stored.
///
/// Format: `{filter-slug}-{uuid}-{stem}.{extension}`. The filter prefix keeps
/// several filters of one upload apart, the UUID keeps concurrent uploads
/// of the same file apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn new(filter: FilterKind, original_name: &str, extension: &str) -> Self {
        Self::with_id(filter, Uuid::new_v4(), original_name, extension)
    }

    pub fn with_id(filter: FilterKind, id: Uuid, original_name: &str, extension: &str) -> Self {
        let stem = sanitize_stem(original_name);
        Self(format!("{}-{}-{}.{}", filter.slug(), id, stem, extension))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reduce an uploaded filename to a safe stem: last path component,
/// extension dropped, only `[A-Za-z0-9._-]` kept.
fn sanitize_stem(original_name: &str) -> String {
    let file_name = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();
    let stem = match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[..idx],
        _ => file_name,
    };

    let cleaned: String = stem
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .take(MAX_STEM_LEN)
        .collect();
    let cleaned = cleaned.trim_matches('.');

    if cleaned.is_empty() {
        DEFAULT_STEM.to_string()
    } else {
        cleaned.to_string()
    }
}
