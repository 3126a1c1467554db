//! Compliment sampling

use rand::Rng;

use crate::domain::{entities::COMPLIMENTS, errors::DomainError};

/// Pick `count` distinct compliments uniformly at random.
///
/// Asking for more compliments than exist is an error, never a shorter list.
pub fn sample_compliments<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<&'static str>, DomainError> {
    if count > COMPLIMENTS.len() {
        return Err(DomainError::Validation(format!(
            "Asked for {} compliments but only {} are available",
            count,
            COMPLIMENTS.len()
        )));
    }

    Ok(rand::seq::index::sample(rng, COMPLIMENTS.len(), count)
        .into_iter()
        .map(|i| COMPLIMENTS[i])
        .collect())
}

/// Interpret the "wants compliments" checkbox value
pub fn wants_compliments(flag: Option<&str>) -> bool {
    matches!(
        flag.map(|f| f.trim().to_ascii_lowercase()).as_deref(),
        Some("yes" | "on" | "true" | "1")
    )
}
