//! Animal facts lookup

use crate::domain::{entities::AnimalFact, errors::DomainError};

/// Resolve the chosen animals against the facts table.
///
/// Records come back in selection order with repeats collapsed. Any name
/// missing from the table fails the whole lookup, naming every unknown.
pub fn lookup_animals<S: AsRef<str>>(
    chosen: &[S],
) -> Result<Vec<&'static AnimalFact>, DomainError> {
    let mut found: Vec<&'static AnimalFact> = Vec::with_capacity(chosen.len());
    let mut unknown: Vec<&str> = Vec::new();

    for name in chosen {
        let name = name.as_ref().trim();
        match AnimalFact::find(name) {
            Some(fact) => {
                if !found.iter().any(|f| f.name == fact.name) {
                    found.push(fact);
                }
            }
            None => {
                if !unknown.contains(&name) {
                    unknown.push(name);
                }
            }
        }
    }

    if !unknown.is_empty() {
        return Err(DomainError::not_found("animal", &unknown.join(", ")));
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ANIMAL_FACTS;

    #[test]
    fn test_koala_and_lion() {
        let facts = lookup_animals(&["koala", "lion"]).unwrap();
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0], &ANIMAL_FACTS[0]);
        assert_eq!(facts[1].name, "lion");
        assert_eq!(facts[1].fact, "Female lions do 90 percent of the hunting.");
    }

    #[test]
    fn test_selection_order_is_kept() {
        let facts = lookup_animals(&["narwhal", "koala"]).unwrap();
        let names: Vec<_> = facts.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["narwhal", "koala"]);
    }

    #[test]
    fn test_repeats_collapse() {
        let facts = lookup_animals(&["parrot", "parrot", "lion"]).unwrap();
        assert_eq!(facts.len(), 2);
    }

    #[test]
    fn test_empty_selection() {
        let none: [&str; 0] = [];
        assert!(lookup_animals(&none).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_animals_are_rejected() {
        let err = lookup_animals(&["koala", "unicorn", "dragon"]).unwrap_err();
        match err {
            DomainError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "animal");
                assert_eq!(id, "unicorn, dragon");
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }
}
