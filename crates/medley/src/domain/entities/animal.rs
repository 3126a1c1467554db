//! AnimalFact - one row of the animal facts table

use serde::Serialize;

/// Facts about a single animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnimalFact {
    /// Table key, also shown as the checkbox label
    pub name: &'static str,
    pub fact: &'static str,
    pub habitat: &'static str,
    pub physical_characteristics: &'static str,
}

/// The animal facts table. Order is the order of the selection form.
pub static ANIMAL_FACTS: &[AnimalFact] = &[
    AnimalFact {
        name: "koala",
        fact: "Koala fingerprints are so close to humans' that they could taint crime scenes.",
        habitat: "Koalas live over a range of open forest and woodland communities",
        physical_characteristics: "large round head, big furry ears and big black nose.",
    },
    AnimalFact {
        name: "parrot",
        fact: "Parrots will selflessly help each other out.",
        habitat: "Most wild parrots live in the warm areas of the Southern Hemisphere",
        physical_characteristics: "Parrots have beaks that are strong and shaped rather like hooks.",
    },
    AnimalFact {
        name: "mantis shrimp",
        fact: "The mantis shrimp has the world's fastest punch.",
        habitat: "Mantis shrimp are usually found in shallow tropical or subtropical waters, with some species occasionally found in sub-Antarctic waters.",
        physical_characteristics: "Mantis shrimps are brightly colored.",
    },
    AnimalFact {
        name: "lion",
        fact: "Female lions do 90 percent of the hunting.",
        habitat: "Lions prefer grassland, savanna, dense scrub, and open woodland.",
        physical_characteristics: "Lions have strong, compact bodies and powerful forelegs, teeth and jaws for pulling down and killing prey.",
    },
    AnimalFact {
        name: "narwhal",
        fact: "Narwhal tusks are really an \"inside out\" tooth.",
        habitat: "Narwhals spend their lives in the Arctic waters of Canada, Greenland, Norway and Russia.",
        physical_characteristics: "The narwhal is a chunky, stocky whale, with a small rounded head.",
    },
];

impl AnimalFact {
    /// Names of every animal in the table
    pub fn names() -> impl Iterator<Item = &'static str> {
        ANIMAL_FACTS.iter().map(|a| a.name)
    }

    /// Exact lookup by table key
    pub fn find(name: &str) -> Option<&'static AnimalFact> {
        ANIMAL_FACTS.iter().find(|a| a.name == name)
    }
}
