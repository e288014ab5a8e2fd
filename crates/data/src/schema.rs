use serde::{Deserialize, Serialize};

pub use sprintdeck_core::{
    ActionStats, CardKind, CardTemplate, Catalog, ChallengeKind, ChallengeStats, GameConfig,
};

fn one() -> u32 {
    1
}

/// One line of a catalog file. `copies` repeats the template, so a starter
/// deck of six identical cards is a single entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub template: CardTemplate,
    #[serde(default = "one")]
    pub copies: u32,
}

pub fn expand_entries(entries: Vec<CatalogEntry>) -> Vec<CardTemplate> {
    let mut templates = Vec::new();
    for entry in entries {
        for _ in 0..entry.copies {
            templates.push(entry.template.clone());
        }
    }
    templates
}
