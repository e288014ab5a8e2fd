use crate::{CardCategory, CardTemplate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The static card definitions a game is dealt from. Repeated templates mean
/// repeated copies.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub starter: Vec<CardTemplate>,
    pub store: Vec<CardTemplate>,
    pub challenges: Vec<CardTemplate>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("starter deck is empty")]
    EmptyStarterDeck,
    #[error("{list} entry {id:?} is a {found:?} card, expected {expected:?}")]
    WrongCategory {
        list: &'static str,
        id: String,
        found: CardCategory,
        expected: CardCategory,
    },
    #[error("{list} entry {index} has a blank id")]
    BlankId { list: &'static str, index: usize },
}

impl Catalog {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.starter.is_empty() {
            return Err(CatalogError::EmptyStarterDeck);
        }
        check_list("starter", &self.starter, CardCategory::Action)?;
        check_list("store", &self.store, CardCategory::Action)?;
        check_list("challenges", &self.challenges, CardCategory::Challenge)?;
        Ok(())
    }
}

fn check_list(
    list: &'static str,
    templates: &[CardTemplate],
    expected: CardCategory,
) -> Result<(), CatalogError> {
    for (index, template) in templates.iter().enumerate() {
        if template.id.trim().is_empty() {
            return Err(CatalogError::BlankId { list, index });
        }
        let found = template.kind.category();
        if found != expected {
            return Err(CatalogError::WrongCategory {
                list,
                id: template.id.clone(),
                found,
                expected,
            });
        }
    }
    Ok(())
}
