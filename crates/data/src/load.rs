use crate::schema::{expand_entries, CatalogEntry};
use anyhow::Context;
use serde::de::DeserializeOwned;
use sprintdeck_core::{Catalog, CatalogError, GameConfig};
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "config.json";
const CATALOG_DIR: &str = "catalog";
const STARTER_FILE: &str = "starter.json";
const STORE_FILE: &str = "store.json";
const CHALLENGES_FILE: &str = "challenges.json";

const BUILTIN_STARTER: &str = include_str!("../../../assets/catalog/starter.json");
const BUILTIN_STORE: &str = include_str!("../../../assets/catalog/store.json");
const BUILTIN_CHALLENGES: &str = include_str!("../../../assets/catalog/challenges.json");

/// Reads `config.json` from `dir`. A missing file yields the defaults; a
/// present but malformed one is an error.
pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(GameConfig::default());
    }
    let config: GameConfig = load_json(&path)?;
    check_config(&config).with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}

/// Reads the three catalog lists under `dir/catalog/` and validates them.
pub fn load_catalog(dir: &Path) -> anyhow::Result<Catalog> {
    let base = dir.join(CATALOG_DIR);
    let starter: Vec<CatalogEntry> = load_json(base.join(STARTER_FILE))?;
    let store: Vec<CatalogEntry> = load_json(base.join(STORE_FILE))?;
    let challenges: Vec<CatalogEntry> = load_json(base.join(CHALLENGES_FILE))?;
    build_catalog(starter, store, challenges)
        .with_context(|| format!("validate {}", base.display()))
}

/// The catalog shipped in `assets/`, compiled into the binary.
pub fn builtin_catalog() -> anyhow::Result<Catalog> {
    parse_catalog(BUILTIN_STARTER, BUILTIN_STORE, BUILTIN_CHALLENGES)
}

pub fn parse_catalog(starter: &str, store: &str, challenges: &str) -> anyhow::Result<Catalog> {
    let starter: Vec<CatalogEntry> = serde_json::from_str(starter).context("parse starter list")?;
    let store: Vec<CatalogEntry> = serde_json::from_str(store).context("parse store list")?;
    let challenges: Vec<CatalogEntry> =
        serde_json::from_str(challenges).context("parse challenge list")?;
    Ok(build_catalog(starter, store, challenges)?)
}

fn build_catalog(
    starter: Vec<CatalogEntry>,
    store: Vec<CatalogEntry>,
    challenges: Vec<CatalogEntry>,
) -> Result<Catalog, CatalogError> {
    let catalog = Catalog {
        starter: expand_entries(starter),
        store: expand_entries(store),
        challenges: expand_entries(challenges),
    };
    catalog.validate()?;
    Ok(catalog)
}

fn check_config(config: &GameConfig) -> anyhow::Result<()> {
    if config.max_turns == 0 {
        anyhow::bail!("max_turns must be at least 1");
    }
    if config.hand_size == 0 {
        anyhow::bail!("hand_size must be at least 1");
    }
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
