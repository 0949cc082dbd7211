// src/config/aliases.rs
//! Driver alias table.
//!
//! Maps a cleaned raw name to the canonical display name. Built once at
//! startup and never mutated afterwards; the pipeline only ever borrows it.
//!
//! Extra aliases can be supplied as TOML:
//! ```toml
//! [aliases]
//! "Guanyu Zhou" = "Zhou Guanyu"
//! ```
//! File entries win over built-ins with the same key.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;
use tracing::debug;

use crate::core::sanitize::clean_name;
use crate::error::{ConfigError, ConfigResult};

/// Known alias → canonical pairs.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("Andrea Kimi Antonelli", "Kimi Antonelli"),
    ("Kimi Andrea Antonelli", "Kimi Antonelli"),
    ("Liam Lawson", "Liam Lawson"),
    ("Yuki Tsunoda", "Yuki Tsunoda"),
];

static BUILTIN: LazyLock<AliasTable> = LazyLock::new(AliasTable::builtin);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasTable {
    map: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct AliasFile {
    #[serde(default)]
    aliases: HashMap<String, String>,
}

impl AliasTable {
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_ALIASES.iter().copied())
    }

    /// Shared built-in table for callers that never load overrides.
    pub fn shared() -> &'static AliasTable {
        &BUILTIN
    }

    fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = pairs
            .into_iter()
            .map(|(alias, canonical)| (clean_name(alias), s!(canonical)))
            .collect();
        Self { map }
    }

    /// Built-ins plus the `[aliases]` table of a TOML document.
    pub fn with_overrides_toml(text: &str, origin: &Path) -> ConfigResult<Self> {
        let file: AliasFile = toml::from_str(text).map_err(|source| ConfigError::Toml {
            path: origin.to_path_buf(),
            source,
        })?;
        let mut table = Self::builtin();
        for (alias, canonical) in &file.aliases {
            table.map.insert(clean_name(alias), canonical.clone());
        }
        // Canonical names must resolve to themselves once cleaned.
        for canonical in file.aliases.into_values() {
            table.map.entry(clean_name(&canonical)).or_insert(canonical);
        }
        Ok(table)
    }

    /// Load the table once at startup: built-ins, plus `path` if given.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let Some(path) = path else {
            return Ok(Self::builtin());
        };
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::with_overrides_toml(&text, path)?;
        debug!(path = %path.display(), entries = table.len(), "Loaded driver aliases");
        Ok(table)
    }

    /// Canonical name for an already-cleaned name, if it is a known alias.
    pub fn resolve(&self, cleaned: &str) -> Option<&str> {
        self.map.get(cleaned).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Every (alias, canonical) pair, sorted by alias.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut out: Vec<(&str, &str)> =
            self.map.iter().map(|(a, c)| (a.as_str(), c.as_str())).collect();
        out.sort_unstable();
        out
    }
}
