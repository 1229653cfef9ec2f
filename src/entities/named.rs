// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use serde::Deserialize;

/// Minimal shape every PokéAPI list endpoint returns. `name` is the
/// dedup key for every aggregation in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedEntity {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedEntity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: String::new(),
        }
    }
}

/// How a catalog entry is addressed: by numeric id or by its lowercase
/// API name. Exactly one of the two, by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    ById(i64),
    ByName(String),
}

/// Renders the selector as the URL path segment PokéAPI expects, which
/// doubles as the display fallback when no localized name exists.
impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::ById(id) => write!(f, "{id}"),
            Selector::ByName(name) => write!(f, "{name}"),
        }
    }
}
