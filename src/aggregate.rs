// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashSet;

use crate::entities::named::NamedEntity;

/// How two name-keyed sets are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// Union: every name from either set, once.
    Outer,
    /// Intersection: only names present in both sets.
    Inner,
}

/// A deduplicated, name-keyed result set.
///
/// Order is first-seen: set A in its own order, then whatever B added.
/// Callers read the size through [`NamedSet::count`] instead of
/// re-deriving it from the entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedSet {
    entries: Vec<NamedEntity>,
}

impl NamedSet {
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[NamedEntity] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<NamedEntity> {
        self.entries
    }
}

/// Merges one or two entity lists on the `name` key.
///
/// With no second list the first is returned unchanged. Otherwise an
/// `Outer` join unions both lists collapsing duplicate names, and an
/// `Inner` join keeps only the names present in both.
pub fn dedupe_union(
    set_a: &[NamedEntity],
    set_b: Option<&[NamedEntity]>,
    join: JoinKind,
) -> NamedSet {
    let Some(set_b) = set_b else {
        return NamedSet {
            entries: set_a.to_vec(),
        };
    };

    match join {
        JoinKind::Outer => collapse(set_a.iter().chain(set_b.iter())),
        JoinKind::Inner => {
            let b_names: HashSet<&str> = set_b.iter().map(|e| e.name.as_str()).collect();
            collapse(set_a.iter().filter(|e| b_names.contains(e.name.as_str())))
        }
    }
}

fn collapse<'a>(entries: impl Iterator<Item = &'a NamedEntity>) -> NamedSet {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut deduped: Vec<NamedEntity> = Vec::new();

    for entry in entries {
        if seen.insert(entry.name.as_str()) {
            deduped.push(entry.clone());
        }
    }

    NamedSet { entries: deduped }
}
