// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use super::named::NamedEntity;
use crate::utils::capitalize_string;

/// A Pokémon as this crate cares about it: identity, converted
/// measurements and the egg groups it belongs to.
///
/// Weight and height come out of the API in hectograms and decimeters
/// and are stored here already converted to kilograms and meters.
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonRecord {
    pub id: i64,
    pub name: String,
    pub weight_kg: f64,
    pub height_m: f64,
    /// A Pokémon belongs to one or two egg groups, never more.
    pub egg_groups: Vec<NamedEntity>,
}

impl fmt::Display for PokemonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.id, capitalize_string(&self.name))
    }
}

/// A resolved member listing: the display name of the queried resource
/// (egg group, type or generation, localized when the API offers it)
/// plus its member species in API order.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberSet {
    pub display_name: String,
    pub members: Vec<NamedEntity>,
}
