// SPDX-License-Identifier: GPL-3.0-only

//! Wire shapes of the endpoints this crate consumes, decoded with serde
//! at the client boundary. Only the fields the aggregations use are
//! declared; PokéAPI sends plenty more, which serde ignores. A missing
//! required field fails the decode instead of turning into a silent
//! `None` somewhere deep in an aggregation.

use serde::Deserialize;

use super::named::NamedEntity;

/// Language code whose localized names are preferred for display.
pub const DISPLAY_LANGUAGE: &str = "es";

/// One page of a paginated list endpoint (`pokemon/?limit=N`).
#[derive(Debug, Deserialize)]
pub struct ResourcePage {
    pub count: i64,
    pub results: Vec<NamedEntity>,
}

/// `pokemon-species/{id|name}/`: identity plus egg-group membership.
#[derive(Debug, Deserialize)]
pub struct SpeciesResponse {
    pub id: i64,
    pub name: String,
    pub egg_groups: Vec<NamedEntity>,
}

/// `pokemon/{id|name}/`: raw measurements, weight in hectograms and
/// height in decimeters.
#[derive(Debug, Deserialize)]
pub struct PokemonResponse {
    pub id: i64,
    pub name: String,
    pub weight: i64,
    pub height: i64,
}

/// One entry of a resource's `names[]` list.
#[derive(Debug, Deserialize)]
pub struct LocalizedName {
    pub language: NamedEntity,
    pub name: String,
}

/// `egg-group/{name}/`.
#[derive(Debug, Deserialize)]
pub struct EggGroupResponse {
    pub names: Vec<LocalizedName>,
    pub pokemon_species: Vec<NamedEntity>,
}

/// `type/{name}/`. Members arrive wrapped in a slot object.
#[derive(Debug, Deserialize)]
pub struct TypeResponse {
    pub names: Vec<LocalizedName>,
    pub pokemon: Vec<TypeSlot>,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    pub pokemon: NamedEntity,
}

/// `generation/{n}/`.
#[derive(Debug, Deserialize)]
pub struct GenerationResponse {
    pub names: Vec<LocalizedName>,
    pub pokemon_species: Vec<NamedEntity>,
}

/// Scans a `names[]` list for the preferred language, falling back to
/// the caller's original selector value when the API has no entry.
pub fn localized_name(names: &[LocalizedName], fallback: &str) -> String {
    names
        .iter()
        .find(|entry| entry.language.name == DISPLAY_LANGUAGE)
        .map(|entry| entry.name.clone())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names_fixture(json: &str) -> Vec<LocalizedName> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn localized_name_prefers_spanish() {
        let names = names_fixture(
            r#"[
                {"language": {"name": "en", "url": ""}, "name": "Fire"},
                {"language": {"name": "es", "url": ""}, "name": "Fuego"}
            ]"#,
        );

        assert_eq!(localized_name(&names, "fire"), "Fuego");
    }

    #[test]
    fn localized_name_falls_back_to_the_selector_value() {
        let names = names_fixture(r#"[{"language": {"name": "en", "url": ""}, "name": "Fire"}]"#);

        assert_eq!(localized_name(&names, "fire"), "fire");
        assert_eq!(localized_name(&[], "monster"), "monster");
    }

    #[test]
    fn species_response_decodes_from_api_shape() {
        let species: SpeciesResponse = serde_json::from_str(
            r#"{
                "id": 26,
                "name": "raichu",
                "order": 51,
                "egg_groups": [
                    {"name": "ground", "url": "https://pokeapi.co/api/v2/egg-group/5/"},
                    {"name": "fairy", "url": "https://pokeapi.co/api/v2/egg-group/6/"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(species.id, 26);
        assert_eq!(species.name, "raichu");
        assert_eq!(species.egg_groups.len(), 2);
        assert_eq!(species.egg_groups[0].name, "ground");
    }

    #[test]
    fn species_response_rejects_a_body_missing_required_fields() {
        let result: Result<SpeciesResponse, _> =
            serde_json::from_str(r#"{"id": 26, "name": "raichu"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn type_response_unwraps_the_slot_nesting() {
        let fighting: TypeResponse = serde_json::from_str(
            r#"{
                "names": [{"language": {"name": "es", "url": ""}, "name": "Lucha"}],
                "pokemon": [
                    {"slot": 1, "pokemon": {"name": "mankey", "url": ""}},
                    {"slot": 1, "pokemon": {"name": "machop", "url": ""}}
                ]
            }"#,
        )
        .unwrap();

        let members: Vec<&str> = fighting
            .pokemon
            .iter()
            .map(|slot| slot.pokemon.name.as_str())
            .collect();
        assert_eq!(members, vec!["mankey", "machop"]);
        assert_eq!(localized_name(&fighting.names, "fighting"), "Lucha");
    }
}
