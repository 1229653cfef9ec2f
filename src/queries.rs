// SPDX-License-Identifier: GPL-3.0-only

//! The three aggregation workflows behind the trivia questions. Each is
//! a pure pipeline from selectors to an aggregate answer, re-fetching
//! everything on every call; the selection logic is split into plain
//! functions so it can be exercised without a network.

use futures::StreamExt;
use regex::Regex;

use crate::aggregate::{JoinKind, NamedSet, dedupe_union};
use crate::api::PokeApi;
use crate::entities::named::{NamedEntity, Selector};
use crate::entities::pokemon::{MemberSet, PokemonRecord};
use crate::error::{Error, Result};

/// Default literal for the pattern question.
pub const DEFAULT_LITERAL_PATTERN: &str = "at";

/// Weight lookups in flight at once in the extremes question. The
/// lookups are independent, so fanning them out only changes latency.
const WEIGHT_FETCH_CONCURRENCY: usize = 10;

/// Names with exactly two 'a's, no more, no less.
pub fn double_a_regex() -> Regex {
    Regex::new(r"^[^a]*a[^a]*a[^a]*$").expect("a valid pattern")
}

/// How many catalog names contain the literal pattern or match the
/// regex. A name satisfying both predicates counts once.
pub async fn count_pokemon_matching_patterns(
    api: &PokeApi,
    literal: &str,
    regex: &Regex,
) -> Result<usize> {
    let catalog = api.get_all_pokemon().await?;
    tracing::info!(catalog = catalog.len(), "matching patterns against the catalog");

    Ok(match_patterns(&catalog, literal, regex))
}

fn match_patterns(catalog: &[NamedEntity], literal: &str, regex: &Regex) -> usize {
    let literal_matches: Vec<NamedEntity> = catalog
        .iter()
        .filter(|entry| entry.name.contains(literal))
        .cloned()
        .collect();
    let regex_matches: Vec<NamedEntity> = catalog
        .iter()
        .filter(|entry| regex.is_match(&entry.name))
        .cloned()
        .collect();

    dedupe_union(&literal_matches, Some(&regex_matches), JoinKind::Outer).count()
}

/// How many distinct species share an egg group with the selected
/// Pokémon, i.e. how many it can breed with. Returns the resolved
/// record too, for display.
pub async fn count_breeding_partners(
    api: &PokeApi,
    selector: &Selector,
) -> Result<(PokemonRecord, usize)> {
    let pokemon = api.get_pokemon(selector).await?;
    let groups = api.get_egg_group_species(&pokemon).await?;
    let count = breeding_partner_count(&pokemon.name, &groups)?;

    Ok((pokemon, count))
}

fn breeding_partner_count(pokemon_name: &str, groups: &[MemberSet]) -> Result<usize> {
    let mut iter = groups.iter();
    let Some(first) = iter.next() else {
        return Err(Error::EmptyResult {
            context: format!("{pokemon_name} belongs to no egg group"),
        });
    };

    // One group: its member count is the answer. Two: species present
    // in both groups must not be counted twice.
    let mut merged = dedupe_union(&first.members, None, JoinKind::Outer);
    for group in iter {
        merged = dedupe_union(merged.entries(), Some(&group.members), JoinKind::Outer);
    }

    Ok(merged.count())
}

/// Answer to the extremes question, with the resolved display names of
/// the type and the generation.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightExtremes {
    pub type_name: String,
    pub generation_name: String,
    pub max_kg: f64,
    pub min_kg: f64,
}

/// Heaviest and lightest Pokémon among those of the given type that
/// were introduced in the given generation. An empty type×generation
/// overlap is an error, never a silent zero.
pub async fn weight_extremes_by_type_and_generation(
    api: &PokeApi,
    type_name: &str,
    generation: i64,
) -> Result<WeightExtremes> {
    let of_type = api.list_pokemon_by_type(type_name).await?;
    let of_generation = api.list_pokemon_by_generation(generation).await?;

    let overlap = type_generation_overlap(&of_type, &of_generation)?;

    tracing::info!(
        overlap = overlap.count(),
        "resolving weights for the type/generation overlap"
    );

    // Independent lookups: fan them out, then merge deterministically
    // by name before taking the extremes.
    let mut weights: Vec<(String, f64)> = futures::stream::iter(overlap.into_entries())
        .map(|entry| async move {
            let pokemon = api.get_pokemon(&Selector::ByName(entry.name)).await?;
            Ok::<(String, f64), Error>((pokemon.name, pokemon.weight_kg))
        })
        .buffer_unordered(WEIGHT_FETCH_CONCURRENCY)
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect::<Result<Vec<_>>>()?;
    weights.sort_by(|a, b| a.0.cmp(&b.0));

    let (max_kg, min_kg) =
        weight_bounds(weights.iter().map(|(_, kg)| *kg)).ok_or_else(|| Error::EmptyResult {
            context: format!("no weights resolved for {type_name}/{generation}"),
        })?;

    Ok(WeightExtremes {
        type_name: of_type.display_name,
        generation_name: of_generation.display_name,
        max_kg,
        min_kg,
    })
}

/// Species present both in the type listing and the generation listing.
/// An empty overlap is a reportable condition, not a silent zero.
fn type_generation_overlap(of_type: &MemberSet, of_generation: &MemberSet) -> Result<NamedSet> {
    let overlap = dedupe_union(
        &of_type.members,
        Some(&of_generation.members),
        JoinKind::Inner,
    );

    if overlap.is_empty() {
        return Err(Error::EmptyResult {
            context: format!(
                "no {} Pokémon in {}",
                of_type.display_name, of_generation.display_name
            ),
        });
    }

    Ok(overlap)
}

fn weight_bounds(weights: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    weights.fold(None, |bounds, kg| match bounds {
        None => Some((kg, kg)),
        Some((max, min)) => Some((max.max(kg), min.min(kg))),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn set(names: &[&str]) -> Vec<NamedEntity> {
        names.iter().map(|name| NamedEntity::new(*name)).collect()
    }

    fn group(display_name: &str, members: &[&str]) -> MemberSet {
        MemberSet {
            display_name: display_name.to_string(),
            members: set(members),
        }
    }

    #[test]
    fn double_a_regex_wants_exactly_two_as() {
        let regex = double_a_regex();

        assert!(regex.is_match("charmander"));
        assert!(regex.is_match("rapidash"));
        assert!(!regex.is_match("pikachu")); // one 'a'
        assert!(!regex.is_match("alakazam")); // more than two
        assert!(!regex.is_match("eevee")); // none
    }

    #[test]
    fn pattern_count_never_counts_a_name_twice() {
        let catalog = set(&["charmander", "pikachu", "alakazam"]);

        // "charmander" matches the regex only; "alakazam" has too many
        // 'a's and no "at"; "pikachu" matches neither.
        let count = match_patterns(&catalog, DEFAULT_LITERAL_PATTERN, &double_a_regex());

        assert_eq!(count, 1);
    }

    #[test]
    fn pattern_count_unions_both_predicates() {
        let catalog = set(&["rattata", "paras", "abra", "eevee"]);

        // "rattata" contains "at"; "paras" and "abra" have exactly two
        // 'a's.
        let count = match_patterns(&catalog, DEFAULT_LITERAL_PATTERN, &double_a_regex());

        assert_eq!(count, 3);
    }

    #[test]
    fn one_egg_group_answers_with_its_member_count() {
        let groups = [group("Undiscovered", &["a", "b", "c", "d", "e"])];

        assert_eq!(breeding_partner_count("mewtwo", &groups).unwrap(), 5);
    }

    #[test]
    fn two_egg_groups_do_not_double_count_shared_species() {
        let water1 = group(
            "Water1",
            &["w1", "w2", "w3", "w4", "w5", "w6", "w7", "both1", "both2", "both3"],
        );
        let water2 = group(
            "Water2",
            &["both1", "both2", "both3", "x1", "x2", "x3", "x4", "x5"],
        );

        // 10 + 8 members sharing 3 names.
        assert_eq!(
            breeding_partner_count("poliwag", &[water1, water2]).unwrap(),
            15
        );
    }

    #[test]
    fn no_egg_groups_is_an_empty_result() {
        let result = breeding_partner_count("missingno", &[]);

        assert!(matches!(result, Err(Error::EmptyResult { .. })));
    }

    #[test]
    fn an_empty_type_generation_overlap_is_an_empty_result() {
        let lucha = group("Lucha", &["machop", "machoke"]);
        let gen_two = group("Generación II", &["chikorita", "totodile"]);

        let result = type_generation_overlap(&lucha, &gen_two);

        assert!(matches!(result, Err(Error::EmptyResult { .. })));
    }

    #[test]
    fn the_overlap_keeps_only_names_present_in_both_listings() {
        let lucha = group("Lucha", &["machop", "machoke", "heracross"]);
        let gen_one = group("Generación I", &["machop", "machoke", "pikachu"]);

        let overlap = type_generation_overlap(&lucha, &gen_one).unwrap();

        assert_eq!(overlap.count(), 2);
    }

    #[test]
    fn weight_bounds_track_max_and_min() {
        let bounds = weight_bounds([32.0, 0.8, 130.5, 19.5].into_iter());

        assert_eq!(bounds, Some((130.5, 0.8)));
    }

    #[test]
    fn weight_bounds_of_nothing_is_none() {
        assert_eq!(weight_bounds(std::iter::empty()), None);
    }

    #[tokio::test]
    async fn an_invalid_selector_aborts_the_extremes_workflow() {
        let api = PokeApi::new(&crate::config::ApiConfig::default()).unwrap();

        let result = weight_extremes_by_type_and_generation(&api, "", 1).await;

        // The empty type name is rejected before any request is made.
        assert!(matches!(result, Err(Error::InvalidSelector { .. })));
    }
}
