// SPDX-License-Identifier: GPL-3.0-only

use crate::client::RestClient;
use crate::config::ApiConfig;
use crate::entities::named::{NamedEntity, Selector};
use crate::entities::pokemon::{MemberSet, PokemonRecord};
use crate::entities::responses::{
    EggGroupResponse, GenerationResponse, PokemonResponse, ResourcePage, SpeciesResponse,
    TypeResponse, localized_name,
};
use crate::error::{Error, Result};
use crate::utils::scale_measurement;

/// Resolves PokéAPI resources into the domain records the workflows
/// aggregate. One method per catalog kind; every lookup is a fresh set
/// of requests, nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct PokeApi {
    client: RestClient,
    page_limit: i64,
}

impl PokeApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            client: RestClient::new(config)?,
            page_limit: config.page_limit,
        })
    }

    /// One page of the full catalog, up to the configured limit. This is
    /// the universe the pattern question matches against.
    pub async fn get_all_pokemon(&self) -> Result<Vec<NamedEntity>> {
        let page: ResourcePage = self
            .client
            .get_json("pokemon/", &[("limit", self.page_limit)])
            .await?;

        Ok(page.results)
    }

    /// Combines `pokemon-species/` (identity, egg groups) and `pokemon/`
    /// (raw measurements) into one record. Two independent requests;
    /// measurements are converted from hectograms/decimeters on the way
    /// in.
    pub async fn get_pokemon(&self, selector: &Selector) -> Result<PokemonRecord> {
        let species: SpeciesResponse = self
            .client
            .get_json(&format!("pokemon-species/{selector}/"), &[])
            .await?;
        let base: PokemonResponse = self
            .client
            .get_json(&format!("pokemon/{selector}/"), &[])
            .await?;

        Ok(PokemonRecord {
            id: species.id,
            name: species.name,
            weight_kg: scale_measurement(base.weight),
            height_m: scale_measurement(base.height),
            egg_groups: species.egg_groups,
        })
    }

    /// Member species of every egg group the record belongs to, in the
    /// record's group order. All-or-nothing: one failed group fails the
    /// whole lookup, partial maps are never returned.
    pub async fn get_egg_group_species(&self, pokemon: &PokemonRecord) -> Result<Vec<MemberSet>> {
        let mut groups = Vec::with_capacity(pokemon.egg_groups.len());

        for egg_group in &pokemon.egg_groups {
            let response: EggGroupResponse = self
                .client
                .get_json(&format!("egg-group/{}/", egg_group.name), &[])
                .await?;

            groups.push(MemberSet {
                display_name: localized_name(&response.names, &egg_group.name),
                members: response.pokemon_species,
            });
        }

        Ok(groups)
    }

    /// Every Pokémon of the given type.
    pub async fn list_pokemon_by_type(&self, type_name: &str) -> Result<MemberSet> {
        if type_name.is_empty() {
            return Err(Error::InvalidSelector {
                reason: "a type name is required".to_string(),
            });
        }

        let response: TypeResponse = self
            .client
            .get_json(&format!("type/{type_name}/"), &[])
            .await?;

        Ok(MemberSet {
            display_name: localized_name(&response.names, type_name),
            members: response
                .pokemon
                .into_iter()
                .map(|slot| slot.pokemon)
                .collect(),
        })
    }

    /// Every species introduced in the given generation. Generations run
    /// 1 through 8; anything else is rejected before a request is made.
    pub async fn list_pokemon_by_generation(&self, generation: i64) -> Result<MemberSet> {
        if !(1..=8).contains(&generation) {
            return Err(Error::InvalidSelector {
                reason: format!("generation {generation} is out of range (1-8)"),
            });
        }

        let response: GenerationResponse = self
            .client
            .get_json(&format!("generation/{generation}/"), &[])
            .await?;

        Ok(MemberSet {
            display_name: localized_name(&response.names, &generation.to_string()),
            members: response.pokemon_species,
        })
    }
}
