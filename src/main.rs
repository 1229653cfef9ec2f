// SPDX-License-Identifier: GPL-3.0-only

use anywho::Error;
use poketrivia::PokeApi;
use poketrivia::config::{ApiConfig, NATIONAL_DEX_COUNT};
use poketrivia::entities::named::Selector;
use poketrivia::queries;
use poketrivia::utils::capitalize_string;

/// Raichu, the default subject of the breeding question.
const DEFAULT_BREEDING_ID: i64 = 26;
const DEFAULT_TYPE: &str = "fighting";
const DEFAULT_GENERATION: i64 = 1;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();

    let api = PokeApi::new(&ApiConfig {
        page_limit: NATIONAL_DEX_COUNT,
        ..ApiConfig::default()
    })?;

    match args.get(1).map(String::as_str) {
        Some("patterns") => run_patterns(&api).await?,
        Some("breeding") => {
            let selector = match args.get(2) {
                Some(arg) => match arg.parse::<i64>() {
                    Ok(id) => Selector::ById(id),
                    Err(_) => Selector::ByName(arg.to_lowercase()),
                },
                None => Selector::ById(DEFAULT_BREEDING_ID),
            };
            run_breeding(&api, &selector).await?;
        }
        Some("weights") => {
            let type_name = args
                .get(2)
                .cloned()
                .unwrap_or_else(|| DEFAULT_TYPE.to_string());
            let generation = match args.get(3) {
                Some(arg) => arg.parse::<i64>()?,
                None => DEFAULT_GENERATION,
            };
            run_weights(&api, &type_name, generation).await?;
        }
        Some("all") => {
            run_patterns(&api).await?;
            run_breeding(&api, &Selector::ById(DEFAULT_BREEDING_ID)).await?;
            run_weights(&api, DEFAULT_TYPE, DEFAULT_GENERATION).await?;
        }
        _ => print_help(),
    }

    Ok(())
}

fn print_help() {
    println!(
        "Usage: {} [QUESTION]",
        std::env::args()
            .next()
            .unwrap_or_else(|| "poketrivia".to_string())
    );
    println!();
    println!("QUESTIONS:");
    println!("  patterns                  Pokémon with 'at' or a double 'a' in their name");
    println!("  breeding [name|id]        Species a Pokémon can breed with (default: raichu)");
    println!("  weights [type] [gen]      Heaviest/lightest of a type and generation");
    println!("                            (defaults: fighting, 1)");
    println!("  all                       Answer every question with its defaults");
}

async fn run_patterns(api: &PokeApi) -> Result<(), Error> {
    let regex = queries::double_a_regex();
    let count =
        queries::count_pokemon_matching_patterns(api, queries::DEFAULT_LITERAL_PATTERN, &regex)
            .await?;

    println!("Pokémon with 'at' or exactly two 'a's in their name: {count}");
    println!(
        "  (English names, national dex up to id {NATIONAL_DEX_COUNT}; no megas or regional forms.)"
    );
    Ok(())
}

async fn run_breeding(api: &PokeApi, selector: &Selector) -> Result<(), Error> {
    let (pokemon, count) = queries::count_breeding_partners(api, selector).await?;

    let groups: Vec<String> = pokemon
        .egg_groups
        .iter()
        .map(|g| capitalize_string(&g.name))
        .collect();
    println!(
        "{pokemon} can breed with {count} species (egg groups: {}).",
        groups.join(", ")
    );
    Ok(())
}

async fn run_weights(api: &PokeApi, type_name: &str, generation: i64) -> Result<(), Error> {
    let extremes = queries::weight_extremes_by_type_and_generation(api, type_name, generation)
        .await?;

    println!(
        "{} Pokémon of {}: heaviest {} kg, lightest {} kg.",
        extremes.type_name, extremes.generation_name, extremes.max_kg, extremes.min_kg
    );
    Ok(())
}
