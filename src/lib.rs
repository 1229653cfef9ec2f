// SPDX-License-Identifier: GPL-3.0-only

//! Typed PokéAPI client and the cross-resource aggregations behind a
//! handful of Pokémon trivia questions.

pub mod aggregate;
pub mod api;
pub mod client;
pub mod config;
pub mod entities;
pub mod error;
pub mod queries;
pub mod utils;

pub use api::PokeApi;
pub use config::ApiConfig;
pub use error::{Error, Result};
