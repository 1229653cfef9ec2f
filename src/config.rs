// SPDX-License-Identifier: GPL-3.0-only

use std::time::Duration;

pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Ids past this point are megas, gmax and regional variants, which the
/// pattern question leaves out of its universe.
pub const NATIONAL_DEX_COUNT: i64 = 898;

/// Client configuration, immutable once the client is built.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API, ending in '/'.
    pub base_url: String,
    /// Number of catalog entries requested per page.
    pub page_limit: i64,
    /// Per-request timeout applied by the HTTP client.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_BASE_URL.to_string(),
            page_limit: 10,
            timeout: Duration::from_secs(10),
        }
    }
}
