// SPDX-License-Identifier: GPL-3.0-only

/// Everything that can go wrong between a trivia question and its answer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Pure input validation, raised before any request is made.
    #[error("invalid selector: {reason}")]
    InvalidSelector { reason: String },

    /// The request never produced a response (DNS, refused connection,
    /// timeout).
    #[error("request to '{endpoint}' failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered, but not with a 200.
    #[error("'{endpoint}' answered with status {status}")]
    Transport { status: u16, endpoint: String },

    /// The server said yes, but the body is not the JSON we expect.
    #[error("could not decode the body of '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// An aggregation that requires a non-empty result came up empty.
    #[error("no results: {context}")]
    EmptyResult { context: String },
}

pub type Result<T> = std::result::Result<T, Error>;
