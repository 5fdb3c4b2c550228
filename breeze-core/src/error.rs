use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy for the data-access core.
///
/// `Upstream`, `Http` and `Decode` all mean the same thing to a caller:
/// the provider call did not succeed. `NotFound` is different — the
/// geocoding endpoint answered, but matched zero locations.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// A forward geocode query matched no locations.
    #[error("city \"{query}\" not found")]
    NotFound { query: String },

    /// The provider answered with a non-success status.
    #[error("{endpoint} request failed with status {status}: {body}")]
    Upstream {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The request itself failed (connection, timeout, TLS, ...).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered 200 with a body we could not parse.
    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so multibyte bodies never panic.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &body[..cut])
}
