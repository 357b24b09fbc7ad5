//! Conversions from external transport errors into domain errors.

use obsidian_rest_domain::ObsidianError;
use reqwest::Error as HttpError;

/// Error newtype that keeps reqwest conversions on the client side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct TransportError(pub ObsidianError);

impl From<TransportError> for ObsidianError {
    fn from(value: TransportError) -> Self {
        value.0
    }
}

impl From<ObsidianError> for TransportError {
    fn from(value: ObsidianError) -> Self {
        TransportError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ObsidianError */
/* -------------------------------------------------------------------------- */

fn map_http_error(err: HttpError) -> ObsidianError {
    if err.is_decode() {
        return ObsidianError::Decode(err.to_string());
    }

    if err.is_builder() {
        return ObsidianError::Config(format!("invalid HTTP request: {err}"));
    }

    if err.is_timeout() {
        return ObsidianError::Network(format!("HTTP request timed out: {err}"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    if err.is_connect() {
        return ObsidianError::Network(format!("HTTP connection failure: {err}"));
    }

    ObsidianError::Network(err.to_string())
}

impl From<HttpError> for TransportError {
    fn from(value: HttpError) -> Self {
        TransportError(map_http_error(value))
    }
}

/// Decode a JSON body into `T`, reporting shape mismatches as decode errors.
pub(crate) fn decode_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T, ObsidianError> {
    serde_json::from_slice(bytes).map_err(|e| ObsidianError::Decode(e.to_string()))
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
