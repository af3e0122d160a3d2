//! Turns raw web API bodies into payloads or typed errors.
//!
//! The two endpoints report failures differently: match history has a
//! numeric `status`, match details an ad-hoc `error` field. When throttled
//! both may answer with an html page instead of json, which is only
//! recognisable by the `429` somewhere in the text.

use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    dota2::history::{MatchHistory, STATUS_OK, STATUS_PRIVATE_PROFILE},
    error::ApiError,
};

const THROTTLE_MARKER: &str = "429";

#[derive(Deserialize)]
struct Response<T> {
    result: T,
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<Response<T>>(body)
        .map(|response| response.result)
        .map_err(|err| {
            if body.contains(THROTTLE_MARKER) {
                log::warn!("throttled by web API");
                ApiError::TooManyRequests
            } else {
                log::warn!("unreadable web API response: {}", err);
                ApiError::AccessForbidden
            }
        })
}

pub fn classify_history(body: &str) -> Result<MatchHistory, ApiError> {
    let history: MatchHistory = decode(body)?;
    match history.status {
        STATUS_OK => Ok(history),
        STATUS_PRIVATE_PROFILE => Err(ApiError::PrivateProfile),
        status => {
            log::warn!("unexpected match history status {}", status);
            Err(ApiError::Unknown(body.to_string()))
        }
    }
}

/// Returns the still undecoded `result` object of a match details response.
pub fn classify_details(body: &str) -> Result<serde_json::Value, ApiError> {
    let result: serde_json::Value = decode(body)?;
    match result.get("error") {
        Some(error) => {
            log::warn!("match details error: {}", error);
            Err(ApiError::MatchNotFound)
        }
        None => Ok(result),
    }
}
