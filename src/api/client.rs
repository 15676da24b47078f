use crate::config::Config;
use crate::error::AppError;

use super::endpoints;
use super::models::{ChampionRotation, MatchDto};

/// What one fetch produced. Callers match on this exhaustively; only
/// transport and parse failures surface as `AppError`.
#[derive(Debug)]
pub enum Outcome<T> {
    Success(T),
    Forbidden,
    NotFound,
    Other { status: u16, body: String },
}

pub struct RiotApiClient {
    config: Config,
}

impl RiotApiClient {
    pub fn new(config: Config) -> Self {
        RiotApiClient { config }
    }

    pub fn get_rotation(&self) -> Result<Outcome<ChampionRotation>, AppError> {
        let url = endpoints::champion_rotations_url(&self.config.platform);
        let (status, body) = self.execute_request(&url)?;
        rotation_outcome(status, body)
    }

    pub fn get_match(&self, match_id: &str) -> Result<Outcome<MatchDto>, AppError> {
        let route = endpoints::regional_routing(&self.config.platform);
        let url = endpoints::match_url(route, match_id);
        let (status, body) = self.execute_request(&url)?;
        match_outcome(status, body)
    }

    // Single blocking GET with the credential header. Any HTTP status is a
    // normal return here; only DNS/connect/read failures become errors.
    fn execute_request(&self, url: &str) -> Result<(u16, String), AppError> {
        let response = ureq::get(url)
            .set("X-Riot-Token", &self.config.api_key)
            .set("User-Agent", "rift_lookup/0.1.0")
            .call();

        match response {
            Ok(resp) => {
                let status = resp.status();
                let body = resp
                    .into_string()
                    .map_err(|e| AppError::TransportError(e.to_string()))?;
                Ok((status, body))
            }
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Ok((status, body))
            }
            Err(e) => Err(AppError::TransportError(e.to_string())),
        }
    }
}

fn rotation_outcome(status: u16, body: String) -> Result<Outcome<ChampionRotation>, AppError> {
    match status {
        200 => parse_success(&body),
        403 => Ok(Outcome::Forbidden),
        _ => Ok(Outcome::Other { status, body }),
    }
}

// 404 means something only for match lookups: the rotation endpoint has no
// per-resource id, so an unexpected 404 there is reported like any other
// status.
fn match_outcome(status: u16, body: String) -> Result<Outcome<MatchDto>, AppError> {
    match status {
        200 => parse_success(&body),
        403 => Ok(Outcome::Forbidden),
        404 => Ok(Outcome::NotFound),
        _ => Ok(Outcome::Other { status, body }),
    }
}

fn parse_success<T: serde::de::DeserializeOwned>(body: &str) -> Result<Outcome<T>, AppError> {
    let payload = serde_json::from_str(body).map_err(|e| AppError::ParseError(e.to_string()))?;
    Ok(Outcome::Success(payload))
}
