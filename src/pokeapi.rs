//! Minimal client for the public PokéAPI.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;

const BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

#[derive(Debug, thiserror::Error)]
pub enum PokeApiError {
    #[error("no pokemon called `{0}`")]
    NotFound(String),
    #[error("`{0}` is not a valid pokemon name")]
    InvalidName(String),
    #[error("failed to reach the PokéAPI: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Pokemon {
    pub name: String,
    pub weight: u32,
    pub abilities: Vec<AbilitySlot>,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatSlot>,
    pub sprites: Sprites,
}

#[derive(Clone)]
pub struct PokeApi {
    client: Client,
}

impl PokeApi {
    pub fn new() -> Result<Self, PokeApiError> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self { client })
    }

    pub async fn pokemon(&self, name: &str) -> Result<Pokemon, PokeApiError> {
        let name = normalize_name(name)?;
        let response = self
            .client
            .get(format!("{}/{}", BASE_URL, name))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(PokeApiError::NotFound(name));
        }

        Ok(response.error_for_status()?.json().await?)
    }
}

/// Lowercases `name` and rejects anything that is not a plain pokemon name or id.
pub fn normalize_name(name: &str) -> Result<String, PokeApiError> {
    let name = name.trim().to_lowercase();
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');

    if valid {
        Ok(name)
    } else {
        Err(PokeApiError::InvalidName(name))
    }
}
