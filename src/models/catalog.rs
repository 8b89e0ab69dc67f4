use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Top-level product catalog (`cytrus.json`).
///
/// Missing keys and `null` values fall back to their defaults. Games are kept
/// undecoded until one is asked for, so an oddly shaped product never breaks
/// the lookup of another.
#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Catalog {
    #[serde(deserialize_with = "null_as_default")]
    pub version: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub games: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Game {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order: i64,
    #[serde(rename = "gameId", deserialize_with = "null_as_default")]
    pub game_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub assets: Assets,
    #[serde(deserialize_with = "null_as_default")]
    pub platforms: Platforms,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Assets {
    #[serde(deserialize_with = "null_as_default")]
    pub meta: Release,
}

pub type Platforms = BTreeMap<String, Option<Release>>;

/// Version identifiers of both tracks for one platform.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Release {
    #[serde(deserialize_with = "null_as_default")]
    pub beta: String,
    #[serde(deserialize_with = "null_as_default")]
    pub main: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Release {
    pub fn version(&self, track: Track) -> &str {
        match track {
            Track::Main => &self.main,
            Track::Beta => &self.beta,
        }
    }
}

impl Game {
    /// A platform listed as `null` counts as present with empty versions.
    pub fn release(&self, platform: &str) -> Option<Release> {
        self.platforms
            .get(platform)
            .map(|release| release.clone().unwrap_or_default())
    }
}

impl Catalog {
    /// Decodes one game. `Ok(None)` when the catalog does not list it.
    pub fn game(&self, name: &str) -> Result<Option<Game>, serde_json::Error> {
        match self.games.get(name) {
            Some(value) => Ok(Some(
                Option::<Game>::deserialize(value)?.unwrap_or_default(),
            )),
            None => Ok(None),
        }
    }

    pub fn release(&self, game: &str, platform: &str) -> Result<Option<Release>, serde_json::Error> {
        Ok(self.game(game)?.and_then(|game| game.release(platform)))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    #[default]
    Main,
    Beta,
}

impl Track {
    pub fn from_beta(beta: bool) -> Track {
        if beta { Track::Beta } else { Track::Main }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Track::Main => "main",
            Track::Beta => "beta",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
