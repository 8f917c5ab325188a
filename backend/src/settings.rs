//! Server settings loaded via OrthoConfig.
//!
//! Values come from command-line flags, `USER_SEARCH_*` environment
//! variables or a configuration file, in OrthoConfig's usual precedence.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer};

const DEFAULT_DATASET_PATH: &str = "dataset.xml";
const DEFAULT_PORT: u16 = 8080;

/// Configuration values for the search server binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SEARCH")]
pub struct SearchServerSettings {
    /// XML document holding the user records.
    pub dataset_path: Option<PathBuf>,
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<SocketAddr>,
    /// Accepted access tokens, given as a comma-separated list.
    #[ortho_config(merge_strategy = "replace")]
    #[serde(default, deserialize_with = "deserialize_access_tokens")]
    pub access_tokens: Vec<String>,
    /// Parse the dataset once at startup instead of on every request.
    #[ortho_config(default = false)]
    pub cache_dataset: bool,
}

/// One token as the configuration layers hand it over.
///
/// The environment layer decodes scalars before serde sees them, so a lone
/// numeric token arrives as an integer and a lone `true` as a boolean.
#[derive(Deserialize)]
#[serde(untagged)]
enum TokenEntry {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Flag(bool),
}

impl From<TokenEntry> for String {
    fn from(entry: TokenEntry) -> Self {
        match entry {
            TokenEntry::Text(text) => text,
            TokenEntry::Signed(value) => value.to_string(),
            TokenEntry::Unsigned(value) => value.to_string(),
            TokenEntry::Flag(value) => value.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TokenList {
    Many(Vec<TokenEntry>),
    One(TokenEntry),
}

fn deserialize_access_tokens<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TokenList::deserialize(deserializer)? {
        TokenList::Many(entries) => entries.into_iter().map(String::from).collect(),
        TokenList::One(entry) => vec![String::from(entry)],
    })
}

impl SearchServerSettings {
    /// Configured dataset location, falling back to `dataset.xml`.
    pub fn dataset_path(&self) -> PathBuf {
        self.dataset_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH))
    }

    /// Configured listener address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
            .unwrap_or_else(|| SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)))
    }

    /// Accepted tokens with surrounding whitespace and blanks removed.
    pub fn access_tokens(&self) -> Vec<String> {
        self.access_tokens
            .iter()
            .flat_map(|entry| entry.split(','))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect()
    }
}
