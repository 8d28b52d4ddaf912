//! Server configuration.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::cache::CacheConfig;
use crate::stations::{
    DEFAULT_STATION_COUNT, Inventory, StationClient, StationClientConfig, StationError,
    SyntheticInventory,
};

/// Where the registry gets its stations from.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryConfig {
    /// A remote inventory service.
    Remote {
        base_url: String,
        api_key: Option<String>,
    },
    /// The seeded generator.
    Synthetic { count: u32, seed: u64 },
}

impl InventoryConfig {
    /// Build the configured source.
    pub fn build(&self) -> Result<Inventory, StationError> {
        match self {
            InventoryConfig::Remote { base_url, api_key } => {
                let mut config = StationClientConfig::new(base_url.as_str());
                if let Some(key) = api_key {
                    config = config.with_api_key(key.as_str());
                }
                Ok(Inventory::Remote(StationClient::new(config)?))
            }
            InventoryConfig::Synthetic { count, seed } => {
                Ok(Inventory::Synthetic(SyntheticInventory::new(*count, *seed)))
            }
        }
    }
}

/// Configuration for the station server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,

    pub inventory: InventoryConfig,

    /// How often to refresh the station snapshot.
    pub refresh_interval: Duration,

    /// Query result cache settings.
    pub cache: CacheConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            inventory: InventoryConfig::Synthetic {
                count: DEFAULT_STATION_COUNT,
                seed: 42,
            },
            refresh_interval: Duration::from_secs(5 * 60),
            cache: CacheConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup.
    ///
    /// Recognised variables: `STATIONS_BIND`, `STATIONS_SOURCE_URL`,
    /// `STATIONS_API_KEY`, `STATIONS_SYNTHETIC_COUNT`, `STATIONS_SEED`,
    /// `STATIONS_REFRESH_SECS`. Values that fail to parse are logged and the
    /// default kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = parse_var(&lookup, "STATIONS_BIND") {
            config.bind_addr = addr;
        }

        config.inventory = match lookup("STATIONS_SOURCE_URL").filter(|u| !u.is_empty()) {
            Some(base_url) => InventoryConfig::Remote {
                base_url,
                api_key: lookup("STATIONS_API_KEY").filter(|k| !k.is_empty()),
            },
            None => InventoryConfig::Synthetic {
                count: parse_var(&lookup, "STATIONS_SYNTHETIC_COUNT")
                    .unwrap_or(DEFAULT_STATION_COUNT),
                seed: parse_var(&lookup, "STATIONS_SEED").unwrap_or(42),
            },
        };

        if let Some(secs) = parse_var::<u64>(&lookup, "STATIONS_REFRESH_SECS") {
            config.refresh_interval = Duration::from_secs(secs.max(1));
        }

        config
    }

    /// Set the bind address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the inventory source.
    pub fn with_inventory(mut self, inventory: InventoryConfig) -> Self {
        self.inventory = inventory;
        self
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable configuration value");
            None
        }
    }
}
