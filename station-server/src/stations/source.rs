//! Where station snapshots come from.

use std::future::Future;

use super::client::{StationClient, StationDto};
use super::error::StationError;
use super::synthetic::SyntheticInventory;

/// Something that can produce the current snapshot of all stations.
pub trait InventorySource: Send + Sync {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<StationDto>, StationError>> + Send;
}

impl InventorySource for StationClient {
    async fn fetch_all(&self) -> Result<Vec<StationDto>, StationError> {
        self.fetch_stations().await
    }
}

impl InventorySource for SyntheticInventory {
    async fn fetch_all(&self) -> Result<Vec<StationDto>, StationError> {
        Ok(self.next_fleet())
    }
}

/// The inventory sources the server can be configured with.
#[derive(Debug)]
pub enum Inventory {
    Remote(StationClient),
    Synthetic(SyntheticInventory),
}

impl InventorySource for Inventory {
    async fn fetch_all(&self) -> Result<Vec<StationDto>, StationError> {
        match self {
            Inventory::Remote(client) => client.fetch_all().await,
            Inventory::Synthetic(generator) => generator.fetch_all().await,
        }
    }
}
