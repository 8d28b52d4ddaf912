//! Conversion between wire records and domain stations.

use tracing::warn;

use crate::domain::{Coordinates, DomainError, Occupancy, Station, StationId};

use super::client::StationDto;

impl TryFrom<&StationDto> for Station {
    type Error = DomainError;

    fn try_from(dto: &StationDto) -> Result<Self, Self::Error> {
        Ok(Station {
            id: StationId::new(dto.id)?,
            name: dto.name.clone(),
            address: dto.address.clone(),
            zone: dto.zone.parse()?,
            occupancy: Occupancy::new(dto.bikes, dto.docks)?,
            status: dto.status.parse()?,
            usage: dto.usage,
            average_duration_mins: dto.average_duration,
            location: Coordinates::new(dto.lat, dto.lng)?,
        })
    }
}

/// Convert wire records, skipping the ones that fail validation.
///
/// Skipped records are logged. Order is preserved.
pub fn convert_stations(dtos: &[StationDto]) -> Vec<Station> {
    dtos.iter()
        .filter_map(|dto| match Station::try_from(dto) {
            Ok(station) => Some(station),
            Err(e) => {
                warn!(station_id = dto.id, error = %e, "skipping invalid station record");
                None
            }
        })
        .collect()
}
