//! Distance-banded fare tariff.

/// One tariff band: trips up to and including `up_to_km` cost `fare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareBand {
    pub up_to_km: u32,
    pub fare: u32,
}

impl FareBand {
    pub const fn new(up_to_km: u32, fare: u32) -> Self {
        Self { up_to_km, fare }
    }
}

/// Error returned when a tariff would not be monotonic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidFareTable {
    /// Band limits must strictly increase
    #[error("band limit {0} km does not exceed the previous band")]
    UnorderedBands(u32),

    /// A band is cheaper than a shorter one
    #[error("fare {fare} for trips up to {up_to_km} km is below a shorter band")]
    DecreasingFare { up_to_km: u32, fare: u32 },

    /// The open-ended fare is cheaper than the last band
    #[error("fare {0} beyond the last band is below the last band's fare")]
    DecreasingOverflowFare(u32),
}

/// Fare configuration.
///
/// Bands are checked in order; distances beyond the last band pay
/// `beyond_last_band`. Every accepted table is non-decreasing in distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareTable {
    bands: Vec<FareBand>,
    beyond_last_band: u32,
}

/// Delhi Metro tariff, in rupees.
const DELHI_BANDS: [FareBand; 5] = [
    FareBand::new(2, 10),
    FareBand::new(5, 20),
    FareBand::new(12, 30),
    FareBand::new(21, 40),
    FareBand::new(32, 50),
];
const DELHI_BEYOND: u32 = 60;

impl FareTable {
    /// Create a tariff from inclusive upper-bound bands.
    pub fn new(bands: Vec<FareBand>, beyond_last_band: u32) -> Result<Self, InvalidFareTable> {
        for pair in bands.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next.up_to_km <= prev.up_to_km {
                return Err(InvalidFareTable::UnorderedBands(next.up_to_km));
            }
            if next.fare < prev.fare {
                return Err(InvalidFareTable::DecreasingFare {
                    up_to_km: next.up_to_km,
                    fare: next.fare,
                });
            }
        }
        if let Some(last) = bands.last()
            && beyond_last_band < last.fare
        {
            return Err(InvalidFareTable::DecreasingOverflowFare(beyond_last_band));
        }
        Ok(Self {
            bands,
            beyond_last_band,
        })
    }

    /// The Delhi Metro tariff.
    pub fn delhi() -> Self {
        Self {
            bands: DELHI_BANDS.to_vec(),
            beyond_last_band: DELHI_BEYOND,
        }
    }

    /// Fare for a trip of `distance_km` whole kilometres.
    pub fn fare_for(&self, distance_km: u32) -> u32 {
        self.bands
            .iter()
            .find(|band| distance_km <= band.up_to_km)
            .map_or(self.beyond_last_band, |band| band.fare)
    }

    pub fn bands(&self) -> &[FareBand] {
        &self.bands
    }
}

impl Default for FareTable {
    fn default() -> Self {
        Self::delhi()
    }
}
