//! Shared constants for graph loading and delivery pricing.

/// Weight given to every route when the graph source carries no weights.
///
/// One flight leg costs this much, which is why [`FLIGHT_UNIT_COST`] is
/// derived from it: a path's accumulated weight divided by the unit cost is
/// the number of flights taken.
pub const DEFAULT_EDGE_WEIGHT: f64 = 8.0;

/// Path weight corresponding to a single flight.
pub const FLIGHT_UNIT_COST: f64 = DEFAULT_EDGE_WEIGHT;

/// Parcels lighter than this carry no weight surcharge.
pub const LIGHT_PARCEL_LIMIT_KG: f64 = 1.0;

/// Parcels at or above this weight fall into the heavy tier.
pub const HEAVY_PARCEL_THRESHOLD_KG: f64 = 5.0;

pub const STANDARD_WEIGHT_SURCHARGE: f64 = 20.0;
pub const HEAVY_WEIGHT_SURCHARGE: f64 = 40.0;

pub const SIZE_A_SURCHARGE: f64 = 40.0;
pub const SIZE_B_SURCHARGE: f64 = 48.0;
pub const SIZE_C_SURCHARGE: f64 = 80.0;

pub const WEAPONS_MULTIPLIER: f64 = 2.0;
pub const CAUTIOUS_PARCELS_MULTIPLIER: f64 = 1.75;
pub const REFRIGERATED_GOODS_MULTIPLIER: f64 = 1.1;
