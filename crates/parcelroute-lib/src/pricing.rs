//! Delivery cost calculation.
//!
//! Pricing is a pure function of the path's accumulated weight and the parcel:
//!
//! 1. weight tier surcharge (`< 1 kg` free, `[1, 5)` standard, `>= 5` heavy)
//! 2. plus the size surcharge
//! 3. times the parcel type multiplier, giving the per-flight parcel cost
//! 4. times the number of flights (`distance / flight_unit_cost`)

use serde::{Deserialize, Serialize};

use crate::constants::{
    CAUTIOUS_PARCELS_MULTIPLIER, FLIGHT_UNIT_COST, HEAVY_PARCEL_THRESHOLD_KG,
    HEAVY_WEIGHT_SURCHARGE, LIGHT_PARCEL_LIMIT_KG, REFRIGERATED_GOODS_MULTIPLIER,
    SIZE_A_SURCHARGE, SIZE_B_SURCHARGE, SIZE_C_SURCHARGE, STANDARD_WEIGHT_SURCHARGE,
    WEAPONS_MULTIPLIER,
};
use crate::error::{Error, Result};
use crate::parcel::{Parcel, ParcelSize, ParcelType};

/// Pricing configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingConfig {
    /// Path weight that corresponds to one flight. Must match the weight
    /// convention used when the graph was loaded.
    pub flight_unit_cost: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            flight_unit_cost: FLIGHT_UNIT_COST,
        }
    }
}

impl PricingConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.flight_unit_cost.is_finite() || self.flight_unit_cost <= 0.0 {
            return Err(Error::InvalidPricing {
                message: format!(
                    "flight unit cost must be finite and positive, got {}",
                    self.flight_unit_cost
                ),
            });
        }
        Ok(())
    }
}

/// Itemised delivery cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryQuote {
    pub weight_surcharge: f64,
    pub size_surcharge: f64,
    /// Weight plus size surcharge, before the type multiplier.
    pub subtotal: f64,
    pub type_multiplier: f64,
    /// Cost of carrying the parcel on one flight.
    pub parcel_cost: f64,
    pub distance: f64,
    pub flights: f64,
    pub total: f64,
}

pub fn weight_surcharge(weight_kg: f64) -> f64 {
    if weight_kg < LIGHT_PARCEL_LIMIT_KG {
        0.0
    } else if weight_kg < HEAVY_PARCEL_THRESHOLD_KG {
        STANDARD_WEIGHT_SURCHARGE
    } else {
        HEAVY_WEIGHT_SURCHARGE
    }
}

pub fn size_surcharge(size: ParcelSize) -> f64 {
    match size {
        ParcelSize::A => SIZE_A_SURCHARGE,
        ParcelSize::B => SIZE_B_SURCHARGE,
        ParcelSize::C => SIZE_C_SURCHARGE,
    }
}

pub fn type_multiplier(parcel_type: ParcelType) -> f64 {
    match parcel_type {
        ParcelType::Weapons => WEAPONS_MULTIPLIER,
        ParcelType::CautiousParcels => CAUTIOUS_PARCELS_MULTIPLIER,
        ParcelType::RefrigeratedGoods => REFRIGERATED_GOODS_MULTIPLIER,
    }
}

/// Per-flight cost of a parcel.
pub fn parcel_cost(parcel: &Parcel) -> f64 {
    (weight_surcharge(parcel.weight_kg()) + size_surcharge(parcel.size()))
        * type_multiplier(parcel.parcel_type())
}

/// Number of flights a path of `total_distance` represents.
pub fn flight_count(total_distance: f64, config: &PricingConfig) -> Result<f64> {
    config.validate()?;
    if !total_distance.is_finite() || total_distance < 0.0 {
        return Err(Error::InvalidPricing {
            message: format!("distance must be finite and non-negative, got {total_distance}"),
        });
    }
    Ok(total_distance / config.flight_unit_cost)
}

/// Final delivery cost for carrying `parcel` over a path of `total_distance`.
pub fn calculate_delivery_cost(
    total_distance: f64,
    parcel: &Parcel,
    config: &PricingConfig,
) -> Result<f64> {
    Ok(parcel_cost(parcel) * flight_count(total_distance, config)?)
}

/// Same as [`calculate_delivery_cost`] but keeps every intermediate amount.
pub fn quote_delivery(
    total_distance: f64,
    parcel: &Parcel,
    config: &PricingConfig,
) -> Result<DeliveryQuote> {
    let flights = flight_count(total_distance, config)?;
    let weight_surcharge = weight_surcharge(parcel.weight_kg());
    let size_surcharge = size_surcharge(parcel.size());
    let subtotal = weight_surcharge + size_surcharge;
    let type_multiplier = type_multiplier(parcel.parcel_type());
    let parcel_cost = subtotal * type_multiplier;

    Ok(DeliveryQuote {
        weight_surcharge,
        size_surcharge,
        subtotal,
        type_multiplier,
        parcel_cost,
        distance: total_distance,
        flights,
        total: parcel_cost * flights,
    })
}
