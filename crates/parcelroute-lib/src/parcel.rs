//! Parcel attributes used for delivery pricing.
//!
//! Size and type are closed enums. User-facing strings and the legacy numeric
//! type codes are mapped onto them here, at the input boundary, and anything
//! unrecognised is rejected instead of pricing as zero.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Size category of a parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParcelSize {
    A,
    B,
    C,
}

impl ParcelSize {
    pub const ALL: [ParcelSize; 3] = [ParcelSize::A, ParcelSize::B, ParcelSize::C];

    pub fn code(self) -> &'static str {
        match self {
            ParcelSize::A => "A",
            ParcelSize::B => "B",
            ParcelSize::C => "C",
        }
    }
}

impl fmt::Display for ParcelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ParcelSize {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(ParcelSize::A),
            "B" => Ok(ParcelSize::B),
            "C" => Ok(ParcelSize::C),
            _ => Err(Error::InvalidParcelAttribute {
                attribute: "size",
                value: value.to_string(),
            }),
        }
    }
}

/// Shipment category of a parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParcelType {
    Weapons,
    CautiousParcels,
    RefrigeratedGoods,
}

impl ParcelType {
    pub const ALL: [ParcelType; 3] = [
        ParcelType::Weapons,
        ParcelType::CautiousParcels,
        ParcelType::RefrigeratedGoods,
    ];

    /// Stable numeric code (1-3) accepted as an alternative spelling.
    pub fn code(self) -> u8 {
        match self {
            ParcelType::Weapons => 1,
            ParcelType::CautiousParcels => 2,
            ParcelType::RefrigeratedGoods => 3,
        }
    }

    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(ParcelType::Weapons),
            2 => Ok(ParcelType::CautiousParcels),
            3 => Ok(ParcelType::RefrigeratedGoods),
            other => Err(Error::InvalidParcelAttribute {
                attribute: "type",
                value: other.to_string(),
            }),
        }
    }

    /// Human-readable label shown in prompts and renderings.
    pub fn label(self) -> &'static str {
        match self {
            ParcelType::Weapons => "Weapons",
            ParcelType::CautiousParcels => "Cautious parcels",
            ParcelType::RefrigeratedGoods => "Refrigerated goods",
        }
    }
}

impl fmt::Display for ParcelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ParcelType {
    type Err = Error;

    /// Accepts the label, the variant name, kebab/snake case, or the numeric code.
    fn from_str(value: &str) -> Result<Self> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "weapons" | "1" => Ok(ParcelType::Weapons),
            "cautiousparcels" | "cautious" | "2" => Ok(ParcelType::CautiousParcels),
            "refrigeratedgoods" | "refrigerated" | "3" => Ok(ParcelType::RefrigeratedGoods),
            _ => Err(Error::InvalidParcelAttribute {
                attribute: "type",
                value: value.to_string(),
            }),
        }
    }
}

/// Immutable description of the shipped item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Parcel {
    weight_kg: f64,
    size: ParcelSize,
    parcel_type: ParcelType,
}

impl Parcel {
    /// Build a parcel, rejecting non-finite or non-positive weights.
    pub fn new(weight_kg: f64, size: ParcelSize, parcel_type: ParcelType) -> Result<Self> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(Error::InvalidParcelAttribute {
                attribute: "weight",
                value: weight_kg.to_string(),
            });
        }
        Ok(Self {
            weight_kg,
            size,
            parcel_type,
        })
    }

    /// Validate raw user input for all three attributes.
    pub fn parse(weight: &str, size: &str, parcel_type: &str) -> Result<Self> {
        let weight_kg = parse_weight(weight)?;
        Self::new(weight_kg, size.parse()?, parcel_type.parse()?)
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn size(&self) -> ParcelSize {
        self.size
    }

    pub fn parcel_type(&self) -> ParcelType {
        self.parcel_type
    }
}

/// Parse a weight in kilograms from user input.
pub fn parse_weight(value: &str) -> Result<f64> {
    let weight = value
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidParcelAttribute {
            attribute: "weight",
            value: value.to_string(),
        })?;
    if !weight.is_finite() || weight <= 0.0 {
        return Err(Error::InvalidParcelAttribute {
            attribute: "weight",
            value: value.to_string(),
        });
    }
    Ok(weight)
}
