use crate::error::GeoWindowError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Units of length on the surface of the Earth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    /// Meter.
    Meter,
    /// Kilometer, 1000 meters.
    Kilometer,
    /// International statute mile, 1609.344 meters.
    Mile,
    /// International nautical mile, 1852 meters.
    NauticalMile,
    /// Rod, 5.0292 meters.
    Rod,
}

impl LengthUnit {
    /// Length of one unit in meters.
    pub fn meters(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Mile => 1609.344,
            LengthUnit::NauticalMile => 1852.0,
            LengthUnit::Rod => 5.0292,
        }
    }

    /// Converts `length` given in these units into meters.
    pub fn to_meters(self, length: f64) -> f64 {
        length * self.meters()
    }

    /// Converts `meters` into these units.
    pub fn meters_to_length(self, meters: f64) -> f64 {
        meters / self.meters()
    }

    /// Converts `length` given in these units into `other` units.
    pub fn convert(self, length: f64, other: LengthUnit) -> f64 {
        other.meters_to_length(self.to_meters(length))
    }

    /// Short name of the unit.
    pub fn abbreviation(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Mile => "mi",
            LengthUnit::NauticalMile => "nmi",
            LengthUnit::Rod => "rd",
        }
    }
}

impl Display for LengthUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for LengthUnit {
    type Err = GeoWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "meter" | "meters" => Ok(LengthUnit::Meter),
            "km" | "kilometer" | "kilometers" => Ok(LengthUnit::Kilometer),
            "mi" | "mile" | "miles" => Ok(LengthUnit::Mile),
            "nmi" | "nautical_mile" | "nautical_miles" => Ok(LengthUnit::NauticalMile),
            "rd" | "rod" | "rods" => Ok(LengthUnit::Rod),
            _ => Err(GeoWindowError::InvalidArgument("unit")),
        }
    }
}
