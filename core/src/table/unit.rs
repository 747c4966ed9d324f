use std::fmt;

use crate::prelude::{EstimatorError, EstimatorResult};

/// Physical unit tag attached to each table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Dimensionless,
    Decibel,
    Micron,
    Meter,
    Megahertz,
    Gigahertz,
    Kelvin,
    Steradian,
    KilometerPerSecond,
    /// W m⁻² Hz⁻¹ sr⁻¹
    SpectralRadiance,
    /// W m⁻² sr⁻¹
    Radiance,
    /// W m⁻² Hz⁻¹
    SpectralFluxDensity,
    /// W m⁻²
    Flux,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dimension {
    Ratio,
    Logarithmic,
    Length,
    Frequency,
    Temperature,
    SolidAngle,
    Velocity,
    SpectralRadiance,
    Radiance,
    SpectralFluxDensity,
    Flux,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Dimensionless => "",
            Unit::Decibel => "dB",
            Unit::Micron => "micron",
            Unit::Meter => "m",
            Unit::Megahertz => "MHz",
            Unit::Gigahertz => "GHz",
            Unit::Kelvin => "K",
            Unit::Steradian => "sr",
            Unit::KilometerPerSecond => "km / s",
            Unit::SpectralRadiance => "W / (Hz m2 sr)",
            Unit::Radiance => "W / (m2 sr)",
            Unit::SpectralFluxDensity => "W / (Hz m2)",
            Unit::Flux => "W / m2",
        }
    }

    fn dimension(&self) -> Dimension {
        match self {
            Unit::Dimensionless => Dimension::Ratio,
            Unit::Decibel => Dimension::Logarithmic,
            Unit::Micron | Unit::Meter => Dimension::Length,
            Unit::Megahertz | Unit::Gigahertz => Dimension::Frequency,
            Unit::Kelvin => Dimension::Temperature,
            Unit::Steradian => Dimension::SolidAngle,
            Unit::KilometerPerSecond => Dimension::Velocity,
            Unit::SpectralRadiance => Dimension::SpectralRadiance,
            Unit::Radiance => Dimension::Radiance,
            Unit::SpectralFluxDensity => Dimension::SpectralFluxDensity,
            Unit::Flux => Dimension::Flux,
        }
    }

    /// Multiplier taking a value in this unit to its SI base form.
    pub fn si_factor(&self) -> f64 {
        match self {
            Unit::Micron => 1.0e-6,
            Unit::Megahertz => 1.0e6,
            Unit::Gigahertz => 1.0e9,
            Unit::KilometerPerSecond => 1.0e3,
            _ => 1.0,
        }
    }

    pub fn is_compatible(&self, other: Unit) -> bool {
        self.dimension() == other.dimension()
    }

    /// Factor converting values in `self` to values in `target`.
    pub fn conversion_factor(&self, target: Unit) -> EstimatorResult<f64> {
        if !self.is_compatible(target) {
            return Err(EstimatorError::UnitMismatch {
                from: self.to_string(),
                to: target.to_string(),
            });
        }
        Ok(self.si_factor() / target.si_factor())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Dimensionless => f.write_str("dimensionless"),
            other => f.write_str(other.symbol()),
        }
    }
}
