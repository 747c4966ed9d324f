//! Typed physical quantities for the estimator's public surface.
//!
//! Wavelengths, distances, integration times and linewidths cross the API as
//! `uom` quantities so that a micron can never be passed where a megaparsec is
//! expected. The extension traits below give the handful of astronomical
//! units this domain uses names that read naturally at call sites.

use uom::si::frequency::{gigahertz, hertz, megahertz};
use uom::si::length::{meter, micrometer};
use uom::si::thermodynamic_temperature::kelvin;
use uom::si::time::{hour, second};
use uom::si::velocity::{kilometer_per_second, meter_per_second};

use crate::constants::MEGAPARSEC;

pub use uom::si::f64::{Area, Frequency, Length, Time, Velocity};

/// Type alias for noise and system temperatures.
pub type Temperature = uom::si::f64::ThermodynamicTemperature;

/// Extension trait for wavelengths and source distances
pub trait LengthExt {
    fn from_micrometers(um: f64) -> Self;
    fn as_micrometers(&self) -> f64;
    fn from_meters(m: f64) -> Self;
    fn as_meters(&self) -> f64;
    fn from_megaparsecs(mpc: f64) -> Self;
    fn as_megaparsecs(&self) -> f64;
}

/// Extension trait for line frequencies and bandwidths
pub trait FrequencyExt {
    fn from_gigahertz(ghz: f64) -> Self;
    fn as_gigahertz(&self) -> f64;
    fn from_megahertz(mhz: f64) -> Self;
    fn as_megahertz(&self) -> f64;
    fn as_hertz(&self) -> f64;
}

/// Extension trait for integration times
pub trait TimeExt {
    fn from_hours(h: f64) -> Self;
    fn as_hours(&self) -> f64;
    fn from_seconds(s: f64) -> Self;
    fn as_seconds(&self) -> f64;
}

/// Extension trait for linewidths and channel widths
pub trait VelocityExt {
    fn from_km_per_s(kms: f64) -> Self;
    fn as_km_per_s(&self) -> f64;
    fn as_m_per_s(&self) -> f64;
}

/// Extension trait for temperatures, always absolute kelvin here
pub trait TemperatureExt {
    fn from_kelvin(k: f64) -> Self;
    fn as_kelvin(&self) -> f64;
}

impl LengthExt for Length {
    fn from_micrometers(um: f64) -> Self {
        Length::new::<micrometer>(um)
    }

    fn as_micrometers(&self) -> f64 {
        self.get::<micrometer>()
    }

    fn from_meters(m: f64) -> Self {
        Length::new::<meter>(m)
    }

    fn as_meters(&self) -> f64 {
        self.get::<meter>()
    }

    fn from_megaparsecs(mpc: f64) -> Self {
        Length::new::<meter>(mpc * MEGAPARSEC)
    }

    fn as_megaparsecs(&self) -> f64 {
        self.get::<meter>() / MEGAPARSEC
    }
}

impl FrequencyExt for Frequency {
    fn from_gigahertz(ghz: f64) -> Self {
        Frequency::new::<gigahertz>(ghz)
    }

    fn as_gigahertz(&self) -> f64 {
        self.get::<gigahertz>()
    }

    fn from_megahertz(mhz: f64) -> Self {
        Frequency::new::<megahertz>(mhz)
    }

    fn as_megahertz(&self) -> f64 {
        self.get::<megahertz>()
    }

    fn as_hertz(&self) -> f64 {
        self.get::<hertz>()
    }
}

impl TimeExt for Time {
    fn from_hours(h: f64) -> Self {
        Time::new::<hour>(h)
    }

    fn as_hours(&self) -> f64 {
        self.get::<hour>()
    }

    fn from_seconds(s: f64) -> Self {
        Time::new::<second>(s)
    }

    fn as_seconds(&self) -> f64 {
        self.get::<second>()
    }
}

impl VelocityExt for Velocity {
    fn from_km_per_s(kms: f64) -> Self {
        Velocity::new::<kilometer_per_second>(kms)
    }

    fn as_km_per_s(&self) -> f64 {
        self.get::<kilometer_per_second>()
    }

    fn as_m_per_s(&self) -> f64 {
        self.get::<meter_per_second>()
    }
}

impl TemperatureExt for Temperature {
    fn from_kelvin(k: f64) -> Self {
        Temperature::new::<kelvin>(k)
    }

    fn as_kelvin(&self) -> f64 {
        self.get::<kelvin>()
    }
}
