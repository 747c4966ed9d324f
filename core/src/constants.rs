//! Physical constants and fixed survey assumptions, all in SI.

/// Planck constant [J s], exact since the 2019 SI redefinition.
pub const PLANCK: f64 = 6.626_070_15e-34;

/// Boltzmann constant [J/K], exact.
pub const BOLTZMANN: f64 = 1.380_649e-23;

/// Speed of light in vacuum [m/s], exact.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// IAU 2015 nominal solar luminosity [W].
pub const SOLAR_LUMINOSITY: f64 = 3.828e26;

/// One parsec [m].
pub const PARSEC: f64 = 3.085_677_581_491_367_3e16;

/// One megaparsec [m].
pub const MEGAPARSEC: f64 = 1.0e6 * PARSEC;

/// Margin applied on top of the receiver-chain system temperature.
pub const TSYS_MARGIN: f64 = 1.05;

/// Nearest distance assumed for the target galaxy population [Mpc].
pub const MIN_SOURCE_DISTANCE_MPC: f64 = 115.0;

/// Feed/front-end transmission shared by every receiver.
pub const FRONT_END_GAIN: f64 = 0.86;

/// Physical temperature of the RF optics [K].
pub const RF_TEMPERATURE_K: f64 = 50.0;

/// IF amplifier noise temperature [K].
pub const IF_TEMPERATURE_K: f64 = 5.0;

/// Default primary aperture diameter [m].
pub const DEFAULT_DIAMETER_M: f64 = 2.0;

/// Default aperture efficiency.
pub const DEFAULT_APERTURE_EFFICIENCY: f64 = 0.8;
