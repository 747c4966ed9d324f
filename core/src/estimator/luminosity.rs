use std::f64::consts::PI;

use ndarray::{Array1, ArrayView1};

use crate::constants::{MIN_SOURCE_DISTANCE_MPC, SOLAR_LUMINOSITY};
use crate::estimator::flux::FluxResult;
use crate::prelude::{require_positive, EstimatorResult};
use crate::units::{Length, LengthExt, Time};

/// Log luminosity limits per line for one flux result.
#[derive(Debug, Clone)]
pub struct LuminositySeries {
    pub label: String,
    pub integration_time: Time,
    pub distance: Length,
    /// `log10(L / L_sun)`, one entry per line.
    pub log_lsun: Array1<f64>,
}

/// Raises `distance` to the nearest assumed source distance.
///
/// Returns the distance to use and whether it was clamped.
pub fn effective_distance(distance: Length) -> EstimatorResult<(Length, bool)> {
    require_positive("distance", distance.as_meters())?;
    let floor = Length::from_megaparsecs(MIN_SOURCE_DISTANCE_MPC);
    if distance < floor {
        Ok((floor, true))
    } else {
        Ok((distance, false))
    }
}

/// `log10(4π d² F / L_sun)` for each flux value in W m⁻².
pub fn log_luminosity(flux: ArrayView1<f64>, distance: Length) -> Array1<f64> {
    let d = distance.as_meters();
    let sphere = 4.0 * PI * d * d;
    flux.mapv(|f| (sphere * f / SOLAR_LUMINOSITY).log10())
}

impl LuminositySeries {
    /// `distance` must already be clamped.
    pub fn from_flux(result: &FluxResult, distance: Length) -> Self {
        Self {
            label: result.label.clone(),
            integration_time: result.integration_time,
            distance,
            log_lsun: log_luminosity(result.flux(), distance),
        }
    }
}
