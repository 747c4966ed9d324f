use ndarray::{Array1, ArrayView1, Zip};

use crate::constants::BOLTZMANN;

/// Radiometer-equation helpers operating on per-line columns (SI units).
pub struct RadiometerHelper;

impl RadiometerHelper {
    /// Converts a power ratio in decibels to a linear factor.
    pub fn db_to_linear(db: f64) -> f64 {
        10f64.powf(db / 10.0)
    }

    /// Noise-equivalent temperature `n_pol · Tsys / sqrt(2 · BW · t_int)`.
    pub fn delta_t(
        tsys_k: ArrayView1<f64>,
        bandwidth_hz: ArrayView1<f64>,
        integration_s: f64,
        n_pol: f64,
    ) -> Array1<f64> {
        let root_t = integration_s.sqrt();
        Zip::from(&tsys_k)
            .and(&bandwidth_hz)
            .map_collect(|&tsys, &bw| n_pol * tsys / ((2.0 * bw).sqrt() * root_t))
    }

    /// Rayleigh-Jeans specific intensity `2 k_B ΔT / λ²` [W m⁻² Hz⁻¹ sr⁻¹].
    pub fn rayleigh_jeans_brightness(
        delta_t_k: ArrayView1<f64>,
        wavelength_m: ArrayView1<f64>,
    ) -> Array1<f64> {
        Zip::from(&delta_t_k)
            .and(&wavelength_m)
            .map_collect(|&dt, &lambda| 2.0 * BOLTZMANN * dt / (lambda * lambda))
    }
}
