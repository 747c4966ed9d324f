use ndarray::{Array1, ArrayView1, Zip};

use crate::constants::{FRONT_END_GAIN, IF_TEMPERATURE_K, RF_TEMPERATURE_K, TSYS_MARGIN};

/// Cascade of front-end optics, mixer and IF amplifier feeding one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReceiverChain {
    pub front_end_gain: f64,
    pub rf_temperature_k: f64,
    pub if_temperature_k: f64,
    pub margin: f64,
}

impl Default for ReceiverChain {
    fn default() -> Self {
        Self {
            front_end_gain: FRONT_END_GAIN,
            rf_temperature_k: RF_TEMPERATURE_K,
            if_temperature_k: IF_TEMPERATURE_K,
            margin: TSYS_MARGIN,
        }
    }
}

impl ReceiverChain {
    /// `[(1/G_FR − 1)·T_RF + TN/G_FR + T_IF/(G_FR·G_mix)] × margin`
    pub fn system_temperature(&self, dsb_tn_k: f64, g_mix: f64) -> f64 {
        let g_fr = self.front_end_gain;
        ((1.0 / g_fr - 1.0) * self.rf_temperature_k
            + dsb_tn_k / g_fr
            + self.if_temperature_k / (g_fr * g_mix))
            * self.margin
    }

    pub fn system_temperatures(
        &self,
        dsb_tn_k: ArrayView1<f64>,
        g_mix: ArrayView1<f64>,
    ) -> Array1<f64> {
        Zip::from(&dsb_tn_k)
            .and(&g_mix)
            .map_collect(|&tn, &g| self.system_temperature(tn, g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn lossless_chain_without_margin_reduces_to_receiver_noise() {
        let chain = ReceiverChain {
            front_end_gain: 1.0,
            rf_temperature_k: 50.0,
            if_temperature_k: 0.0,
            margin: 1.0,
        };
        assert_relative_eq!(chain.system_temperature(390.0, 0.5), 390.0);
    }

    #[test]
    fn cii_chain_matches_closed_form() {
        let chain = ReceiverChain::default();
        let g_mix = 10f64.powf(-0.55);
        let expected =
            ((1.0 / 0.86 - 1.0) * 50.0 + 390.0 / 0.86 + 5.0 / (0.86 * g_mix)) * 1.05;
        assert_relative_eq!(chain.system_temperature(390.0, g_mix), expected, max_relative = 1e-12);
        assert_relative_eq!(expected, 506.37, epsilon = 0.01);
    }

    #[test]
    fn array_form_matches_scalar_form() {
        let chain = ReceiverChain::default();
        let tsys = chain.system_temperatures(array![40.0, 460.0].view(), array![0.8, 0.25].view());
        assert_relative_eq!(tsys[1], chain.system_temperature(460.0, 0.25));
    }
}
