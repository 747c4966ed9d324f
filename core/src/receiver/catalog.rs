/// Fixed calibration inputs of one heterodyne receiver line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSpec {
    pub species: &'static str,
    pub wavelength_um: f64,
    /// Double-sideband receiver noise temperature [K].
    pub dsb_tn_k: f64,
    /// Mixer conversion gain [dB].
    pub g_mix_db: f64,
    /// IF tuning range [GHz].
    pub range_ghz: f64,
    /// Spectrometer bandwidth [MHz].
    pub bandwidth_mhz: f64,
}

impl LineSpec {
    const fn new(
        species: &'static str,
        wavelength_um: f64,
        dsb_tn_k: f64,
        g_mix_db: f64,
        range_ghz: f64,
        bandwidth_mhz: f64,
    ) -> Self {
        Self {
            species,
            wavelength_um,
            dsb_tn_k,
            g_mix_db,
            range_ghz,
            bandwidth_mhz,
        }
    }
}

pub const LINE_COUNT: usize = 8;

/// Receiver lines in table order.
pub const LINE_CATALOG: [LineSpec; LINE_COUNT] = [
    LineSpec::new("CI [608]", 609.3, 40.0, -1.0, 8.0, 18.0),
    LineSpec::new("CI [370]", 370.6, 130.0, -2.0, 16.0, 269.85),
    LineSpec::new("NII [205]", 205.30, 400.0, -4.9, 16.0, 483.67),
    LineSpec::new("CII [158]", 157.68, 390.0, -5.5, 16.0, 633.77),
    LineSpec::new("OI [145]", 145.53, 400.0, -6.5, 16.0, 689.48),
    LineSpec::new("NII [122]", 121.8, 410.0, -7.2, 16.0, 817.23),
    LineSpec::new("OH [119]", 119.0, 344.0, -6.0, 16.0, 18.0),
    LineSpec::new("OI [63]", 63.18, 460.0, -6.0, 8.0, 18.0),
];
