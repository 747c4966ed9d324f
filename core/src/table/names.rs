//! Column names shared by the reference table and the flux estimates.

pub const WAVELENGTH: &str = "Wavelength";
pub const FREQUENCY: &str = "Frequency";
pub const QUANTUM_NOISE: &str = "Quantum Noise";
pub const DSB_TN: &str = "Expected DSB TN";
pub const QN: &str = "QN";
pub const G_FR: &str = "G_FR";
pub const T_RF: &str = "T_RF";
pub const G_MIX_DB: &str = "G_Mix";
pub const G_MIX: &str = "G_mix";
pub const T_IF: &str = "T_IF";
pub const TSYS: &str = "Expected Tsys";
pub const BEAM_SOLID_ANGLE: &str = "Beam solid angle";
pub const RANGE: &str = "Range";
pub const BW: &str = "BW";

pub const SENSITIVITY_DT: &str = "Sensitivity DT";
pub const CHANNEL: &str = "Channel";
pub const MIN_BRIGHT: &str = "Min Bright";
pub const MIN_BRIGHT2: &str = "Min Bright2";
pub const FLUX_DENSITY: &str = "Flux Density";
pub const FLUX: &str = "Flux";
