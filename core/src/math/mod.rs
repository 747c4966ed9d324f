pub mod radiometer;
pub mod spectral;

pub use radiometer::RadiometerHelper;
pub use spectral::SpectralHelper;
