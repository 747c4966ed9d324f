use ndarray::{Array1, ArrayView1};
use uom::si::frequency::hertz;

use crate::constants::{BOLTZMANN, PLANCK, SPEED_OF_LIGHT};
use crate::units::{Frequency, FrequencyExt, Length, LengthExt, Temperature, TemperatureExt};

/// Spectral equivalences between wavelength and frequency.
pub struct SpectralHelper;

impl SpectralHelper {
    /// `ν = c / λ`
    pub fn wavelength_to_frequency(wavelength: Length) -> Frequency {
        Frequency::new::<hertz>(SPEED_OF_LIGHT / wavelength.as_meters())
    }

    /// `λ = c / ν`
    pub fn frequency_to_wavelength(frequency: Frequency) -> Length {
        Length::from_meters(SPEED_OF_LIGHT / frequency.as_hertz())
    }

    /// Quantum limit `h ν / k_B` of a receiver at `frequency`.
    pub fn quantum_noise(frequency: Frequency) -> Temperature {
        Temperature::from_kelvin(PLANCK * frequency.as_hertz() / BOLTZMANN)
    }

    /// Columnar form of [`Self::wavelength_to_frequency`]: microns in, GHz out.
    pub fn frequencies_ghz(wavelengths_um: ArrayView1<f64>) -> Array1<f64> {
        wavelengths_um.mapv(|um| {
            Self::wavelength_to_frequency(Length::from_micrometers(um)).as_gigahertz()
        })
    }

    /// Columnar form of [`Self::quantum_noise`]: GHz in, kelvin out.
    pub fn quantum_noise_k(frequencies_ghz: ArrayView1<f64>) -> Array1<f64> {
        frequencies_ghz
            .mapv(|ghz| Self::quantum_noise(Frequency::from_gigahertz(ghz)).as_kelvin())
    }
}
