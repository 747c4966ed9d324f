use ndarray::{Array1, ArrayView1};

use crate::constants::SPEED_OF_LIGHT;
use crate::math::RadiometerHelper;
use crate::prelude::{EstimatorError, EstimatorResult};
use crate::table::{names, Column, LineTable, Unit};
use crate::units::{Time, TimeExt};

/// Name of the flux column for one integration time of a call.
///
/// A lone integration time writes plain `"Flux"`; otherwise the time is
/// rounded to whole hours (half to even), so 8.3 h and 8.4 h share `"Flux 8h"`.
pub fn flux_label(integration_time: Time, single: bool) -> String {
    if single {
        names::FLUX.to_string()
    } else {
        format!("{} {:.0}h", names::FLUX, integration_time.as_hours())
    }
}

/// Every per-line intermediate for one integration time, in SI units.
#[derive(Debug, Clone)]
pub struct SensitivityRun {
    pub integration_time: Time,
    pub delta_t_k: Array1<f64>,
    pub channel_m_s: Array1<f64>,
    /// W m⁻² Hz⁻¹ sr⁻¹
    pub min_bright: Array1<f64>,
    /// W m⁻² sr⁻¹
    pub min_bright2: Array1<f64>,
    /// W m⁻² Hz⁻¹
    pub flux_density: Array1<f64>,
    /// W m⁻²
    pub flux: Array1<f64>,
}

impl SensitivityRun {
    pub fn compute(
        table: &LineTable,
        linewidth_m_s: f64,
        integration_time: Time,
        n_pol: f64,
    ) -> EstimatorResult<Self> {
        let tsys = table.si(names::TSYS)?;
        let bandwidth = table.si(names::BW)?;
        let wavelength = table.si(names::WAVELENGTH)?;
        let frequency = table.si(names::FREQUENCY)?;
        let beam = table.si(names::BEAM_SOLID_ANGLE)?;

        let delta_t_k = RadiometerHelper::delta_t(
            tsys.view(),
            bandwidth.view(),
            integration_time.as_seconds(),
            n_pol,
        );
        let channel_m_s = &bandwidth * &wavelength;
        let min_bright =
            RadiometerHelper::rayleigh_jeans_brightness(delta_t_k.view(), wavelength.view());
        let min_bright2 = &min_bright * &frequency * (linewidth_m_s / SPEED_OF_LIGHT);
        let flux_density = &beam * &min_bright;
        let flux = &flux_density * &bandwidth;
        if flux.iter().any(|f| !(f.is_finite() && *f > 0.0)) {
            return Err(EstimatorError::InvalidInput(format!(
                "integration time {:e} s yields no finite flux limit",
                integration_time.as_seconds()
            )));
        }

        Ok(Self {
            integration_time,
            delta_t_k,
            channel_m_s,
            min_bright,
            min_bright2,
            flux_density,
            flux,
        })
    }

    /// Intermediate columns in the units the table reports them in.
    pub fn intermediate_columns(&self) -> Vec<Column> {
        vec![
            Column::from_si(names::SENSITIVITY_DT, Unit::Kelvin, self.delta_t_k.clone()),
            Column::from_si(
                names::CHANNEL,
                Unit::KilometerPerSecond,
                self.channel_m_s.clone(),
            ),
            Column::from_si(
                names::MIN_BRIGHT,
                Unit::SpectralRadiance,
                self.min_bright.clone(),
            ),
            Column::from_si(names::MIN_BRIGHT2, Unit::Radiance, self.min_bright2.clone()),
            Column::from_si(
                names::FLUX_DENSITY,
                Unit::SpectralFluxDensity,
                self.flux_density.clone(),
            ),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluxKind {
    /// Sole integration time of its call.
    Single,
    /// One of several integration times of its call.
    PerTime,
}

/// Flux limit per line for one integration time, tagged by how it was requested.
#[derive(Debug, Clone)]
pub struct FluxResult {
    pub label: String,
    pub integration_time: Time,
    pub kind: FluxKind,
    /// W m⁻²
    pub flux: Array1<f64>,
}

impl FluxResult {
    pub fn from_run(run: &SensitivityRun, single: bool) -> Self {
        Self {
            label: flux_label(run.integration_time, single),
            integration_time: run.integration_time,
            kind: if single {
                FluxKind::Single
            } else {
                FluxKind::PerTime
            },
            flux: run.flux.clone(),
        }
    }

    pub fn flux(&self) -> ArrayView1<'_, f64> {
        self.flux.view()
    }

    pub fn to_column(&self) -> Column {
        Column::from_si(self.label.clone(), Unit::Flux, self.flux.clone())
    }
}
