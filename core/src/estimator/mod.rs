//! Stateful sensitivity, flux and luminosity estimator.
//!
//! The estimator owns one [`LineTable`] that grows columns, never rows, as
//! `estimate_flux` is called. Alongside the columns it keeps every flux
//! result as an explicit [`FluxResult`] so luminosity retrieval dispatches on
//! [`FluxKind`] instead of column names.

pub mod flux;
pub mod luminosity;

pub use flux::{flux_label, FluxKind, FluxResult, SensitivityRun};
pub use luminosity::{effective_distance, log_luminosity, LuminositySeries};

use crate::config::TelescopeConfig;
use crate::prelude::{require_positive, EstimatorError, EstimatorResult};
use crate::receiver::{reference_table, ReceiverChain};
use crate::table::LineTable;
use crate::telemetry::log::LogManager;
use crate::units::{Length, LengthExt, Time, TimeExt, Velocity, VelocityExt};

pub struct LuminosityEstimator {
    telescope: TelescopeConfig,
    chain: ReceiverChain,
    table: LineTable,
    flux_results: Vec<FluxResult>,
    last_runs: Vec<SensitivityRun>,
    logger: LogManager,
}

impl LuminosityEstimator {
    /// Estimator for the default 2 m, 0.8-efficiency aperture.
    pub fn new() -> EstimatorResult<Self> {
        Self::with_telescope(TelescopeConfig::default())
    }

    pub fn with_telescope(telescope: TelescopeConfig) -> EstimatorResult<Self> {
        telescope.validate()?;
        let mut estimator = Self {
            telescope,
            chain: ReceiverChain::default(),
            table: LineTable::default(),
            flux_results: Vec::new(),
            last_runs: Vec::new(),
            logger: LogManager::for_component("lumicore::estimator"),
        };
        estimator.initialize()?;
        Ok(estimator)
    }

    /// Rebuilds the reference table and forgets every flux estimate.
    pub fn initialize(&mut self) -> EstimatorResult<()> {
        self.table = reference_table(&self.telescope, &self.chain)?;
        self.flux_results.clear();
        self.last_runs.clear();
        self.logger.record(&format!(
            "built reference table: {} lines, effective area {:.4} m2",
            self.table.len(),
            self.telescope.effective_area_m2()
        ));
        Ok(())
    }

    pub fn table(&self) -> &LineTable {
        &self.table
    }

    pub fn telescope(&self) -> &TelescopeConfig {
        &self.telescope
    }

    /// Flux results in the order their columns were first written.
    pub fn flux_results(&self) -> &[FluxResult] {
        &self.flux_results
    }

    pub fn flux_result(&self, label: &str) -> Option<&FluxResult> {
        self.flux_results.iter().find(|r| r.label == label)
    }

    /// Per-time intermediates of the most recent `estimate_flux` call.
    pub fn last_runs(&self) -> &[SensitivityRun] {
        &self.last_runs
    }

    /// Computes sensitivity and flux limits for each integration time.
    ///
    /// The intermediate columns (`Sensitivity DT`, `Channel`, `Min Bright`,
    /// `Min Bright2`, `Flux Density`) hold the last integration time only;
    /// flux columns accumulate, one per label. Nothing is written when an
    /// input is rejected.
    pub fn estimate_flux(
        &mut self,
        linewidth: Velocity,
        integration_times: &[Time],
        n_pol: u32,
    ) -> EstimatorResult<()> {
        if integration_times.is_empty() {
            return Err(EstimatorError::EmptyIntegrationTimes);
        }
        if n_pol == 0 {
            return Err(EstimatorError::InvalidInput(
                "polarization count must be at least 1".into(),
            ));
        }
        let linewidth_m_s = require_positive("linewidth", linewidth.as_m_per_s())?;
        for t in integration_times {
            require_positive("integration time", t.as_seconds())?;
        }

        let runs = integration_times
            .iter()
            .map(|&t| SensitivityRun::compute(&self.table, linewidth_m_s, t, f64::from(n_pol)))
            .collect::<EstimatorResult<Vec<_>>>()?;

        let single = runs.len() == 1;
        for run in &runs {
            for column in run.intermediate_columns() {
                self.table.set_column(column)?;
            }
            let result = FluxResult::from_run(run, single);
            self.table.set_column(result.to_column())?;
            self.record_flux(result);
        }

        self.logger.record(&format!(
            "estimated flux for {} integration time(s), n_pol {}, linewidth {:.1} km/s",
            runs.len(),
            n_pol,
            linewidth.as_km_per_s()
        ));
        self.last_runs = runs;
        Ok(())
    }

    fn record_flux(&mut self, result: FluxResult) {
        match self
            .flux_results
            .iter_mut()
            .find(|existing| existing.label == result.label)
        {
            Some(existing) => {
                self.logger.caution(&format!(
                    "column {} overwritten: {:.2} h replaces {:.2} h",
                    result.label,
                    result.integration_time.as_hours(),
                    existing.integration_time.as_hours()
                ));
                *existing = result;
            }
            None => self.flux_results.push(result),
        }
    }

    /// Log luminosity limits for every per-time flux result, in creation order.
    ///
    /// Distances under 115 Mpc are treated as 115 Mpc. A flux written by a
    /// single-time call is not included; see [`Self::luminosity_of`].
    pub fn retrieve_luminosity(&self, distance: Length) -> EstimatorResult<Vec<LuminositySeries>> {
        let distance = self.clamped(distance)?;
        Ok(self
            .flux_results
            .iter()
            .filter(|r| r.kind == FluxKind::PerTime)
            .map(|r| LuminositySeries::from_flux(r, distance))
            .collect())
    }

    /// Log luminosity limits for any single flux result.
    pub fn luminosity_of(
        &self,
        result: &FluxResult,
        distance: Length,
    ) -> EstimatorResult<LuminositySeries> {
        let distance = self.clamped(distance)?;
        Ok(LuminositySeries::from_flux(result, distance))
    }

    fn clamped(&self, distance: Length) -> EstimatorResult<Length> {
        let (effective, clamped) = effective_distance(distance)?;
        if clamped {
            self.logger.detail(&format!(
                "distance {:.1} Mpc raised to {:.1} Mpc",
                distance.as_megaparsecs(),
                effective.as_megaparsecs()
            ));
        }
        Ok(effective)
    }
}
