//! Receiver catalog and construction of the per-line reference table.

pub mod catalog;
pub mod chain;

use ndarray::Array1;

pub use catalog::{LineSpec, LINE_CATALOG, LINE_COUNT};
pub use chain::ReceiverChain;

use crate::config::TelescopeConfig;
use crate::math::{RadiometerHelper, SpectralHelper};
use crate::prelude::EstimatorResult;
use crate::table::{names, Column, LineTable, Unit};

fn catalog_column(field: impl Fn(&LineSpec) -> f64) -> Array1<f64> {
    LINE_CATALOG.iter().map(field).collect()
}

/// Builds every column derivable from the literal catalog and the aperture.
pub fn reference_table(
    telescope: &TelescopeConfig,
    chain: &ReceiverChain,
) -> EstimatorResult<LineTable> {
    let species = LINE_CATALOG.iter().map(|l| l.species.to_string()).collect();
    let mut table = LineTable::new(species);
    let rows = table.len();

    let wavelength_um = catalog_column(|l| l.wavelength_um);
    let frequency_ghz = SpectralHelper::frequencies_ghz(wavelength_um.view());
    let quantum_noise = SpectralHelper::quantum_noise_k(frequency_ghz.view());
    let dsb_tn = catalog_column(|l| l.dsb_tn_k);
    let g_mix_db = catalog_column(|l| l.g_mix_db);
    let g_mix = g_mix_db.mapv(RadiometerHelper::db_to_linear);
    let tsys = chain.system_temperatures(dsb_tn.view(), g_mix.view());

    let aeff = telescope.effective_area_m2();
    let beam = wavelength_um.mapv(|um| {
        let lambda = um * Unit::Micron.si_factor();
        lambda * lambda / aeff
    });

    table.set_column(Column::new(names::WAVELENGTH, Unit::Micron, wavelength_um))?;
    table.set_column(Column::new(names::FREQUENCY, Unit::Gigahertz, frequency_ghz))?;
    table.set_column(Column::new(
        names::QUANTUM_NOISE,
        Unit::Kelvin,
        quantum_noise.clone(),
    ))?;
    table.set_column(Column::new(names::DSB_TN, Unit::Kelvin, dsb_tn.clone()))?;
    table.set_column(Column::new(
        names::QN,
        Unit::Dimensionless,
        &dsb_tn / &quantum_noise,
    ))?;
    table.set_column(Column::filled(
        names::G_FR,
        Unit::Dimensionless,
        chain.front_end_gain,
        rows,
    ))?;
    table.set_column(Column::filled(
        names::T_RF,
        Unit::Kelvin,
        chain.rf_temperature_k,
        rows,
    ))?;
    table.set_column(Column::new(names::G_MIX_DB, Unit::Decibel, g_mix_db))?;
    table.set_column(Column::new(names::G_MIX, Unit::Dimensionless, g_mix))?;
    table.set_column(Column::filled(
        names::T_IF,
        Unit::Kelvin,
        chain.if_temperature_k,
        rows,
    ))?;
    table.set_column(Column::new(names::TSYS, Unit::Kelvin, tsys))?;
    table.set_column(Column::new(names::BEAM_SOLID_ANGLE, Unit::Steradian, beam))?;
    table.set_column(Column::new(
        names::RANGE,
        Unit::Gigahertz,
        catalog_column(|l| l.range_ghz),
    ))?;
    table.set_column(Column::new(
        names::BW,
        Unit::Megahertz,
        catalog_column(|l| l.bandwidth_mhz),
    ))?;

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn default_table() -> LineTable {
        reference_table(&TelescopeConfig::default(), &ReceiverChain::default()).unwrap()
    }

    #[test]
    fn table_has_fixed_rows_in_catalog_order() {
        let table = default_table();
        assert_eq!(table.len(), LINE_COUNT);
        assert_eq!(
            table.species(),
            &[
                "CI [608]",
                "CI [370]",
                "NII [205]",
                "CII [158]",
                "OI [145]",
                "NII [122]",
                "OH [119]",
                "OI [63]"
            ]
        );
    }

    #[test]
    fn table_columns_follow_receiver_layout() {
        let table = default_table();
        assert_eq!(
            table.column_names(),
            vec![
                "Wavelength",
                "Frequency",
                "Quantum Noise",
                "Expected DSB TN",
                "QN",
                "G_FR",
                "T_RF",
                "G_Mix",
                "G_mix",
                "T_IF",
                "Expected Tsys",
                "Beam solid angle",
                "Range",
                "BW"
            ]
        );
        assert_eq!(table.require(names::BW).unwrap().unit(), Unit::Megahertz);
        assert_eq!(table.require(names::G_MIX_DB).unwrap().unit(), Unit::Decibel);
    }

    #[test]
    fn cii_row_matches_closed_form() {
        let table = default_table();
        let row = table.row(3).unwrap();
        assert_eq!(row.species(), "CII [158]");
        let g_mix = 10f64.powf(-5.5 / 10.0);
        let expected = ((1.0 / 0.86 - 1.0) * 50.0 + 390.0 / 0.86 + 5.0 / (0.86 * g_mix)) * 1.05;
        assert_relative_eq!(row.value(names::TSYS).unwrap(), expected, max_relative = 1e-12);
        assert_relative_eq!(row.value(names::FREQUENCY).unwrap(), 1901.2713, epsilon = 1e-3);
        let qn = row.value(names::QN).unwrap();
        assert_relative_eq!(
            qn,
            390.0 / row.value(names::QUANTUM_NOISE).unwrap(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn beam_solid_angle_scales_with_effective_area() {
        let small = default_table();
        let large = reference_table(
            &TelescopeConfig {
                diameter_m: 4.0,
                aperture_efficiency: 0.8,
            },
            &ReceiverChain::default(),
        )
        .unwrap();
        let lambda = 157.68e-6;
        let aeff = 0.8 * std::f64::consts::PI;
        assert_relative_eq!(
            small.row(3).unwrap().value(names::BEAM_SOLID_ANGLE).unwrap(),
            lambda * lambda / aeff,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            small.require(names::BEAM_SOLID_ANGLE).unwrap().values()[0],
            4.0 * large.require(names::BEAM_SOLID_ANGLE).unwrap().values()[0],
            max_relative = 1e-12
        );
    }
}
