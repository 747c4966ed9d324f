use ndarray::{Array1, ArrayView1};

use crate::prelude::EstimatorResult;
use crate::table::unit::Unit;

/// Named, unit-tagged column of per-line values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    unit: Unit,
    values: Array1<f64>,
}

impl Column {
    pub fn new(name: impl Into<String>, unit: Unit, values: Array1<f64>) -> Self {
        Self {
            name: name.into(),
            unit,
            values,
        }
    }

    /// Broadcasts a single value over `len` rows.
    pub fn filled(name: impl Into<String>, unit: Unit, value: f64, len: usize) -> Self {
        Self::new(name, unit, Array1::from_elem(len, value))
    }

    /// Builds a column in `unit` from values expressed in SI base units.
    pub fn from_si(name: impl Into<String>, unit: Unit, si_values: Array1<f64>) -> Self {
        let factor = unit.si_factor();
        Self::new(name, unit, si_values.mapv(|v| v / factor))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<f64> {
        self.values.get(row).copied()
    }

    pub fn si_values(&self) -> Array1<f64> {
        let factor = self.unit.si_factor();
        self.values.mapv(|v| v * factor)
    }

    /// Explicit conversion; the only way a column's unit changes.
    pub fn to_unit(&self, unit: Unit) -> EstimatorResult<Column> {
        let factor = self.unit.conversion_factor(unit)?;
        Ok(Self::new(
            self.name.clone(),
            unit,
            self.values.mapv(|v| v * factor),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn si_round_trip_preserves_display_values() {
        let col = Column::from_si("BW", Unit::Megahertz, array![18.0e6, 633.77e6]);
        assert_relative_eq!(col.get(1).unwrap(), 633.77, max_relative = 1e-12);
        assert_relative_eq!(col.si_values()[0], 18.0e6, max_relative = 1e-12);
    }

    #[test]
    fn to_unit_keeps_name_and_rescales() {
        let col = Column::new("Frequency", Unit::Gigahertz, array![1.5]);
        let mhz = col.to_unit(Unit::Megahertz).unwrap();
        assert_eq!(mhz.name(), "Frequency");
        assert_eq!(mhz.unit(), Unit::Megahertz);
        assert_relative_eq!(mhz.get(0).unwrap(), 1500.0, max_relative = 1e-12);
        assert!(col.to_unit(Unit::Kelvin).is_err());
    }

    #[test]
    fn filled_broadcasts_value() {
        let col = Column::filled("T_IF", Unit::Kelvin, 5.0, 8);
        assert_eq!(col.len(), 8);
        assert!(col.values().iter().all(|&v| v == 5.0));
        assert_eq!(col.get(8), None);
    }
}
