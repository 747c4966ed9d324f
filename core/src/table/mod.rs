//! Columnar per-line table with unit-tagged numeric columns.
//!
//! Rows are fixed when the table is created; calls only ever add or
//! overwrite whole columns.

pub mod column;
pub mod names;
pub mod unit;

use std::fmt;

use ndarray::Array1;

pub use column::Column;
pub use unit::Unit;

use crate::prelude::{EstimatorError, EstimatorResult};

#[derive(Debug, Clone, Default)]
pub struct LineTable {
    species: Vec<String>,
    columns: Vec<Column>,
}

impl LineTable {
    pub fn new(species: Vec<String>) -> Self {
        Self {
            species,
            columns: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn species(&self) -> &[String] {
        &self.species
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn require(&self, name: &str) -> EstimatorResult<&Column> {
        self.column(name)
            .ok_or_else(|| EstimatorError::MissingColumn(name.to_string()))
    }

    /// SI values of the named column.
    pub fn si(&self, name: &str) -> EstimatorResult<Array1<f64>> {
        Ok(self.require(name)?.si_values())
    }

    /// Appends `column`, or replaces an existing column of the same name in place.
    pub fn set_column(&mut self, column: Column) -> EstimatorResult<()> {
        if column.len() != self.len() {
            return Err(EstimatorError::ColumnLength {
                name: column.name().to_string(),
                expected: self.len(),
                actual: column.len(),
            });
        }
        match self.columns.iter_mut().find(|c| c.name() == column.name()) {
            Some(slot) => *slot = column,
            None => self.columns.push(column),
        }
        Ok(())
    }

    pub fn row(&self, index: usize) -> Option<LineRow<'_>> {
        (index < self.len()).then_some(LineRow { table: self, index })
    }

    pub fn rows(&self) -> impl Iterator<Item = LineRow<'_>> {
        (0..self.len()).map(move |index| LineRow { table: self, index })
    }
}

/// Borrowed view of a single spectral line across all columns.
#[derive(Debug, Clone, Copy)]
pub struct LineRow<'a> {
    table: &'a LineTable,
    index: usize,
}

impl<'a> LineRow<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn species(&self) -> &'a str {
        &self.table.species[self.index]
    }

    pub fn value(&self, column: &str) -> Option<f64> {
        self.table.column(column).and_then(|c| c.get(self.index))
    }

    /// Value and unit tag of `column` for this line.
    pub fn get(&self, column: &str) -> Option<(f64, Unit)> {
        let col = self.table.column(column)?;
        col.get(self.index).map(|v| (v, col.unit()))
    }
}

fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || (1.0e-3..1.0e6).contains(&magnitude) {
        format!("{:.4}", value)
    } else {
        format!("{:.4e}", value)
    }
}

impl fmt::Display for LineTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header = vec!["Species".to_string()];
        header.extend(self.columns.iter().map(|c| match c.unit() {
            Unit::Dimensionless => c.name().to_string(),
            unit => format!("{} [{}]", c.name(), unit),
        }));

        let body: Vec<Vec<String>> = self
            .rows()
            .map(|row| {
                let mut cells = vec![row.species().to_string()];
                cells.extend(self.columns.iter().map(|c| {
                    c.get(row.index()).map(format_value).unwrap_or_default()
                }));
                cells
            })
            .collect();

        let widths: Vec<usize> = (0..header.len())
            .map(|i| {
                body.iter()
                    .map(|cells| cells[i].len())
                    .chain(std::iter::once(header[i].len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let render = |f: &mut fmt::Formatter<'_>, cells: &[String]| -> fmt::Result {
            let line = cells
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{:>w$}", cell, w = w))
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(f, "{}", line.trim_end())
        };

        render(f, &header)?;
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        render(f, &rule)?;
        for cells in &body {
            render(f, cells)?;
        }
        Ok(())
    }
}
