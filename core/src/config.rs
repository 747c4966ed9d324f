use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use uom::si::area::square_meter;

use crate::constants::{DEFAULT_APERTURE_EFFICIENCY, DEFAULT_DIAMETER_M};
use crate::prelude::{require_positive, EstimatorError, EstimatorResult};
use crate::units::{Area, Length, LengthExt};

/// Aperture description of the single-dish telescope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelescopeConfig {
    pub diameter_m: f64,
    pub aperture_efficiency: f64,
}

impl Default for TelescopeConfig {
    fn default() -> Self {
        Self {
            diameter_m: DEFAULT_DIAMETER_M,
            aperture_efficiency: DEFAULT_APERTURE_EFFICIENCY,
        }
    }
}

impl TelescopeConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> EstimatorResult<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|source| EstimatorError::ConfigIo {
            path: path_ref.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> EstimatorResult<Self> {
        let config: TelescopeConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EstimatorResult<()> {
        require_positive("telescope diameter", self.diameter_m)?;
        require_positive("aperture efficiency", self.aperture_efficiency)?;
        if self.aperture_efficiency > 1.0 {
            return Err(EstimatorError::InvalidInput(format!(
                "aperture efficiency must not exceed 1, got {}",
                self.aperture_efficiency
            )));
        }
        Ok(())
    }

    pub fn diameter(&self) -> Length {
        Length::from_meters(self.diameter_m)
    }

    pub fn geometric_area(&self) -> Area {
        let radius = self.diameter_m / 2.0;
        Area::new::<square_meter>(PI * radius * radius)
    }

    pub fn effective_area(&self) -> Area {
        self.geometric_area() * self.aperture_efficiency
    }

    pub fn effective_area_m2(&self) -> f64 {
        self.effective_area().get::<square_meter>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_is_two_metre_dish() {
        let cfg = TelescopeConfig::default();
        assert_relative_eq!(cfg.diameter().as_meters(), 2.0);
        assert_relative_eq!(cfg.geometric_area().get::<square_meter>(), PI, max_relative = 1e-12);
        assert_relative_eq!(cfg.effective_area_m2(), 0.8 * PI, max_relative = 1e-12);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"diameter_m: 3.5\naperture_efficiency: 0.7\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = TelescopeConfig::load(&path).unwrap();
        assert_eq!(cfg.diameter_m, 3.5);
        assert_eq!(cfg.aperture_efficiency, 0.7);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = TelescopeConfig::from_yaml_str("diameter_m: 4.0\n").unwrap();
        assert_eq!(cfg.aperture_efficiency, DEFAULT_APERTURE_EFFICIENCY);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(TelescopeConfig::from_yaml_str("aperture_efficiency: 1.5\n").is_err());
        assert!(TelescopeConfig::from_yaml_str("diameter_m: -2.0\n").is_err());
        assert!(matches!(
            TelescopeConfig::from_yaml_str("diameter_m: [1, 2]\n"),
            Err(EstimatorError::ConfigParse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = TelescopeConfig::load("/nonexistent/telescope.yaml").unwrap_err();
        assert!(matches!(err, EstimatorError::ConfigIo { .. }));
        assert!(err.to_string().contains("telescope.yaml"));
    }
}
