//! # Parameters Manager Module
//!
//! ## Purpose
//! Keeps the bearing parameters of a Reynolds task in a JSON file, so that a task can be
//! prepared once and rebuilt later without retyping the numbers.
//!
//! ## Architecture
//! - **BearingParams**: serializable input structure (see `Reynolds::reynolds_task`)
//! - **ParamsManager**: loading, validation, updating and saving of the parameter file
//!
//! ## Key Features
//! - **Load or default**: a missing file gives the reference bearing
//! - **Validation before commit**: every change is checked by building a `Reynolds` task first,
//!   invalid parameters never reach the file
//! - **Batch updates**: several parameters can be changed in one all-or-nothing call
//!
//! ## File Format
//! ```json
//! {
//!   "D": 0.5,
//!   "B": 0.25,
//!   "s": 0.0001,
//!   "F": 20000.0,
//!   "f": 5.0,
//!   "eta": 100.0,
//!   "p_amb": 0.0,
//!   "n_theta": 100,
//!   "n_z": 100
//! }
//! ```
//! `theta_min` and `theta_max` are optional and default to 0 and 2*pi.
//!
//! ## Usage
//! ```rust, ignore
//! use ReynoldsFilm::params_manager::ParamsManager;
//!
//! let mut manager = ParamsManager::with_params_file("bearing.json")?;
//! manager.update_params(HashMap::from([("n_theta", 180.0), ("eta", 0.05)]))?;
//! let rey = manager.build()?;
//! ```

use crate::Reynolds::reynolds_error::ReynoldsError;
use crate::Reynolds::reynolds_task::{BearingParams, Reynolds};
use log::{info, warn};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Default name of the parameter file
pub const DEFAULT_PARAMS_FILE: &str = "bearing_params.json";

/// Reads bearing parameters from a JSON file. The file must exist
pub fn load_params_from_file(params_file: &str) -> Result<BearingParams, ReynoldsError> {
    let content = fs::read_to_string(params_file)?;
    let params: BearingParams = serde_json::from_str(&content)?;
    info!("Successfully parsed bearing parameters from file '{}'", params_file);
    Ok(params)
}

/// Writes bearing parameters to a JSON file
pub fn save_params_to_file(params: &BearingParams, params_file: &str) -> Result<(), ReynoldsError> {
    let content = serde_json::to_string_pretty(params)?;
    fs::write(params_file, content)?;
    info!("bearing parameters saved to '{}'", params_file);
    Ok(())
}

fn count_from_value(name: &str, value: f64) -> Result<i64, ReynoldsError> {
    if value.fract() != 0.0 || !value.is_finite() {
        return Err(ReynoldsError::InvalidParameter(format!(
            "{} must be an integer",
            name
        )));
    }
    Ok(value as i64)
}

/// Manager of the parameter file of a Reynolds task.
///
/// # Fields
/// * `params` - current bearing parameters, always valid
/// * `params_file` - path of the JSON file used for persistence
#[derive(Debug, Clone)]
pub struct ParamsManager {
    params: BearingParams,
    params_file: String,
}

impl ParamsManager {
    /// Creates a manager for `bearing_params.json` in the current directory.
    ///
    /// If the file doesn't exist or is invalid the reference bearing is used.
    pub fn new() -> Self {
        Self::in_dir(Path::new("."))
    }

    /// Creates a manager for `bearing_params.json` in `dir`.
    ///
    /// If the file doesn't exist or is invalid the reference bearing is used.
    pub fn in_dir(dir: &Path) -> Self {
        let params_file = dir.join(DEFAULT_PARAMS_FILE).to_string_lossy().into_owned();
        let params = match Self::load_params(&params_file) {
            Ok(params) => params,
            Err(e) => {
                warn!(
                    "failed to load '{}': {}, using default parameters",
                    params_file, e
                );
                BearingParams::default()
            }
        };
        Self {
            params,
            params_file,
        }
    }

    /// Creates a manager for a custom parameter file.
    ///
    /// A missing file gives the default parameters, an unreadable or invalid one is an error
    pub fn with_params_file(params_file: &str) -> Result<Self, ReynoldsError> {
        let params = Self::load_params(params_file)?;
        Ok(Self {
            params,
            params_file: params_file.to_string(),
        })
    }

    fn load_params(params_file: &str) -> Result<BearingParams, ReynoldsError> {
        if Path::new(params_file).exists() {
            let params = load_params_from_file(params_file)?;
            Reynolds::new(&params)?;
            Ok(params)
        } else {
            info!("file '{}' not found, using default parameters", params_file);
            Ok(BearingParams::default())
        }
    }

    /// Saves current parameters to the parameter file
    pub fn save_params(&self) -> Result<(), ReynoldsError> {
        save_params_to_file(&self.params, &self.params_file)
    }

    pub fn params(&self) -> &BearingParams {
        &self.params
    }

    pub fn params_file(&self) -> &str {
        &self.params_file
    }

    /// Builds the Reynolds task from the current parameters
    pub fn build(&self) -> Result<Reynolds, ReynoldsError> {
        Reynolds::new(&self.params)
    }

    /// Replaces all parameters. Invalid parameters are rejected and nothing changes
    pub fn set_params(&mut self, params: BearingParams) -> Result<(), ReynoldsError> {
        Reynolds::new(&params)?;
        self.params = params;
        self.save_params()
    }

    /// Updates several parameters at once.
    ///
    /// # Arguments
    /// * `updates` - parameter name -> new value; names are those of the JSON file,
    ///   grid counts must be whole numbers
    ///
    /// # Returns
    /// * `Ok(())` - all updates applied and saved
    /// * `Err(ReynoldsError)` - unknown name or invalid value, no update applied
    pub fn update_params(&mut self, updates: HashMap<&str, f64>) -> Result<(), ReynoldsError> {
        let mut params = self.params.clone();
        for (name, value) in updates {
            match name {
                "D" => params.D = value,
                "B" => params.B = value,
                "s" => params.s = value,
                "F" => params.F = value,
                "f" => params.f = value,
                "eta" => params.eta = value,
                "p_amb" => params.p_amb = value,
                "n_theta" => params.n_theta = count_from_value(name, value)?,
                "n_z" => params.n_z = count_from_value(name, value)?,
                "theta_min" => params.theta_min = value,
                "theta_max" => params.theta_max = value,
                _ => return Err(ReynoldsError::UnknownAttribute(name.to_string())),
            }
        }
        self.set_params(params)
    }

    /// Restores the reference bearing
    pub fn reset_to_defaults(&mut self) -> Result<(), ReynoldsError> {
        self.set_params(BearingParams::default())
    }
}

impl Default for ParamsManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_path(dir: &tempfile::TempDir) -> String {
        dir.path()
            .join("bearing.json")
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_in_dir_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ParamsManager::in_dir(dir.path());
        assert_eq!(manager.params(), &BearingParams::default());
        assert!(manager.params_file().ends_with(DEFAULT_PARAMS_FILE));
        assert!(!Path::new(manager.params_file()).exists());
    }

    #[test]
    fn test_in_dir_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let params = BearingParams::new(0.1, 0.05, 5e-5, 1000.0, 50.0, 0.02, 0.0, 36, 11);
        let path = dir.path().join(DEFAULT_PARAMS_FILE);
        save_params_to_file(&params, path.to_str().unwrap()).unwrap();
        let manager = ParamsManager::in_dir(dir.path());
        assert_eq!(manager.params(), &params);
        assert_eq!(manager.build().unwrap().n(), 396);
    }

    #[test]
    fn test_in_dir_broken_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_PARAMS_FILE), "{ \"D\": ").unwrap();
        let manager = ParamsManager::in_dir(dir.path());
        assert_eq!(manager.params(), &BearingParams::default());

        let mut params = BearingParams::default();
        params.n_z = 0;
        let path = dir.path().join(DEFAULT_PARAMS_FILE);
        save_params_to_file(&params, path.to_str().unwrap()).unwrap();
        let manager = ParamsManager::in_dir(dir.path());
        assert_eq!(manager.params(), &BearingParams::default());
    }

    #[test]
    fn test_new_uses_current_directory() {
        let manager = ParamsManager::default();
        assert_eq!(
            Path::new(manager.params_file()),
            Path::new(".").join(DEFAULT_PARAMS_FILE)
        );
        assert!(manager.build().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ParamsManager::with_params_file(&temp_path(&dir)).unwrap();
        assert_eq!(manager.params(), &BearingParams::default());
        assert_eq!(manager.build().unwrap().n(), 10000);
    }

    #[test]
    fn test_load_from_file() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            br#"{"D": 0.1, "B": 0.05, "s": 5e-5, "F": 1000.0, "f": 50.0,
                 "eta": 0.02, "p_amb": 101325.0, "n_theta": 36, "n_z": 11}"#,
        )
        .unwrap();
        let manager = ParamsManager::with_params_file(temp.path().to_str().unwrap()).unwrap();
        let params = manager.params();
        assert_eq!(params.D, 0.1);
        assert_eq!(params.n_theta, 36);
        assert_eq!(params.n_z, 11);
        assert_eq!(params.theta_min, 0.0);
        assert_eq!(params.theta_max, 2.0 * PI);
        let rey = manager.build().unwrap();
        assert_eq!(rey.n(), 396);
    }

    #[test]
    fn test_load_invalid_json() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"{ \"D\": 0.1, ").unwrap();
        let result = ParamsManager::with_params_file(temp.path().to_str().unwrap());
        assert!(matches!(result, Err(ReynoldsError::Json(_))));
    }

    #[test]
    fn test_load_invalid_params() {
        let mut params = BearingParams::default();
        params.n_theta = -1;
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(serde_json::to_string(&params).unwrap().as_bytes())
            .unwrap();
        let err = ParamsManager::with_params_file(temp.path().to_str().unwrap()).unwrap_err();
        assert_eq!(err.to_string(), "n_theta must be positive");
    }

    #[test]
    fn test_strict_loader_requires_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_params_from_file(&temp_path(&dir));
        assert!(matches!(result, Err(ReynoldsError::Io(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        let mut manager = ParamsManager::with_params_file(&path).unwrap();
        let params = BearingParams::new(0.2, 0.1, 2e-5, 500.0, 25.0, 0.03, 1e5, 72, 21)
            .with_theta_bounds(0.0, PI);
        manager.set_params(params.clone()).unwrap();

        let reloaded = ParamsManager::with_params_file(&path).unwrap();
        assert_eq!(reloaded.params(), &params);
        assert_eq!(reloaded.params_file(), path);
    }

    #[test]
    fn test_update_params() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        let mut manager = ParamsManager::with_params_file(&path).unwrap();
        let updates = HashMap::from([("n_theta", 180.0), ("eta", 0.05)]);
        manager.update_params(updates).unwrap();
        assert_eq!(manager.params().n_theta, 180);
        assert_eq!(manager.params().eta, 0.05);
        assert_eq!(load_params_from_file(&path).unwrap(), *manager.params());
    }

    #[test]
    fn test_update_is_all_or_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = ParamsManager::with_params_file(&temp_path(&dir)).unwrap();

        let updates = HashMap::from([("eta", 0.05), ("n_z", -1.0)]);
        let err = manager.update_params(updates).unwrap_err();
        assert_eq!(err.to_string(), "n_z must be positive");
        assert_eq!(manager.params(), &BearingParams::default());

        let updates = HashMap::from([("n_theta", 10.5)]);
        assert!(manager.update_params(updates).is_err());

        let updates = HashMap::from([("omega", 3.0)]);
        assert!(matches!(
            manager.update_params(updates),
            Err(ReynoldsError::UnknownAttribute(_))
        ));
        assert_eq!(manager.params(), &BearingParams::default());
    }

    #[test]
    fn test_reset_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = ParamsManager::with_params_file(&temp_path(&dir)).unwrap();
        manager
            .update_params(HashMap::from([("F", 1.0)]))
            .unwrap();
        manager.reset_to_defaults().unwrap();
        assert_eq!(manager.params(), &BearingParams::default());
    }
}
