use crate::Reynolds::reynolds_error::ReynoldsError;
use crate::Reynolds::reynolds_task::{BearingParams, Reynolds};
use crate::params_manager::{ParamsManager, load_params_from_file, save_params_to_file};
use log::error;
use std::path::Path;

/// Builds the task from a parameter file and prints the summary
pub fn run_from_file(file_path: &str) -> Result<Reynolds, ReynoldsError> {
    let params = load_params_from_file(file_path)?;
    let rey = Reynolds::new(&params)?;
    rey.pretty_print_task();
    Ok(rey)
}

/// Builds and prints the reference bearing
pub fn run_reference() -> Result<Reynolds, ReynoldsError> {
    let rey = Reynolds::new(&BearingParams::default())?;
    rey.pretty_print_task();
    Ok(rey)
}

/// Builds and prints the task kept in `bearing_params.json` of `dir`, the reference bearing if there is none
pub fn run_from_dir(dir: &Path) -> Result<Reynolds, ReynoldsError> {
    let manager = ParamsManager::in_dir(dir);
    println!("Parameters: {}", manager.params_file());
    let rey = manager.build()?;
    rey.pretty_print_task();
    Ok(rey)
}

/// Writes the reference bearing parameters to `file_path` as a template for new tasks
pub fn create_template(file_path: &str) -> Result<(), ReynoldsError> {
    save_params_to_file(&BearingParams::default(), file_path)
}

/// Reports the error of a menu action without leaving the menu
pub fn report<T>(result: Result<T, ReynoldsError>) {
    if let Err(e) = result {
        error!("{}", e);
        println!("\x1b[31mError: {}\x1b[0m", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_can_be_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.json");
        let path = path.to_str().unwrap();
        create_template(path).unwrap();
        let rey = run_from_file(path).unwrap();
        assert_eq!(rey, run_reference().unwrap());
    }

    #[test]
    fn test_run_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(run_from_dir(dir.path()).unwrap(), run_reference().unwrap());

        let path = dir.path().join(crate::params_manager::DEFAULT_PARAMS_FILE);
        let params = BearingParams::new(0.2, 0.1, 2e-5, 500.0, 25.0, 0.03, 1e5, 72, 21);
        save_params_to_file(&params, path.to_str().unwrap()).unwrap();
        let rey = run_from_dir(dir.path()).unwrap();
        assert_eq!(rey.n(), 72 * 21);
    }

    #[test]
    fn test_oversized_grid_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.json");
        std::fs::write(
            &path,
            r#"{"D": 0.5, "B": 0.25, "s": 0.0001, "F": 20000.0, "f": 5.0, "eta": 100.0,
                "p_amb": 0.0, "n_theta": 9223372036854775807, "n_z": 2}"#,
        )
        .unwrap();
        let result = run_from_file(path.to_str().unwrap());
        assert!(matches!(result, Err(ReynoldsError::InvalidParameter(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let result = run_from_file(path.to_str().unwrap());
        assert!(matches!(result, Err(ReynoldsError::Io(_))));
    }
}
