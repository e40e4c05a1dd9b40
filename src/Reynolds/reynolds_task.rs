//! # Reynolds Task Module
//!
//! ## Aim
//! Parameters and discretization grid of the Reynolds equation for a hydrodynamic journal bearing.
//! The structure is built once from the bearing parameters and never changes afterwards:
//! all fields are private and only getters are provided.
//!
//! ## Main Data Structures
//! - `BearingParams`: the construction inputs (serializable, used by the parameter files)
//! - `Reynolds`: validated inputs plus the derived quantities and grids
//!
//! ## Derived quantities
//! | Name | Definition |
//! |------|------------|
//! | `R` | `D/2` |
//! | `omega` | `2*pi*f` |
//! | `n` | `n_theta*n_z` |
//! | `dtheta` | `(theta_max - theta_min)/n_theta` |
//! | `dz` | `B/(n_z - 1)` |
//! | `theta` | `n_theta` points over `[theta_min, theta_max)` |
//! | `z` | `n_z` points over `[-B/2, B/2]` |
//!
//! ## Usage
//! ```rust, ignore
//! let params = BearingParams::default();
//! let rey = Reynolds::new(&params)?;
//! assert_eq!(rey.n(), 10000);
//! let h = rey.h(0.5, 0.0)?;
//! ```
use super::grid::{bounded_points, bounded_step, periodic_points, periodic_step};
use super::reynolds_error::ReynoldsError;
use log::{info, warn};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

fn default_theta_min() -> f64 {
    0.0
}

fn default_theta_max() -> f64 {
    2.0 * PI
}

/// Input parameters of the bearing task.
///
/// Grid counts are signed so that invalid values survive parsing and are rejected by `Reynolds::new`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct BearingParams {
    /// Diameter (m)
    pub D: f64,
    /// Bearing width (m)
    pub B: f64,
    /// Radial clearance (m)
    pub s: f64,
    /// Applied load (N)
    pub F: f64,
    /// Rotational frequency (1/s)
    pub f: f64,
    /// Dynamic viscosity (Pa*s)
    pub eta: f64,
    /// Ambient pressure (Pa)
    pub p_amb: f64,
    /// Number of angular grid points
    pub n_theta: i64,
    /// Number of axial grid points
    pub n_z: i64,
    #[serde(default = "default_theta_min")]
    pub theta_min: f64,
    #[serde(default = "default_theta_max")]
    pub theta_max: f64,
}

impl Default for BearingParams {
    /// Reference bearing: D = 0.5 m, B = 0.25 m, s = 0.1 mm, F = 20 kN, f = 5 Hz, 100 x 100 grid
    fn default() -> Self {
        Self {
            D: 0.5,
            B: 0.25,
            s: 0.1e-3,
            F: 20000.0,
            f: 5.0,
            eta: 100.0,
            p_amb: 0.0,
            n_theta: 100,
            n_z: 100,
            theta_min: default_theta_min(),
            theta_max: default_theta_max(),
        }
    }
}

impl BearingParams {
    /// Parameters with the default angular domain [0, 2*pi)
    #[allow(non_snake_case)]
    pub fn new(
        D: f64,
        B: f64,
        s: f64,
        F: f64,
        f: f64,
        eta: f64,
        p_amb: f64,
        n_theta: i64,
        n_z: i64,
    ) -> Self {
        Self {
            D,
            B,
            s,
            F,
            f,
            eta,
            p_amb,
            n_theta,
            n_z,
            theta_min: default_theta_min(),
            theta_max: default_theta_max(),
        }
    }

    /// Same parameters with another angular domain
    pub fn with_theta_bounds(mut self, theta_min: f64, theta_max: f64) -> Self {
        self.theta_min = theta_min;
        self.theta_max = theta_max;
        self
    }
}

/// Largest grid the task will allocate, n_theta*n_z
pub const MAX_NODES: usize = 100_000_000;

fn check_scalar(name: &str, value: f64) -> Result<f64, ReynoldsError> {
    if !value.is_finite() {
        return Err(ReynoldsError::InvalidParameter(format!(
            "{} must be finite",
            name
        )));
    }
    if value < 0.0 {
        return Err(ReynoldsError::InvalidParameter(format!(
            "{} must be positive",
            name
        )));
    }
    Ok(value)
}

fn check_count(name: &str, value: i64) -> Result<usize, ReynoldsError> {
    if value <= 0 {
        return Err(ReynoldsError::InvalidParameter(format!(
            "{} must be positive",
            name
        )));
    }
    usize::try_from(value)
        .map_err(|_| ReynoldsError::InvalidParameter(format!("{} is too large", name)))
}

/// Validated bearing parameters together with the discretization grid
#[derive(Debug, Clone, PartialEq)]
#[allow(non_snake_case)]
pub struct Reynolds {
    D: f64,
    B: f64,
    s: f64,
    F: f64,
    f: f64,
    eta: f64,
    p_amb: f64,
    n_theta: usize,
    n_z: usize,
    theta_min: f64,
    theta_max: f64,

    R: f64,
    omega: f64,
    z_min: f64,
    z_max: f64,
    n: usize,
    dtheta: f64,
    dz: f64,
    theta: DVector<f64>,
    z: DVector<f64>,
}

#[allow(non_snake_case)]
impl Reynolds {
    /// Validates the parameters and builds the grid.
    ///
    /// Fails with `ReynoldsError::InvalidParameter` naming the first offending parameter
    pub fn new(params: &BearingParams) -> Result<Self, ReynoldsError> {
        let D = check_scalar("D", params.D)?;
        let B = check_scalar("B", params.B)?;
        let s = check_scalar("s", params.s)?;
        let F = check_scalar("F", params.F)?;
        let f = check_scalar("f", params.f)?;
        let eta = check_scalar("eta", params.eta)?;
        let p_amb = check_scalar("p_amb", params.p_amb)?;
        let n_theta = check_count("n_theta", params.n_theta)?;
        let n_z = check_count("n_z", params.n_z)?;
        let n = match n_theta.checked_mul(n_z) {
            Some(n) if n <= MAX_NODES => n,
            _ => {
                return Err(ReynoldsError::InvalidParameter(format!(
                    "n_theta * n_z is too large (at most {} nodes)",
                    MAX_NODES
                )));
            }
        };
        let theta_min = check_scalar("theta_min", params.theta_min)?;
        let theta_max = check_scalar("theta_max", params.theta_max)?;
        if theta_max <= theta_min {
            return Err(ReynoldsError::InvalidParameter(
                "theta_max must be greater than theta_min".to_string(),
            ));
        }
        info!("parameters checked!");
        if s == 0.0 {
            warn!("radial clearance s is zero, film thickness vanishes");
        }
        if f == 0.0 {
            warn!("rotational frequency f is zero, journal does not rotate");
        }
        if n_z == 1 {
            warn!("n_z = 1: axial grid has a single point at z = -B/2, dz is set to 0");
        }

        let z_min = -B / 2.0;
        let z_max = B / 2.0;
        let rey = Self {
            D,
            B,
            s,
            F,
            f,
            eta,
            p_amb,
            n_theta,
            n_z,
            theta_min,
            theta_max,
            R: D / 2.0,
            omega: 2.0 * PI * f,
            z_min,
            z_max,
            n,
            dtheta: periodic_step(theta_min, theta_max, n_theta),
            dz: bounded_step(z_min, z_max, n_z),
            theta: periodic_points(theta_min, theta_max, n_theta),
            z: bounded_points(z_min, z_max, n_z),
        };
        info!("grid created: {} x {} nodes", n_theta, n_z);
        Ok(rey)
    }

    /// Inputs the structure was built from
    pub fn params(&self) -> BearingParams {
        BearingParams {
            D: self.D,
            B: self.B,
            s: self.s,
            F: self.F,
            f: self.f,
            eta: self.eta,
            p_amb: self.p_amb,
            n_theta: self.n_theta as i64,
            n_z: self.n_z as i64,
            theta_min: self.theta_min,
            theta_max: self.theta_max,
        }
    }

    /////////////////////////////////GETTERS////////////////////////////////////////////////////
    /// Diameter (m)
    pub fn D(&self) -> f64 {
        self.D
    }
    /// Bearing width (m)
    pub fn B(&self) -> f64 {
        self.B
    }
    /// Radial clearance (m)
    pub fn s(&self) -> f64 {
        self.s
    }
    /// Applied load (N)
    pub fn F(&self) -> f64 {
        self.F
    }
    /// Rotational frequency (1/s)
    pub fn f(&self) -> f64 {
        self.f
    }
    /// Dynamic viscosity (Pa*s)
    pub fn eta(&self) -> f64 {
        self.eta
    }
    /// Ambient pressure (Pa)
    pub fn p_amb(&self) -> f64 {
        self.p_amb
    }
    pub fn n_theta(&self) -> usize {
        self.n_theta
    }
    pub fn n_z(&self) -> usize {
        self.n_z
    }
    pub fn theta_min(&self) -> f64 {
        self.theta_min
    }
    pub fn theta_max(&self) -> f64 {
        self.theta_max
    }
    /// Journal radius D/2 (m)
    ///
    /// Half of the width B is `z_max()`
    pub fn R(&self) -> f64 {
        self.R
    }
    /// Angular speed 2*pi*f (rad/s)
    pub fn omega(&self) -> f64 {
        self.omega
    }
    /// Axial lower bound -B/2 (m)
    pub fn z_min(&self) -> f64 {
        self.z_min
    }
    /// Axial upper bound B/2 (m)
    pub fn z_max(&self) -> f64 {
        self.z_max
    }
    /// Total number of grid nodes
    pub fn n(&self) -> usize {
        self.n
    }
    pub fn dtheta(&self) -> f64 {
        self.dtheta
    }
    /// Axial step, 0 for a single axial node
    pub fn dz(&self) -> f64 {
        self.dz
    }
    /// Angular nodes, upper bound excluded
    pub fn theta(&self) -> &DVector<f64> {
        &self.theta
    }
    /// Axial nodes, both bounds included
    pub fn z(&self) -> &DVector<f64> {
        &self.z
    }

    /////////////////////////////////GRID OPERATIONS////////////////////////////////////////////
    /// Flat index of node (i, j): i runs over theta, j over z
    pub fn idx(&self, i: usize, j: usize) -> Result<usize, ReynoldsError> {
        if i >= self.n_theta || j >= self.n_z {
            return Err(ReynoldsError::IndexOutOfRange {
                i,
                j,
                n_theta: self.n_theta,
                n_z: self.n_z,
            });
        }
        Ok(i * self.n_z + j)
    }

    /// Film thickness at the angular nodes
    ///
    /// h = s*(1 + epsilon*cos(theta - beta))
    ///
    /// # Arguments
    /// * `epsilon` - relative eccentricity, 0 <= epsilon < 1
    /// * `beta` - attitude angle (rad)
    pub fn h(&self, epsilon: f64, beta: f64) -> Result<DVector<f64>, ReynoldsError> {
        if !epsilon.is_finite() || !(0.0..1.0).contains(&epsilon) {
            return Err(ReynoldsError::InvalidParameter(
                "epsilon must be in [0, 1)".to_string(),
            ));
        }
        if !beta.is_finite() {
            return Err(ReynoldsError::InvalidParameter(
                "beta must be finite".to_string(),
            ));
        }
        let s = self.s;
        Ok(self
            .theta
            .map(|theta| s * (1.0 + epsilon * (theta - beta).cos())))
    }

    /// Discretized Reynolds operator for eccentricity `epsilon` and attitude angle `beta`.
    pub fn A(&self, _epsilon: f64, _beta: f64) -> Result<DMatrix<f64>, ReynoldsError> {
        Err(ReynoldsError::NotImplemented("Reynolds.A".to_string()))
    }
}
