//! # Pretty Printing Module for Reynolds Tasks
//!
//! Formatted output of the bearing parameters, the derived quantities and a preview of the grid.
//! All output is formatted using prettytable.

use super::reynolds_task::Reynolds;
use prettytable::{Table, row};

impl Reynolds {
    /// Table of the bearing parameters with units
    pub fn parameters_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["Parameter", "Value", "Units"]);
        table.add_row(row!["Diameter (D)", format!("{:.4}", self.D()), "m"]);
        table.add_row(row!["Width (B)", format!("{:.4}", self.B()), "m"]);
        table.add_row(row!["Radial clearance (s)", format!("{:.3e}", self.s()), "m"]);
        table.add_row(row!["Load (F)", format!("{:.2e}", self.F()), "N"]);
        table.add_row(row!["Frequency (f)", format!("{:.3}", self.f()), "1/s"]);
        table.add_row(row!["Viscosity (eta)", format!("{:.4}", self.eta()), "Pa*s"]);
        table.add_row(row![
            "Ambient pressure (p_amb)",
            format!("{:.2e}", self.p_amb()),
            "Pa"
        ]);
        table
    }

    /// Table of the derived quantities and grid sizes
    pub fn grid_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["Quantity", "Value", "Units"]);
        table.add_row(row!["Radius (R)", format!("{:.4}", self.R()), "m"]);
        table.add_row(row!["Angular speed (omega)", format!("{:.4}", self.omega()), "rad/s"]);
        table.add_row(row![
            "theta range",
            format!("[{:.4}, {:.4})", self.theta_min(), self.theta_max()),
            "rad"
        ]);
        table.add_row(row![
            "z range",
            format!("[{:.4}, {:.4}]", self.z_min(), self.z_max()),
            "m"
        ]);
        table.add_row(row!["n_theta", self.n_theta(), "-"]);
        table.add_row(row!["n_z", self.n_z(), "-"]);
        table.add_row(row!["n", self.n(), "-"]);
        table.add_row(row!["dtheta", format!("{:.6e}", self.dtheta()), "rad"]);
        table.add_row(row!["dz", format!("{:.6e}", self.dz()), "m"]);
        table
    }

    /// First and last `preview` nodes of both axes
    pub fn nodes_table(&self, preview: usize) -> Table {
        let mut table = Table::new();
        table.add_row(row!["index", "theta (rad)", "z (m)"]);
        let len = self.n_theta().max(self.n_z());
        let cell = |values: &nalgebra::DVector<f64>, i: usize| {
            if i < values.len() {
                format!("{:.6}", values[i])
            } else {
                String::new()
            }
        };
        for i in 0..len {
            if i >= preview && i + preview < len {
                if i == preview {
                    table.add_row(row!["...", "...", "..."]);
                }
                continue;
            }
            table.add_row(row![i, cell(self.theta(), i), cell(self.z(), i)]);
        }
        table
    }

    /// Prints the full summary of the task
    pub fn pretty_print_task(&self) {
        println!("\n=== REYNOLDS TASK SUMMARY ===");
        println!("\nBearing Parameters:");
        self.parameters_table().printstd();
        println!("\nDiscretization:");
        self.grid_table().printstd();
        println!("\nGrid Nodes:");
        self.nodes_table(3).printstd();
    }
}
