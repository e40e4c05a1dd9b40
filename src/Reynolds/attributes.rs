//! Name-keyed read access to the fields of `Reynolds`.
//!
//! Every field, stored or derived, can be looked up by its name. Writing is never possible:
//! `set_attribute` reports `ReynoldsError::ReadOnly` for every known name.
use super::reynolds_error::ReynoldsError;
use super::reynolds_task::Reynolds;
use nalgebra::DVector;
use std::fmt;

/// Value of a single attribute. Grid counts stay integers, physical values stay floats
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Float(f64),
    Count(usize),
    Array(DVector<f64>),
}

impl Attribute {
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Attribute::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<usize> {
        match self {
            Attribute::Count(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&DVector<f64>> {
        match self {
            Attribute::Array(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Float(value) => write!(f, "{}", value),
            Attribute::Count(value) => write!(f, "{}", value),
            Attribute::Array(values) => {
                let len = values.len();
                match len {
                    0 => write!(f, "[]"),
                    1..=4 => {
                        let items: Vec<String> = values.iter().map(|v| format!("{:.6}", v)).collect();
                        write!(f, "[{}]", items.join(", "))
                    }
                    _ => write!(
                        f,
                        "[{:.6}, {:.6}, ..., {:.6}] ({} points)",
                        values[0],
                        values[1],
                        values[len - 1],
                        len
                    ),
                }
            }
        }
    }
}

impl Reynolds {
    /// Names of all attributes, inputs first
    pub const ATTRIBUTES: [&'static str; 20] = [
        "D", "B", "s", "F", "f", "eta", "p_amb", "n_theta", "n_z", "theta_min", "theta_max", "R",
        "omega", "n", "dtheta", "dz", "z_min", "z_max", "theta", "z",
    ];

    /// Value of the attribute `name`
    pub fn attribute(&self, name: &str) -> Result<Attribute, ReynoldsError> {
        let attr = match name {
            "D" => Attribute::Float(self.D()),
            "B" => Attribute::Float(self.B()),
            "s" => Attribute::Float(self.s()),
            "F" => Attribute::Float(self.F()),
            "f" => Attribute::Float(self.f()),
            "eta" => Attribute::Float(self.eta()),
            "p_amb" => Attribute::Float(self.p_amb()),
            "n_theta" => Attribute::Count(self.n_theta()),
            "n_z" => Attribute::Count(self.n_z()),
            "theta_min" => Attribute::Float(self.theta_min()),
            "theta_max" => Attribute::Float(self.theta_max()),
            "R" => Attribute::Float(self.R()),
            "omega" => Attribute::Float(self.omega()),
            "n" => Attribute::Count(self.n()),
            "dtheta" => Attribute::Float(self.dtheta()),
            "dz" => Attribute::Float(self.dz()),
            "z_min" => Attribute::Float(self.z_min()),
            "z_max" => Attribute::Float(self.z_max()),
            "theta" => Attribute::Array(self.theta().clone()),
            "z" => Attribute::Array(self.z().clone()),
            _ => return Err(ReynoldsError::UnknownAttribute(name.to_string())),
        };
        Ok(attr)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        Self::ATTRIBUTES.contains(&name)
    }

    /// Always fails: the structure is frozen after construction
    pub fn set_attribute(&self, name: &str, _value: Attribute) -> Result<(), ReynoldsError> {
        if self.has_attribute(name) {
            Err(ReynoldsError::ReadOnly(name.to_string()))
        } else {
            Err(ReynoldsError::UnknownAttribute(name.to_string()))
        }
    }
}
