use serde::{Deserialize, Serialize};
use std::fmt;

/// Reynolds task known only by its name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReynoldsName {
    name: String,
}

impl ReynoldsName {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ReynoldsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_kept_unchanged() {
        for name in ["bearing_1", "", "  Lager mit Leerzeichen ", "подшипник"] {
            let rey = ReynoldsName::new(name);
            assert_eq!(rey.name(), name);
            assert_eq!(rey.to_string(), name);
        }
    }

    #[test]
    fn test_serde() {
        let rey = ReynoldsName::new("main bearing");
        let json = serde_json::to_string(&rey).unwrap();
        assert_eq!(json, r#"{"name":"main bearing"}"#);
        let back: ReynoldsName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rey);
    }
}
