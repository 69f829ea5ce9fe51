//! Equivalence relations between units of different types
//!
//! A relation states that one `un` equals `equivale_a` of `de`, for example
//! "1 L equals 0.92 kg" for a particular oil. Relations are data supplied
//! per conversion call and are never stored in the catalog.

use serde::{Serialize, Deserialize};
use crate::{Result, UnitError};

/// "1 `un` equals `equivale_a` `de`"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub un: String,
    pub equivale_a: f64,
    pub de: String,
}

impl Relation {
    pub fn new(un: &str, equivale_a: f64, de: &str) -> Self {
        Relation {
            un: un.to_string(),
            equivale_a,
            de: de.to_string(),
        }
    }

    /// Fails unless the factor is finite and strictly positive.
    pub fn check(&self) -> Result<()> {
        if self.equivale_a.is_finite() && self.equivale_a > 0.0 {
            Ok(())
        } else {
            Err(UnitError::InvalidRelation {
                un: self.un.clone(),
                factor: self.equivale_a,
                de: self.de.clone(),
            })
        }
    }

    /// The same relation read the other way: 1 `de` equals 1/factor `un`.
    pub fn inverted(&self) -> Result<Relation> {
        self.check()?;
        Ok(Relation {
            un: self.de.clone(),
            equivale_a: 1.0 / self.equivale_a,
            de: self.un.clone(),
        })
    }
}

/// Parse a JSON array of relations, e.g. from configuration or a request body
pub fn from_json(s: &str) -> Result<Vec<Relation>> {
    Ok(serde_json::from_str(s)?)
}
