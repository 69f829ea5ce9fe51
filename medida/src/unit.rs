//! Unit representation and validation against the catalog

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::{MeasureKind, Registry, Result, UnitError};

/// A named unit with a fixed factor relative to its type's base unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Short code, unique in the catalog (e.g. "kg", "ml")
    pub id: String,
    /// Singular display name
    pub name: String,
    /// Plural display name
    pub plural: String,
    /// Measurement type
    #[serde(rename = "tipo")]
    pub kind: MeasureKind,
    /// How many base units of `kind` one of this unit equals
    factor: f64,
}

impl Unit {
    pub fn new(id: &str, name: &str, plural: &str, kind: MeasureKind, factor: f64) -> Self {
        Unit {
            id: id.to_string(),
            name: name.to_string(),
            plural: plural.to_string(),
            kind,
            factor,
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Check if this is the base unit of its type
    pub fn is_base(&self) -> bool {
        self.factor == 1.0
    }

    /// Check if two units convert by factor alone
    pub fn is_convertible(&self, other: &Unit) -> bool {
        self.kind == other.kind
    }

    /// Display name agreeing with `quantity` ("1 Litro", "2 Litros")
    pub fn label(&self, quantity: f64) -> &str {
        if quantity.abs() == 1.0 {
            &self.name
        } else {
            &self.plural
        }
    }

    /// Check this unit against the canonical entry in `registry`.
    pub fn validate(&self, registry: &Registry) -> Result<()> {
        UnitRef::new(&self.id, self.kind.as_str()).validate(registry).map(|_| ())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Externally supplied unit claim, e.g. deserialized from a request.
///
/// The type tag is kept as raw text so that tags outside the known set can
/// be reported rather than rejected by the deserializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRef {
    pub id: String,
    #[serde(rename = "tipo")]
    pub kind: String,
}

impl UnitRef {
    pub fn new(id: &str, kind: &str) -> Self {
        UnitRef {
            id: id.to_string(),
            kind: kind.to_string(),
        }
    }

    /// Resolve the claim to its catalog unit.
    ///
    /// Fails with `UnsupportedType` for an unknown tag, `UnknownUnit` for an
    /// unregistered id and `TypeMismatch` when the catalog disagrees.
    pub fn validate<'r>(&self, registry: &'r Registry) -> Result<&'r Unit> {
        let kind: MeasureKind = self.kind.parse()?;
        let unit = registry.lookup(&self.id)?;
        if unit.kind != kind {
            return Err(UnitError::TypeMismatch {
                id: self.id.clone(),
                expected: unit.kind.to_string(),
                got: self.kind.clone(),
            });
        }
        Ok(unit)
    }
}
