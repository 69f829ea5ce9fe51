//! Medida - Units of Measure and Conversion
//!
//! A fixed catalog of units grouped by measurement type, plus a converter
//! that bridges types through caller-supplied equivalence relations.
//!
//! Measurement types:
//! - Count (u)
//! - Mass (t, kg, g, mg)
//! - Length (km, m, dm, cm, mm)
//! - Area (km2, ha, m2, dm2, cm2, mm2)
//! - Volume (m3, L, ml, etc.)
//!
//! Units of the same type convert by scalar factor. Converting between types
//! (e.g. liters of oil to kilograms) needs a [`Relation`] such as
//! "1 L equals 0.92 kg", supplied per call.

mod convert;
mod error;
mod kind;
mod registry;
mod relation;
mod unit;

pub use error::{codes, Result, UnitError};
pub use kind::MeasureKind;
pub use registry::{Registry, UNITS};
pub use relation::{from_json, Relation};
pub use unit::{Unit, UnitRef};

/// Convert `quantity` from `from` to `to` using the process-wide catalog.
pub fn convert(quantity: f64, from: &str, to: &str, relations: &[Relation]) -> Result<f64> {
    UNITS.convert(quantity, from, to, relations)
}

/// Look up a unit in the process-wide catalog.
pub fn lookup(id: &str) -> Result<&'static Unit> {
    UNITS.lookup(id)
}
