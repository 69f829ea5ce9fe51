//! Unit catalog - count, mass, length, area and volume units

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{MeasureKind, Result, Unit, UnitError};

/// Process-wide catalog, built on first use and never mutated afterwards
pub static UNITS: LazyLock<Registry> = LazyLock::new(Registry::standard);

// Mass, relative to the kilogram
const TONNE: f64 = 1e3;
const KILOGRAM: f64 = 1e0;
const GRAM: f64 = 1e-3;
const MILLIGRAM: f64 = 1e-6;

// Length, relative to the meter
const KILOMETER: f64 = 1e3;
const METER: f64 = 1e0;
const DECIMETER: f64 = 1e-1;
const CENTIMETER: f64 = 1e-2;
const MILLIMETER: f64 = 1e-3;

// Area, relative to the square meter
const SQUARE_KILOMETER: f64 = 1e6;
const HECTARE: f64 = 1e4;
const SQUARE_METER: f64 = 1e0;
const SQUARE_DECIMETER: f64 = 1e-2;
const SQUARE_CENTIMETER: f64 = 1e-4;
const SQUARE_MILLIMETER: f64 = 1e-6;

// Volume, relative to the cubic meter
const CUBIC_KILOMETER: f64 = 1e9;
const CUBIC_HECTOMETER: f64 = 1e6;
const CUBIC_DECAMETER: f64 = 1e3;
const CUBIC_METER: f64 = 1e0;
const CUBIC_DECIMETER: f64 = 1e-3;
const CUBIC_CENTIMETER: f64 = 1e-6;
const CUBIC_MILLIMETER: f64 = 1e-9;
const KILOLITER: f64 = 1e0;
const HECTOLITER: f64 = 1e-1;
const DECALITER: f64 = 1e-2;
const LITER: f64 = 1e-3;
const DECILITER: f64 = 1e-4;
const CENTILITER: f64 = 1e-5;
const MILLILITER: f64 = 1e-6;

/// Immutable mapping from unit id to unit
#[derive(Debug, Clone)]
pub struct Registry {
    units: HashMap<String, Unit>,
}

impl Registry {
    /// Build a registry from an explicit set of units. Later duplicates of an
    /// id replace earlier ones.
    pub fn new(units: impl IntoIterator<Item = Unit>) -> Self {
        let mut registry = Registry {
            units: HashMap::new(),
        };
        for unit in units {
            registry.register(unit);
        }
        registry
    }

    /// The built-in catalog
    pub fn standard() -> Self {
        let mut registry = Registry {
            units: HashMap::new(),
        };
        registry.register_count_units();
        registry.register_mass_units();
        registry.register_length_units();
        registry.register_area_units();
        registry.register_volume_units();
        registry
    }

    /// Get a unit by id
    pub fn lookup(&self, id: &str) -> Result<&Unit> {
        self.units
            .get(id)
            .ok_or_else(|| UnitError::UnknownUnit(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.units.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// All units whose type tag is `tag` (e.g. "Peso"), in no particular
    /// order. An unknown tag yields an empty list.
    pub fn list_by_type(&self, tag: &str) -> Vec<&Unit> {
        self.units.values()
            .filter(|u| u.kind.as_str() == tag)
            .collect()
    }

    /// All units of `kind`, in no particular order
    pub fn by_kind(&self, kind: MeasureKind) -> Vec<&Unit> {
        self.units.values()
            .filter(|u| u.kind == kind)
            .collect()
    }

    /// Copy of the whole catalog
    pub fn list_all(&self) -> HashMap<String, Unit> {
        self.units.clone()
    }

    /// The unit with factor 1 for `kind`, if registered
    pub fn base_unit(&self, kind: MeasureKind) -> Option<&Unit> {
        self.units.values().find(|u| u.kind == kind && u.is_base())
    }

    fn register(&mut self, unit: Unit) {
        self.units.insert(unit.id.clone(), unit);
    }

    fn register_count_units(&mut self) {
        self.register(Unit::new("u", "Unidad", "Unidades", MeasureKind::Count, 1.0));
    }

    fn register_mass_units(&mut self) {
        self.register(Unit::new("t", "Tonelada", "Toneladas", MeasureKind::Mass, TONNE));
        self.register(Unit::new("kg", "Kilogramo", "Kilogramos", MeasureKind::Mass, KILOGRAM));
        self.register(Unit::new("g", "Gramo", "Gramos", MeasureKind::Mass, GRAM));
        self.register(Unit::new("mg", "Miligramo", "Miligramos", MeasureKind::Mass, MILLIGRAM));
    }

    fn register_length_units(&mut self) {
        self.register(Unit::new("km", "Kilómetro", "Kilómetros", MeasureKind::Length, KILOMETER));
        self.register(Unit::new("m", "Metro", "Metros", MeasureKind::Length, METER));
        self.register(Unit::new("dm", "Decímetro", "Decímetros", MeasureKind::Length, DECIMETER));
        self.register(Unit::new("cm", "Centímetro", "Centímetros", MeasureKind::Length, CENTIMETER));
        self.register(Unit::new("mm", "Milímetro", "Milímetros", MeasureKind::Length, MILLIMETER));
    }

    fn register_area_units(&mut self) {
        self.register(Unit::new("km2", "Kilómetro cuadrado", "Kilómetros cuadrados", MeasureKind::Area, SQUARE_KILOMETER));
        self.register(Unit::new("ha", "Hectárea", "Hectáreas", MeasureKind::Area, HECTARE));
        self.register(Unit::new("m2", "Metro cuadrado", "Metros cuadrados", MeasureKind::Area, SQUARE_METER));
        self.register(Unit::new("dm2", "Decímetro cuadrado", "Decímetros cuadrados", MeasureKind::Area, SQUARE_DECIMETER));
        self.register(Unit::new("cm2", "Centímetro cuadrado", "Centímetros cuadrados", MeasureKind::Area, SQUARE_CENTIMETER));
        self.register(Unit::new("mm2", "Milímetro cuadrado", "Milímetros cuadrados", MeasureKind::Area, SQUARE_MILLIMETER));
    }

    fn register_volume_units(&mut self) {
        self.register(Unit::new("km3", "Kilómetro cúbico", "Kilómetros cúbicos", MeasureKind::Volume, CUBIC_KILOMETER));
        self.register(Unit::new("hm3", "Hectómetro cúbico", "Hectómetros cúbicos", MeasureKind::Volume, CUBIC_HECTOMETER));
        self.register(Unit::new("dam3", "Decámetro cúbico", "Decámetros cúbicos", MeasureKind::Volume, CUBIC_DECAMETER));
        self.register(Unit::new("m3", "Metro cúbico", "Metros cúbicos", MeasureKind::Volume, CUBIC_METER));
        self.register(Unit::new("dm3", "Decímetro cúbico", "Decímetros cúbicos", MeasureKind::Volume, CUBIC_DECIMETER));
        self.register(Unit::new("cm3", "Centímetro cúbico", "Centímetros cúbicos", MeasureKind::Volume, CUBIC_CENTIMETER));
        self.register(Unit::new("mm3", "Milímetro cúbico", "Milímetros cúbicos", MeasureKind::Volume, CUBIC_MILLIMETER));

        // Capacity
        self.register(Unit::new("Kl", "Kilolitro", "Kilolitros", MeasureKind::Volume, KILOLITER));
        self.register(Unit::new("Hl", "Hectolitro", "Hectolitros", MeasureKind::Volume, HECTOLITER));
        self.register(Unit::new("Dl", "Decalitro", "Decalitros", MeasureKind::Volume, DECALITER));
        self.register(Unit::new("L", "Litro", "Litros", MeasureKind::Volume, LITER));
        self.register(Unit::new("dl", "Decilitro", "Decilitros", MeasureKind::Volume, DECILITER));
        self.register(Unit::new("cl", "Centilitro", "Centilitros", MeasureKind::Volume, CENTILITER));
        self.register(Unit::new("ml", "Mililitro", "Mililitros", MeasureKind::Volume, MILLILITER));
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
