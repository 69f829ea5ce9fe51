//! Conversion between units, bridging measurement types through relations

use std::slice;
use tracing::{debug, trace};
use crate::{Registry, Relation, Result, UnitError};

impl Registry {
    /// Convert `quantity` from unit `from` to unit `to`.
    ///
    /// Units of the same type convert by `quantity * from.factor / to.factor`.
    /// Units of different types need a relation whose two sides have the
    /// source and target types, in either order. Relations are tried in the
    /// given order and the first usable one wins. A relation stated in other
    /// units of the right types still applies: for 1 L = 0.92 kg, a request
    /// from ml to g first reduces ml to L and kg to g.
    pub fn convert(&self, quantity: f64, from: &str, to: &str, relations: &[Relation]) -> Result<f64> {
        let source = self.lookup(from)?;
        let target = self.lookup(to)?;

        if from == to {
            return Ok(quantity);
        }

        if source.is_convertible(target) {
            let result = quantity * source.factor() / target.factor();
            trace!(quantity, from, to, result, "same-type conversion");
            return Ok(result);
        }

        for relation in relations {
            // A relation naming units outside the catalog can never match
            let (Ok(un), Ok(de)) = (self.lookup(&relation.un), self.lookup(&relation.de)) else {
                debug!(un = %relation.un, de = %relation.de, "skipping relation with unknown unit");
                continue;
            };

            // 1 L = 0.92 kg, asked for ml -> kg: ml -> L, then kg -> kg, then scale
            if un.kind == source.kind && de.kind == target.kind {
                debug!(from, to, un = %relation.un, de = %relation.de, factor = relation.equivale_a, "bridging via relation");
                let on_un = self.convert(quantity, from, &relation.un, &[])?;
                let on_target = self.convert(on_un, &relation.de, to, &[])?;
                return Ok(on_target * relation.equivale_a);
            }

            // 1 kg = 0.92 L, asked for ml -> kg: read it as 1 L = 1/0.92 kg
            if un.kind == target.kind && de.kind == source.kind {
                let inverse = relation.inverted()?;
                debug!(from, to, un = %inverse.un, de = %inverse.de, factor = inverse.equivale_a, "bridging via inverted relation");
                return self.convert(quantity, from, to, slice::from_ref(&inverse));
            }
        }

        debug!(from, to, relations = relations.len(), "no relation bridges the two types");
        Err(UnitError::IncompatibleTypes {
            from: source.id.clone(),
            to: target.id.clone(),
            from_kind: source.kind.to_string(),
            to_kind: target.kind.to_string(),
        })
    }

    /// How many `to` one `from` equals, under the given relations
    pub fn factor(&self, from: &str, to: &str, relations: &[Relation]) -> Result<f64> {
        self.convert(1.0, from, to, relations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNITS;

    fn assert_close(a: f64, b: f64) {
        let tolerance = 1e-10 * a.abs().max(b.abs()).max(1.0);
        assert!((a - b).abs() <= tolerance, "{} != {}", a, b);
    }

    #[test]
    fn test_same_type() {
        assert_eq!(UNITS.convert(1.0, "t", "g", &[]).unwrap(), 1_000_000.0);
        assert_eq!(UNITS.convert(1000.0, "g", "kg", &[]).unwrap(), 1.0);
        assert_eq!(UNITS.convert(1.0, "kg", "t", &[]).unwrap(), 0.001);
        assert_eq!(UNITS.convert(1.0, "m3", "L", &[]).unwrap(), 1000.0);
        assert_eq!(UNITS.convert(1.0, "ml", "cm3", &[]).unwrap(), 1.0);
        assert_eq!(UNITS.convert(1.0, "ha", "m2", &[]).unwrap(), 10_000.0);
        assert_eq!(UNITS.convert(1.0, "km", "m", &[]).unwrap(), 1000.0);
    }

    #[test]
    fn test_identity() {
        for id in UNITS.list_all().keys() {
            assert_eq!(UNITS.convert(0.1, id, id, &[]).unwrap(), 0.1);
        }
        assert_eq!(UNITS.convert(1.0, "u", "u", &[]).unwrap(), 1.0);
    }

    #[test]
    fn test_round_trip() {
        let all = UNITS.list_all();
        for x in all.values() {
            for y in UNITS.by_kind(x.kind) {
                let there = UNITS.convert(123.456, &x.id, &y.id, &[]).unwrap();
                let back = UNITS.convert(there, &y.id, &x.id, &[]).unwrap();
                assert_close(back, 123.456);
            }
        }
    }

    #[test]
    fn test_incompatible_without_relation() {
        let err = UNITS.convert(1.0, "t", "u", &[]).unwrap_err();
        match err {
            UnitError::IncompatibleTypes { from, to, from_kind, to_kind } => {
                assert_eq!((from.as_str(), to.as_str()), ("t", "u"));
                assert_eq!((from_kind.as_str(), to_kind.as_str()), ("Peso", "Cantidad"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_unknown_units() {
        assert!(matches!(UNITS.convert(1.0, "t", "xas", &[]), Err(UnitError::UnknownUnit(ref id)) if id == "xas"));
        assert!(matches!(UNITS.convert(1.0, "ter", "t", &[]), Err(UnitError::UnknownUnit(ref id)) if id == "ter"));
    }

    #[test]
    fn test_forward_relation() {
        let result = UNITS.convert(600.0, "ml", "kg", &[Relation::new("L", 0.92, "kg")]).unwrap();
        assert_eq!(result, 0.552);
    }

    #[test]
    fn test_reverse_relation() {
        let result = UNITS.convert(600.0, "ml", "kg", &[Relation::new("kg", 0.92, "L")]).unwrap();
        assert_eq!(result, 0.6521739130434782);
    }

    #[test]
    fn test_relation_on_exact_units() {
        let result = UNITS.convert(1.0, "kg", "L", &[Relation::new("kg", 0.92, "L")]).unwrap();
        assert_eq!(result, 0.92);
    }

    #[test]
    fn test_relation_of_wrong_types() {
        let err = UNITS.convert(600.0, "ml", "kg", &[Relation::new("kg", 0.92, "cm")]).unwrap_err();
        assert!(matches!(err, UnitError::IncompatibleTypes { .. }));
    }

    #[test]
    fn test_relation_scaled_to_target() {
        let result = UNITS.convert(2.0, "L", "g", &[Relation::new("L", 1.0, "kg")]).unwrap();
        assert_close(result, 2000.0);
    }

    #[test]
    fn test_relation_in_neither_unit() {
        let result = UNITS.convert(2.0, "L", "kg", &[Relation::new("ml", 1.0, "g")]).unwrap();
        assert_close(result, 2.0);
    }

    #[test]
    fn test_first_match_wins() {
        let relations = [
            Relation::new("kg", 0.5, "cm"),
            Relation::new("u", 25.0, "kg"),
            Relation::new("u", 50.0, "kg"),
        ];
        assert_eq!(UNITS.convert(2.0, "u", "kg", &relations).unwrap(), 50.0);
    }

    #[test]
    fn test_zero_factor_on_inversion() {
        let err = UNITS.convert(600.0, "ml", "kg", &[Relation::new("kg", 0.0, "L")]).unwrap_err();
        assert!(matches!(err, UnitError::InvalidRelation { .. }));

        let err = UNITS.convert(600.0, "ml", "kg", &[Relation::new("kg", -1.0, "L")]).unwrap_err();
        assert!(matches!(err, UnitError::InvalidRelation { .. }));
    }

    #[test]
    fn test_forward_factor_applied_as_given() {
        let result = UNITS.convert(600.0, "ml", "kg", &[Relation::new("L", -0.5, "kg")]).unwrap();
        assert_close(result, -0.3);

        let result = UNITS.convert(600.0, "ml", "kg", &[Relation::new("L", 0.0, "kg")]).unwrap();
        assert_eq!(result, 0.0);
    }

    #[test]
    fn test_relation_with_unknown_unit_is_skipped() {
        let relations = [Relation::new("bidon", 25.0, "kg"), Relation::new("L", 0.92, "kg")];
        assert_eq!(UNITS.convert(1.0, "L", "kg", &relations).unwrap(), 0.92);

        let relations = [Relation::new("L", 0.92, "barril")];
        assert_eq!(UNITS.convert(1.0, "L", "kg", &relations).unwrap_err().code(), crate::codes::INCOMPATIBLE_TYPES);

        let err = UNITS.convert(1.0, "L", "kg", &[Relation::new("bidon", 25.0, "kg")]).unwrap_err();
        assert!(matches!(err, UnitError::IncompatibleTypes { .. }));
    }

    #[test]
    fn test_relations_ignored_for_same_type() {
        let relations = [Relation::new("kg", 0.0, "L")];
        assert_eq!(UNITS.convert(1000.0, "g", "kg", &relations).unwrap(), 1.0);
    }

    #[test]
    fn test_relations_do_not_persist() {
        let relations = [Relation::new("L", 0.92, "kg")];
        assert!(UNITS.convert(1.0, "L", "kg", &relations).is_ok());
        assert!(UNITS.convert(1.0, "L", "kg", &[]).is_err());
    }

    #[test]
    fn test_factor() {
        assert_eq!(UNITS.factor("kg", "g", &[]).unwrap(), 1000.0);
        assert_eq!(UNITS.factor("L", "kg", &[Relation::new("L", 0.92, "kg")]).unwrap(), 0.92);
    }

    #[test]
    fn test_count_to_mass() {
        // 1 drum holds 25 kg
        let relations = [Relation::new("u", 25.0, "kg")];
        assert_eq!(UNITS.convert(3.0, "u", "kg", &relations).unwrap(), 75.0);
        assert_eq!(UNITS.convert(50.0, "kg", "u", &relations).unwrap(), 2.0);
    }
}
