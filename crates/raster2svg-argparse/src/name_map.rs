//! Bidirectional tables between enum values and their names.

use std::collections::BTreeMap;

use crate::error::DeclarationError;

/// Returned by [`NameMap::name`] for values missing from the table.
pub const UNKNOWN_NAME: &str = "<unknown>";

/// Maps enum values to names and back.
///
/// Built once from a fixed list of `(value, name)` pairs and immutable
/// afterwards. Both directions are ordered, so choices can be listed in
/// value order or name order.
#[derive(Debug, Clone)]
pub struct NameMap<E> {
    by_value: BTreeMap<E, &'static str>,
    by_name: BTreeMap<&'static str, E>,
}

impl<E: Copy + Ord> NameMap<E> {
    /// Build a table, rejecting duplicate values or duplicate names.
    pub fn new(pairs: &[(E, &'static str)]) -> Result<Self, DeclarationError> {
        let mut by_value = BTreeMap::new();
        let mut by_name = BTreeMap::new();

        for &(value, name) in pairs {
            if by_name.insert(name, value).is_some() {
                return Err(DeclarationError::DuplicateEnumName { name });
            }
            if let Some(first) = by_value.insert(value, name) {
                return Err(DeclarationError::DuplicateEnumValue {
                    first,
                    second: name,
                });
            }
        }

        Ok(Self { by_value, by_name })
    }

    /// Name of `value`, or [`UNKNOWN_NAME`] if it is not in the table.
    pub fn name(&self, value: E) -> &'static str {
        self.by_value.get(&value).copied().unwrap_or(UNKNOWN_NAME)
    }

    /// Value named `name`, or `None` if no entry has that name.
    pub fn value(&self, name: &str) -> Option<E> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_value.is_empty()
    }

    /// Entries sorted by value.
    pub fn by_value(&self) -> impl Iterator<Item = (E, &'static str)> + '_ {
        self.by_value.iter().map(|(&value, &name)| (value, name))
    }

    /// Entries sorted by name.
    pub fn by_name(&self) -> impl Iterator<Item = (&'static str, E)> + '_ {
        self.by_name.iter().map(|(&name, &value)| (name, value))
    }
}

/// Declare an enum together with a name table built from its variant
/// identifiers.
///
/// ```
/// raster2svg_argparse::name_map! {
///     #[derive(Default)]
///     pub enum Mode {
///         #[default]
///         Summary,
///         Trace,
///     }
/// }
///
/// assert_eq!(Mode::names().value("Trace"), Some(Mode::Trace));
/// assert_eq!(Mode::names().name(Mode::Summary), "Summary");
/// ```
///
/// The generated `names()` returns a process-wide table that is built on
/// first use. Pass it explicitly to [`EnumScalar`](crate::EnumScalar) or
/// [`EnumList`](crate::EnumList).
#[macro_export]
macro_rules! name_map {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant
            ),+
        }

        impl $name {
            $vis fn names() -> &'static $crate::NameMap<$name> {
                static NAMES: ::std::sync::LazyLock<$crate::NameMap<$name>> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::NameMap::new(&[$(($name::$variant, stringify!($variant))),+])
                            .expect("enum variant identifiers are unique")
                    });
                &NAMES
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Turtle {
        Leonardo,
        Raphael,
        Michelangelo,
        Donatello,
    }

    const TURTLES: [(Turtle, &str); 4] = [
        (Turtle::Leonardo, "leo"),
        (Turtle::Raphael, "raph"),
        (Turtle::Michelangelo, "mikey"),
        (Turtle::Donatello, "donnie"),
    ];

    #[test]
    fn every_pair_maps_both_ways() {
        let map = NameMap::new(&TURTLES).unwrap();
        assert_eq!(map.len(), TURTLES.len());
        for (value, name) in TURTLES {
            assert_eq!(map.name(value), name);
            assert_eq!(map.value(name), Some(value));
            assert_eq!(map.name(map.value(name).unwrap()), name);
        }
    }

    #[test]
    fn unknown_lookups_do_not_fail() {
        let map = NameMap::new(&TURTLES[..2]).unwrap();
        assert_eq!(map.name(Turtle::Donatello), UNKNOWN_NAME);
        assert_eq!(map.value("shredder"), None);
        assert_eq!(map.value(""), None);
    }

    #[test]
    fn iteration_orders() {
        let map = NameMap::new(&TURTLES).unwrap();
        let values: Vec<&str> = map.by_value().map(|(_, n)| n).collect();
        assert_eq!(values, ["leo", "raph", "mikey", "donnie"]);
        let names: Vec<&str> = map.by_name().map(|(n, _)| n).collect();
        assert_eq!(names, ["donnie", "leo", "mikey", "raph"]);
    }

    #[test]
    fn duplicates_are_rejected() {
        let err = NameMap::new(&[(Turtle::Leonardo, "leo"), (Turtle::Raphael, "leo")]).unwrap_err();
        assert_eq!(err, DeclarationError::DuplicateEnumName { name: "leo" });

        let err =
            NameMap::new(&[(Turtle::Leonardo, "leo"), (Turtle::Leonardo, "blue")]).unwrap_err();
        assert_eq!(
            err,
            DeclarationError::DuplicateEnumValue {
                first: "leo",
                second: "blue"
            }
        );
    }

    #[test]
    fn empty_table() {
        let map: NameMap<Turtle> = NameMap::new(&[]).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.name(Turtle::Leonardo), UNKNOWN_NAME);
    }

    crate::name_map! {
        #[derive(Default)]
        enum Shade {
            Light,
            #[default]
            Medium,
            Dark,
        }
    }

    #[test]
    fn macro_declares_enum_and_table() {
        let names = Shade::names();
        assert_eq!(names.len(), 3);
        assert_eq!(names.value("Dark"), Some(Shade::Dark));
        assert_eq!(names.name(Shade::default()), "Medium");
        assert!(std::ptr::eq(names, Shade::names()));
    }
}
