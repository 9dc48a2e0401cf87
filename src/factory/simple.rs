//! Variant 1: a free factory function over a closed enum of types.

use super::{Boat, FactoryError, GameObject, Plane};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// The built-in variants the enum-based factories know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Plane,
    Boat,
}

impl ObjectType {
    pub const ALL: [ObjectType; 2] = [ObjectType::Plane, ObjectType::Boat];

    pub fn as_str(self) -> &'static str {
        match self {
            ObjectType::Plane => "plane",
            ObjectType::Boat => "boat",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = FactoryError;

    /// Parses a type name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ObjectType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| FactoryError::UnknownType(name.to_string()))
    }
}

/// Builds a fresh game object of the requested type.
///
/// The `match` is exhaustive, so adding a variant to [`ObjectType`] without teaching
/// the factory about it is a compile error rather than a missing object at runtime.
pub fn make_game_object(kind: ObjectType) -> Box<dyn GameObject> {
    info!(%kind, "Made game object");
    match kind {
        ObjectType::Plane => Box::new(Plane::new(0, 0)),
        ObjectType::Boat => Box::new(Boat::new(0, 0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_builds_requested_variant() {
        assert_eq!(make_game_object(ObjectType::Plane).kind(), "plane");
        assert_eq!(make_game_object(ObjectType::Boat).kind(), "boat");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("PLANE".parse::<ObjectType>().unwrap(), ObjectType::Plane);
        assert_eq!(" boat ".parse::<ObjectType>().unwrap(), ObjectType::Boat);
    }

    #[test]
    fn test_parse_unknown_type_fails() {
        let err = "submarine".parse::<ObjectType>().unwrap_err();
        assert!(matches!(err, FactoryError::UnknownType(ref name) if name == "submarine"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in ObjectType::ALL {
            assert_eq!(kind.to_string().parse::<ObjectType>().unwrap(), kind);
        }
    }
}
