use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of an aggregate (package, jamaah, payment).
///
/// All ids are UUID newtypes; the string form is what the UI binds to
/// `<select>` values and `<For>` keys.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id as a string
    fn as_string(&self) -> String;

    /// Parse the id back from its string form
    fn from_string(s: &str) -> Result<Self, String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_jamaah::aggregate::JamaahId;
    use uuid::Uuid;

    #[test]
    fn id_round_trips_through_string() {
        let id = JamaahId::new(Uuid::from_u128(42));
        assert_eq!(JamaahId::from_string(&id.as_string()), Ok(id));
    }

    #[test]
    fn invalid_uuid_is_reported() {
        let err = JamaahId::from_string("jam-001").unwrap_err();
        assert!(err.starts_with("Invalid UUID"));
    }
}
