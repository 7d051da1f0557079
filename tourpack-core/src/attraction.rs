//! Points of cultural interest visited by tours.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of an attraction.
pub type AttractionId = u64;

/// A point of interest carrying a cultural-value score.
///
/// Attractions do not know which tours visit them; that relationship lives in
/// the [`Catalog`](crate::Catalog) association index.
///
/// # Examples
/// ```
/// use tourpack_core::Attraction;
///
/// let uffizi = Attraction::new(7, "Uffizi", 40);
/// assert_eq!(uffizi.cultural_value, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attraction {
    /// Unique identifier.
    pub id: AttractionId,
    /// Display name.
    pub name: String,
    /// Cultural-value score contributed when the attraction is visited.
    pub cultural_value: u32,
}

impl Attraction {
    /// Construct an attraction.
    pub fn new(id: AttractionId, name: impl Into<String>, cultural_value: u32) -> Self {
        Self {
            id,
            name: name.into(),
            cultural_value,
        }
    }
}
