//! Regions group the tours offered in one area.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a region.
pub type RegionId = String;

/// A named area that tours belong to.
///
/// # Examples
/// ```
/// use tourpack_core::Region;
///
/// let region = Region::new("TOS", "Toscana");
/// assert_eq!(region.id, "TOS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    /// Unique identifier.
    pub id: RegionId,
    /// Display name.
    pub name: String,
}

impl Region {
    /// Construct a region from its identifier and name.
    pub fn new(id: impl Into<RegionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
