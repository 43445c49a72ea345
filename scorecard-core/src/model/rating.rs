use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordinal score assigned to a record, always within 1..=5
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RatingError {
    #[error("rating {0} is outside 1..=5")]
    OutOfRange(u8),
}

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every legal rating, lowest first
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(RatingError::OutOfRange(value))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_closed() {
        assert_eq!(Rating::new(0), None);
        assert_eq!(Rating::new(1).map(Rating::value), Some(1));
        assert_eq!(Rating::new(5).map(Rating::value), Some(5));
        assert_eq!(Rating::new(6), None);
        assert_eq!(Rating::try_from(9), Err(RatingError::OutOfRange(9)));
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let rating: Rating = serde_json::from_str("4").unwrap();
        assert_eq!(rating.value(), 4);
        assert!(serde_json::from_str::<Rating>("0").is_err());
        assert_eq!(serde_json::to_string(&rating).unwrap(), "4");
    }

    #[test]
    fn test_all_yields_five_levels() {
        let values: Vec<u8> = Rating::all().map(Rating::value).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }
}
