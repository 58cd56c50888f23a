use std::fmt;

/// Upper bound for both point counters.
///
/// Every mutation clamps against this value instead of rejecting the input,
/// so a member's counters can reach but never exceed it.
pub const MAX_POINTS: u32 = 2_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPointsError {
    /// Point amounts are always non-negative
    #[error("points cannot be negative: {0}")]
    Negative(i64),
    /// Raw input that does not parse as a non-negative integer
    #[error("points must be a non-negative integer, got {0:?}")]
    NotAnInteger(String),
    /// Awarded deltas must be strictly positive
    #[error("points added should be greater than 0, got {0}")]
    NotPositive(i64),
}

/// Spendable loyalty points
///
/// Immutable value object; `saturating_add` returns a new instance rather
/// than mutating in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Points(u32);

/// Lifetime membership points
///
/// Accumulates independently from [`Points`] and drives the member's
/// [`Tier`]. Never decreases through any operation in this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MembershipPoints(u32);

macro_rules! points_impl {
    ($name:ident) => {
        impl $name {
            pub fn new(value: u32) -> Self {
                Self(value)
            }

            /// Builds a value from a raw integer, rejecting negative input.
            ///
            /// There is no upper-bound check here: the cap at [`MAX_POINTS`]
            /// is enforced by [`Self::saturating_add`] alone.
            pub fn from_raw(raw: i64) -> Result<Self, InvalidPointsError> {
                if raw < 0 {
                    return Err(InvalidPointsError::Negative(raw));
                }
                u32::try_from(raw)
                    .map(Self)
                    .map_err(|_| InvalidPointsError::NotAnInteger(raw.to_string()))
            }

            /// Parses a decimal-digit string into a points value.
            pub fn parse(raw: &str) -> Result<Self, InvalidPointsError> {
                let raw = raw.trim();
                match raw.parse::<i64>() {
                    Ok(value) => Self::from_raw(value),
                    Err(_) => Err(InvalidPointsError::NotAnInteger(raw.to_string())),
                }
            }

            /// Clamped construction for computed awards that may overflow u32
            /// (e.g. `points_per_unit * quantity`).
            pub fn saturating_from(raw: u64) -> Self {
                Self(raw.min(MAX_POINTS as u64) as u32)
            }

            pub fn value(&self) -> u32 {
                self.0
            }

            /// `min(self + delta, MAX_POINTS)`
            ///
            /// Never fails, even when the sum vastly exceeds the cap; callers
            /// report saturation by checking [`Self::is_capped`] afterwards.
            #[must_use]
            pub fn saturating_add(&self, delta: Self) -> Self {
                Self((self.0 as u64 + delta.0 as u64).min(MAX_POINTS as u64) as u32)
            }

            /// True iff the counter sits exactly at [`MAX_POINTS`].
            pub fn is_capped(&self) -> bool {
                self.0 == MAX_POINTS
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

points_impl!(Points);
points_impl!(MembershipPoints);

impl MembershipPoints {
    /// Classifies the current value into a tier band, highest first.
    pub fn tier(&self) -> Tier {
        match self.0 {
            10_000.. => Tier::Platinum,
            5_000.. => Tier::Gold,
            2_000.. => Tier::Silver,
            _ => Tier::Bronze,
        }
    }
}

/// Membership tier, derived from [`MembershipPoints`]
///
/// Never stored; recomputed from the current value whenever displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use speculoos::prelude::*;

    #[rstest]
    #[case(0, Tier::Bronze)]
    #[case(1_999, Tier::Bronze)]
    #[case(2_000, Tier::Silver)]
    #[case(4_999, Tier::Silver)]
    #[case(5_000, Tier::Gold)]
    #[case(9_999, Tier::Gold)]
    #[case(10_000, Tier::Platinum)]
    #[case(MAX_POINTS, Tier::Platinum)]
    fn test_tier_boundaries(#[case] value: u32, #[case] expected: Tier) {
        // GIVEN a membership points value at a band boundary
        let points = MembershipPoints::new(value);

        // THEN the derived tier matches the band rule
        assert_that!(points.tier()).is_equal_to(expected);
    }

    #[test]
    fn test_tier_is_monotonic() {
        // GIVEN increasing membership point values crossing every boundary
        let samples = [0, 1_999, 2_000, 4_999, 5_000, 9_999, 10_000, MAX_POINTS];

        // THEN the tier never decreases as the value grows
        for pair in samples.windows(2) {
            let lower = MembershipPoints::new(pair[0]).tier();
            let upper = MembershipPoints::new(pair[1]).tier();
            assert_that!(lower <= upper).is_true();
        }
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(10, 25, 35)]
    #[case(MAX_POINTS - 5, 100, MAX_POINTS)]
    #[case(MAX_POINTS, 0, MAX_POINTS)]
    #[case(MAX_POINTS, MAX_POINTS, MAX_POINTS)]
    fn test_saturating_add(#[case] current: u32, #[case] delta: u32, #[case] expected: u32) {
        let result = Points::new(current).saturating_add(Points::new(delta));

        assert_that!(result.value()).is_equal_to(expected);
        assert_that!(result.value() <= MAX_POINTS).is_true();
    }

    #[test]
    fn test_saturating_add_idempotent_at_cap() {
        // GIVEN a counter already at the cap
        let capped = Points::new(MAX_POINTS - 1).saturating_add(Points::new(1_000));
        assert_that!(capped.is_capped()).is_true();

        // WHEN adding again
        let result = capped.saturating_add(Points::new(1_000));

        // THEN it stays exactly at the cap
        assert_that!(result.value()).is_equal_to(MAX_POINTS);
    }

    #[test]
    fn test_saturating_from_clamps_large_awards() {
        let award = MembershipPoints::saturating_from(u64::MAX);
        assert_that!(award.value()).is_equal_to(MAX_POINTS);
    }

    #[rstest]
    #[case("0", 0)]
    #[case("40", 40)]
    #[case(" 2000 ", 2_000)]
    fn test_parse_valid(#[case] raw: &str, #[case] expected: u32) {
        assert_that!(Points::parse(raw))
            .is_ok()
            .is_equal_to(Points::new(expected));
    }

    #[rstest]
    #[case("-1")]
    #[case("ten")]
    #[case("")]
    #[case("1.5")]
    #[case("9999999999999")]
    fn test_parse_invalid(#[case] raw: &str) {
        assert_that!(Points::parse(raw)).is_err();
    }

    #[test]
    fn test_from_raw_negative() {
        let res = MembershipPoints::from_raw(-40);
        assert_that!(res)
            .is_err()
            .is_equal_to(InvalidPointsError::Negative(-40));
    }
}
