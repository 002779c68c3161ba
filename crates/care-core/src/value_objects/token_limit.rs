//! Weekly token limit - tagged allowance instead of a numeric infinity sentinel

use std::fmt;

/// Weekly booking allowance attached to a membership tier.
///
/// `Unlimited` is a distinct variant so limit comparisons can never be
/// performed accidentally against a magic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenLimit {
    /// A fixed number of bookings per week (may be zero).
    Limited(u32),
    /// No weekly cap.
    Unlimited,
}

impl TokenLimit {
    /// Check whether this limit caps weekly bookings at all
    #[inline]
    pub const fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// Whether `used` bookings exhaust this limit.
    ///
    /// Unlimited allowances are never exhausted.
    pub fn is_exhausted(&self, used: u32) -> bool {
        match self {
            Self::Limited(limit) => used >= *limit,
            Self::Unlimited => false,
        }
    }

    /// Tokens left after `used` bookings, saturating at zero.
    /// Returns `None` for unlimited allowances.
    pub fn remaining(&self, used: u32) -> Option<u32> {
        match self {
            Self::Limited(limit) => Some(limit.saturating_sub(used)),
            Self::Unlimited => None,
        }
    }
}

impl fmt::Display for TokenLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(n) => write!(f, "{n}"),
            Self::Unlimited => write!(f, "Unlimited"),
        }
    }
}
