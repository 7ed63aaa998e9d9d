/**
 * A closed interval of discrete values.
 */

use crate::discrete::Discrete;

/// Represents the closed interval [lower; upper]
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    pub lower: T,
    pub upper: T,
}

/**
 * Constructing an interval.
 */

impl <T> Interval<T> where T : Ord {
    /// Creates the interval between the two values, swapping them if needed.
    pub fn new(a: T, b: T) -> Self {
        if a <= b {
            Self{ lower: a, upper: b }
        }
        else {
            Self{ lower: b, upper: a }
        }
    }
}

impl <T> Interval<T> where T : Clone {
    pub fn singleton(value: T) -> Self {
        Self{ lower: value.clone(), upper: value }
    }
}

/**
 * Debug-print an interval.
 */
impl <T> std::fmt::Debug for Interval<T> where T : std::fmt::Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        self.lower.fmt(f)?;
        write!(f, "; ")?;
        self.upper.fmt(f)?;
        write!(f, "]")
    }
}

/**
 * Info about a single interval.
 */

impl <T> Interval<T> where T : PartialOrd {
    /// Checks if an element is contained by the interval.
    pub fn contains(&self, element: &T) -> bool {
        &self.lower <= element && element <= &self.upper
    }
}

impl <T> Interval<T> where T : Discrete {
    /// The number of values in the interval.
    pub fn len(&self) -> usize {
        T::span(self.lower, self.upper)
    }

    /// Checks if the first interval ends right before the second one starts,
    /// with no value in between.
    pub fn is_touching(&self, other: &Self) -> bool {
        self.upper.succ() == Some(other.lower)
    }

    /// Checks if the first interval is entirely before the second one and
    /// does not even touch it.
    pub fn is_before(&self, other: &Self) -> bool {
        self.upper < other.lower && !self.is_touching(other)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
