/**
 * Stores a set of disjunct intervals, unifying them when possible.
 * After every insertion the intervals are sorted, disjunct and no two of them
 * touch.
 */

use std::cmp::Ordering;
use std::iter::FromIterator;
use crate::discrete::Discrete;
use crate::interval::Interval;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IntervalSet<T> {
    pub(crate) intervals: Vec<Interval<T>>,
}

impl <T> IntervalSet<T> {
    pub fn new() -> Self {
        IntervalSet{ intervals: Vec::new() }
    }

    /// The disjunct intervals in ascending order.
    pub fn intervals(&self) -> &[Interval<T>] {
        &self.intervals
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl <T> Default for IntervalSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl <T> IntervalSet<T> where T : Discrete {
    /// Returns the index of the interval containing the value, or the index
    /// where a new interval starting with the value would go.
    fn locate(&self, value: T) -> Result<usize, usize> {
        self.intervals.binary_search_by(|i| {
            if i.upper < value {
                Ordering::Less
            }
            else if i.lower > value {
                Ordering::Greater
            }
            else {
                Ordering::Equal
            }
        })
    }

    pub fn contains(&self, value: T) -> bool {
        self.locate(value).is_ok()
    }

    /// Inserts a single value, extending or bridging neighbours it touches.
    pub fn insert(&mut self, value: T) {
        let idx = match self.locate(value) {
            Ok(_) => return,
            Err(idx) => idx,
        };

        let joins_prev = idx > 0 && self.intervals[idx - 1].upper.succ() == Some(value);
        let joins_next = idx < self.intervals.len() && value.succ() == Some(self.intervals[idx].lower);

        match (joins_prev, joins_next) {
            (true, true) => {
                // Fills the only gap between two entries
                let upper = self.intervals[idx].upper;
                self.intervals[idx - 1].upper = upper;
                self.intervals.remove(idx);
            },
            (true, false) => self.intervals[idx - 1].upper = value,
            (false, true) => self.intervals[idx].lower = value,
            (false, false) => self.intervals.insert(idx, Interval::singleton(value)),
        }
    }

    /// Inserts the closed interval between the two values (in any order),
    /// unifying every touching and overlapping entry.
    pub fn insert_range(&mut self, start: T, end: T) {
        let value = Interval::new(start, end);

        // First entry that is not entirely before the inserted interval
        let from = self.intervals.partition_point(|i| i.is_before(&value));
        // First entry after that which is entirely after it
        let to = from + self.intervals[from..].partition_point(|i| !value.is_before(i));

        if from == to {
            // Intersects or touches nothing, just insert
            self.intervals.insert(from, value);
            return;
        }

        let lower = std::cmp::min(self.intervals[from].lower, value.lower);
        let upper = std::cmp::max(self.intervals[to - 1].upper, value.upper);
        self.intervals[from] = Interval{ lower, upper };
        self.intervals.drain((from + 1)..to);
    }

    /// The number of values in the set.
    pub fn count(&self) -> usize {
        self.intervals.iter().map(Interval::len).sum()
    }

    /// The n-th value of the set in ascending order.
    pub fn nth(&self, mut n: usize) -> Option<T> {
        for interval in &self.intervals {
            let len = interval.len();
            if n < len {
                return interval.lower.advance(n);
            }
            n -= len;
        }
        None
    }

    /// Iterates over every value of the set in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter{ intervals: &self.intervals, next: self.intervals.first().map(|i| i.lower) }
    }
}

/**
 * Iterate over all values.
 */

pub struct Iter<'a, T> {
    intervals: &'a [Interval<T>],
    next: Option<T>,
}

impl <'a, T> Iterator for Iter<'a, T> where T : Discrete {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = self.next?;
        let current = self.intervals.first()?;
        if value < current.upper {
            self.next = value.succ();
        }
        else {
            self.intervals = &self.intervals[1..];
            self.next = self.intervals.first().map(|i| i.lower);
        }
        Some(value)
    }
}

/**
 * Building sets.
 */

impl <T> Extend<T> for IntervalSet<T> where T : Discrete {
    fn extend<I>(&mut self, iter: I) where I : IntoIterator<Item = T> {
        for value in iter {
            self.insert(value);
        }
    }
}

impl <T> Extend<Interval<T>> for IntervalSet<T> where T : Discrete {
    fn extend<I>(&mut self, iter: I) where I : IntoIterator<Item = Interval<T>> {
        for interval in iter {
            self.insert_range(interval.lower, interval.upper);
        }
    }
}

impl <T> FromIterator<T> for IntervalSet<T> where T : Discrete {
    fn from_iter<I>(iter: I) -> Self where I : IntoIterator<Item = T> {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl <T> FromIterator<Interval<T>> for IntervalSet<T> where T : Discrete {
    fn from_iter<I>(iter: I) -> Self where I : IntoIterator<Item = Interval<T>> {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl <T> std::fmt::Debug for IntervalSet<T> where T : std::fmt::Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.intervals.iter()).finish()
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod interval_set_tests {
    use super::*;

    fn ranges(set: &IntervalSet<i32>) -> Vec<(i32, i32)> {
        set.intervals().iter().map(|i| (i.lower, i.upper)).collect()
    }

    fn set_of(rs: &[(i32, i32)]) -> IntervalSet<i32> {
        rs.iter().map(|&(a, b)| Interval::new(a, b)).collect()
    }

    /**
     * Single value insertion.
     */

    #[test]
    fn insert_into_empty() {
        let mut s = IntervalSet::new();
        s.insert(4);
        assert_eq!(ranges(&s), vec![(4, 4)]);
    }

    #[test]
    fn insert_isolated() {
        let mut s = set_of(&[(1, 2), (8, 9)]);
        s.insert(5);
        assert_eq!(ranges(&s), vec![(1, 2), (5, 5), (8, 9)]);
    }

    #[test]
    fn insert_extends_left_neighbour() {
        let mut s = set_of(&[(1, 2), (8, 9)]);
        s.insert(3);
        assert_eq!(ranges(&s), vec![(1, 3), (8, 9)]);
    }

    #[test]
    fn insert_extends_right_neighbour() {
        let mut s = set_of(&[(1, 2), (8, 9)]);
        s.insert(7);
        assert_eq!(ranges(&s), vec![(1, 2), (7, 9)]);
    }

    #[test]
    fn insert_bridges_neighbours() {
        let mut s = set_of(&[(1, 3), (5, 7)]);
        s.insert(4);
        assert_eq!(ranges(&s), vec![(1, 7)]);
    }

    #[test]
    fn insert_after_last() {
        let mut s = set_of(&[(1, 3)]);
        s.insert(4);
        s.insert(10);
        assert_eq!(ranges(&s), vec![(1, 4), (10, 10)]);
    }

    #[test]
    fn insert_before_first() {
        let mut s = set_of(&[(5, 6)]);
        s.insert(4);
        s.insert(1);
        assert_eq!(ranges(&s), vec![(1, 1), (4, 6)]);
    }

    #[test]
    fn insert_existing_is_noop() {
        let mut s = set_of(&[(1, 3), (5, 7)]);
        s.insert(6);
        assert_eq!(ranges(&s), vec![(1, 3), (5, 7)]);
    }

    /**
     * Range insertion.
     */

    #[test]
    fn range_swaps_reversed_bounds() {
        let mut s = IntervalSet::new();
        s.insert_range(9, 4);
        assert_eq!(ranges(&s), vec![(4, 9)]);
    }

    #[test]
    fn range_inside_existing_is_noop() {
        let mut s = set_of(&[(1, 10)]);
        s.insert_range(3, 6);
        assert_eq!(ranges(&s), vec![(1, 10)]);
    }

    #[test]
    fn range_in_gap() {
        let mut s = set_of(&[(1, 2), (20, 22)]);
        s.insert_range(6, 9);
        assert_eq!(ranges(&s), vec![(1, 2), (6, 9), (20, 22)]);
    }

    #[test]
    fn range_touching_before() {
        let mut s = set_of(&[(1, 2), (20, 22)]);
        s.insert_range(3, 9);
        assert_eq!(ranges(&s), vec![(1, 9), (20, 22)]);
    }

    #[test]
    fn range_touching_after() {
        let mut s = set_of(&[(1, 2), (20, 22)]);
        s.insert_range(6, 19);
        assert_eq!(ranges(&s), vec![(1, 2), (6, 22)]);
    }

    #[test]
    fn range_touching_both() {
        let mut s = set_of(&[(1, 2), (20, 22)]);
        s.insert_range(3, 19);
        assert_eq!(ranges(&s), vec![(1, 22)]);
    }

    #[test]
    fn range_absorbs_many() {
        let mut s = set_of(&[(3, 5), (7, 8), (14, 16), (20, 23), (30, 31)]);
        s.insert_range(4, 21);
        assert_eq!(ranges(&s), vec![(3, 23), (30, 31)]);
    }

    #[test]
    fn range_covers_everything() {
        let mut s = set_of(&[(3, 5), (7, 8), (14, 16)]);
        s.insert_range(0, 100);
        assert_eq!(ranges(&s), vec![(0, 100)]);
    }

    #[test]
    fn range_extends_beyond_last() {
        let mut s = set_of(&[(3, 5), (7, 8)]);
        s.insert_range(8, 12);
        assert_eq!(ranges(&s), vec![(3, 5), (7, 12)]);
    }

    #[test]
    fn range_singleton() {
        let mut s = set_of(&[(1, 3), (5, 7)]);
        s.insert_range(4, 4);
        assert_eq!(ranges(&s), vec![(1, 7)]);
    }

    #[test]
    fn range_at_type_limits() {
        let mut s = IntervalSet::new();
        s.insert_range(i32::max_value() - 1, i32::max_value());
        s.insert_range(i32::min_value(), i32::min_value() + 1);
        s.insert(i32::max_value() - 2);
        assert_eq!(
            ranges(&s),
            vec![(i32::min_value(), i32::min_value() + 1), (i32::max_value() - 2, i32::max_value())]
        );
    }

    /**
     * Queries.
     */

    #[test]
    fn contains_values() {
        let s = set_of(&[(1, 3), (7, 7)]);
        assert!(!s.contains(0));
        assert!(s.contains(1));
        assert!(s.contains(3));
        assert!(!s.contains(4));
        assert!(s.contains(7));
        assert!(!s.contains(8));
    }

    #[test]
    fn count_sums_lengths() {
        let s = set_of(&[(1, 3), (7, 7), (10, 14)]);
        assert_eq!(s.count(), 9);
        assert_eq!(IntervalSet::<i32>::new().count(), 0);
    }

    #[test]
    fn nth_walks_intervals() {
        let s = set_of(&[(1, 3), (7, 7), (10, 14)]);
        assert_eq!(s.nth(0), Some(1));
        assert_eq!(s.nth(2), Some(3));
        assert_eq!(s.nth(3), Some(7));
        assert_eq!(s.nth(4), Some(10));
        assert_eq!(s.nth(8), Some(14));
        assert_eq!(s.nth(9), None);
    }

    #[test]
    fn iter_yields_all_values() {
        let s = set_of(&[(1, 3), (7, 7)]);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 2, 3, 7]);
    }

    #[test]
    fn char_set_bridges_surrogates() {
        let mut s = IntervalSet::new();
        s.insert_range('\u{D000}', '\u{D7FF}');
        s.insert('\u{E000}');
        assert_eq!(s.intervals().len(), 1);
        assert_eq!(s.count(), 0x800 + 1);
        assert_eq!(s.nth(0x800), Some('\u{E000}'));
    }
}
