mod discrete;
mod interval;
mod interval_set;

pub use discrete::Discrete;
pub use interval::Interval;
pub use interval_set::{IntervalSet, Iter};
