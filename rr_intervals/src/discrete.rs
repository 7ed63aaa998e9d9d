/**
 * Values that have a well-defined neighbour on both sides. This is what makes
 * two closed intervals "touch": the upper end of one is followed directly by
 * the lower end of the other.
 */

pub trait Discrete : Copy + Ord {
    /// The smallest value greater than self, if any
    fn succ(self) -> Option<Self>;

    /// Number of values in the closed range [lower; upper], lower <= upper
    fn span(lower: Self, upper: Self) -> usize;

    /// Steps n values forward
    fn advance(self, n: usize) -> Option<Self>;
}

macro_rules! impl_discrete_for_int {
    ($($t:ty),*) => {
        $(
            impl Discrete for $t {
                fn succ(self) -> Option<Self> {
                    self.checked_add(1)
                }

                fn span(lower: Self, upper: Self) -> usize {
                    (upper as i128 - lower as i128 + 1) as usize
                }

                fn advance(self, n: usize) -> Option<Self> {
                    let value = self as i128 + n as i128;
                    if value > <$t>::max_value() as i128 {
                        None
                    }
                    else {
                        Some(value as $t)
                    }
                }
            }
        )*
    };
}

impl_discrete_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

const SURROGATE_LOW: u32 = 0xD800;
const SURROGATE_HIGH: u32 = 0xDFFF;
const SURROGATE_COUNT: usize = (SURROGATE_HIGH - SURROGATE_LOW + 1) as usize;

/**
 * Unicode scalar values. The surrogate block is skipped, so '\u{D7FF}' and
 * '\u{E000}' are neighbours.
 */
impl Discrete for char {
    fn succ(self) -> Option<Self> {
        match self as u32 {
            0xD7FF => Some('\u{E000}'),
            c => std::char::from_u32(c + 1),
        }
    }

    fn span(lower: Self, upper: Self) -> usize {
        let raw = (upper as u32 - lower as u32) as usize + 1;
        if (lower as u32) < SURROGATE_LOW && (upper as u32) > SURROGATE_HIGH {
            raw - SURROGATE_COUNT
        }
        else {
            raw
        }
    }

    fn advance(self, n: usize) -> Option<Self> {
        let mut value = (self as u32 as usize).checked_add(n)?;
        if (self as u32) < SURROGATE_LOW && value >= SURROGATE_LOW as usize {
            value += SURROGATE_COUNT;
        }
        if value > std::char::MAX as usize {
            return None;
        }
        std::char::from_u32(value as u32)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
