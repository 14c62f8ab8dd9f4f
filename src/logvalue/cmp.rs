use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::logvalue::LogValue;

// Zero is canonical (positive sign) and NaN never enters a LogValue, so the
// order is total.
impl Ord for LogValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.log_mag.total_cmp(&other.log_mag),
            (true, true) => other.log_mag.total_cmp(&self.log_mag),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
        }
    }
}

impl PartialOrd for LogValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for LogValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LogValue {}

impl Hash for LogValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.log_mag.to_bits().hash(state);
        self.negative.hash(state);
    }
}
