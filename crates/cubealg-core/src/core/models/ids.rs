use std::fmt;
use std::str::FromStr;

/// Identity of an algorithm record, unique within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AlgorithmId(pub i64);

impl AlgorithmId {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AlgorithmId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for AlgorithmId {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
