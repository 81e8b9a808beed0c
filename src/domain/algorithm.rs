//! Algorithm enum for selecting the step implementation.
//!
//! Both variants compute neighbor counts from the previous generation before
//! applying the rule, so they always agree; they differ only in how the
//! counting pass is scheduled.

use std::fmt;
use std::str::FromStr;

use crate::error::LifeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Single-threaded counting pass
    #[default]
    Sparse,
    /// Counting pass folded across rayon workers and merged
    SparseParallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Sparse, Algorithm::SparseParallel]
    }

    /// Name used on the command line and in the HUD
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sparse => "sparse",
            Algorithm::SparseParallel => "sparse-parallel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Sparse => "HashMap of tracked cells, serial count",
            Algorithm::SparseParallel => "HashMap of tracked cells, rayon fold/reduce count",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::all()
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LifeError::InvalidConfig(format!("unknown algorithm {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Sparse);
    }

    #[test]
    fn test_names_parse_back() {
        for algorithm in Algorithm::all() {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_descriptions_name_the_counter() {
        assert!(Algorithm::Sparse.description().contains("serial"));
        assert!(Algorithm::SparseParallel.description().contains("rayon"));
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert!("simd".parse::<Algorithm>().is_err());
    }
}
