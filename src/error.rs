use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Fatal pipeline failures.
///
/// None of these are recoverable: there is no partial result, and the caller
/// must not use any clause list obtained alongside an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The cube batch was empty. Zero cubes have no defined clause encoding.
    #[error("cube batch is empty")]
    EmptyCubes,

    /// A cube's variable magnitudes differ from the first cube's.
    #[error("cube #{index} has variables {found:?}, expected {expected:?}")]
    CubeVariables {
        /// Zero-based position of the offending cube in the batch.
        index: usize,
        expected: Vec<u32>,
        found: Vec<u32>,
    },

    /// The minimizer oracle returned a number of covers other than one.
    /// The oracle is deterministic, so there is no point in retrying.
    #[error("minimizer returned {count} covers instead of exactly one")]
    CoverCardinality { count: usize },

    /// An intermediate formula failed its expected normal-form predicate,
    /// indicating a bug in the encoding or a broken engine contract.
    #[error("formula is not in {form}")]
    NotNormal { form: NormalForm },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NormalForm {
    Dnf,
    Cnf,
}

impl Display for NormalForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalForm::Dnf => write!(f, "DNF"),
            NormalForm::Cnf => write!(f, "CNF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::CubeVariables {
            index: 1,
            expected: vec![1, 2, 3],
            found: vec![1, 2, 4],
        };
        assert_eq!(format!("{}", e), "cube #1 has variables [1, 2, 4], expected [1, 2, 3]");

        let e = Error::NotNormal { form: NormalForm::Cnf };
        assert_eq!(format!("{}", e), "formula is not in CNF");
    }
}
