use thiserror::Error;

pub type Result<T, E = TopsisError> = std::result::Result<T, E>;

/// Which side of the decision matrix was left empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Criteria,
    Alternatives,
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Criteria => f.write_str("criteria"),
            Self::Alternatives => f.write_str("alternatives"),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TopsisError {
    #[error("no {0} supplied")]
    EmptyInput(Input),

    #[error("criterion {criterion:?} has weight {weight}, expected a finite value > 0")]
    InvalidWeight { criterion: String, weight: f64 },

    #[error("invalid direction {value:?}, expected \"benefit\" or \"cost\"")]
    InvalidDirection { value: String },

    #[error("alternative {alternative:?} has no value for criterion {criterion:?}")]
    MissingValue {
        alternative: String,
        criterion: String,
    },

    #[error("every alternative has value 0 for criterion {criterion:?}, column cannot be normalized")]
    ZeroNormDivision { criterion: String },

    #[error("alternative {alternative:?} is at distance 0 from both the ideal and the anti-ideal solution")]
    DegenerateScore { alternative: String },

    #[error("distances of alternative {alternative:?} exceed the range of f64")]
    NonFiniteDistance { alternative: String },

    #[error("duplicate criterion id {criterion:?}")]
    DuplicateCriterion { criterion: String },

    #[error("duplicate alternative name {alternative:?}")]
    DuplicateAlternative { alternative: String },

    #[error("alternative {alternative:?} has a value for unknown criterion {criterion:?}")]
    UnknownCriterion {
        alternative: String,
        criterion: String,
    },

    #[error("alternative {alternative:?} has non-finite value {value} for criterion {criterion:?}")]
    NonFiniteValue {
        alternative: String,
        criterion: String,
        value: f64,
    },

    #[error("criterion weights sum to {sum}, expected 1")]
    WeightSum { sum: f64 },
}

impl TopsisError {
    /// Numeric errors can only surface once the input has passed validation.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::ZeroNormDivision { .. }
                | Self::DegenerateScore { .. }
                | Self::NonFiniteDistance { .. }
        )
    }
}
