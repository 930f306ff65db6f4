/// Scores closer than this are treated as tied.
pub const DEFAULT_TIE_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Maximum gap between two scores for them to count as tied. Negative or NaN values behave
    /// as 0, so only exactly equal scores tie.
    pub tie_epsilon: f64,
    pub weight_policy: WeightPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tie_epsilon: DEFAULT_TIE_EPSILON,
            weight_policy: WeightPolicy::default(),
        }
    }
}

/// Constraint on the sum of all criterion weights.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum WeightPolicy {
    /// Any positive weights are accepted. Scaling every weight by the same factor scales both
    /// distances by that factor, so scores do not depend on the weights summing to 1.
    #[default]
    Permissive,
    /// Weights must sum to 1 within `tolerance`.
    RequireUnitSum { tolerance: f64 },
}

#[cfg(test)]
mod test {
    use super::{Config, WeightPolicy, DEFAULT_TIE_EPSILON};

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.tie_epsilon, DEFAULT_TIE_EPSILON);
        assert_eq!(config.weight_policy, WeightPolicy::Permissive);
    }
}
