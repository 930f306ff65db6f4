use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;

use crate::{num::Weight, Input, Result, TopsisError, WeightPolicy};

/// Whether higher or lower raw values are preferred for a criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Higher is better. The ideal value is the column maximum.
    Benefit,
    /// Lower is better. The ideal value is the column minimum.
    Cost,
}

impl Direction {
    /// Given the extremes of a column, return `(ideal, anti_ideal)`.
    pub fn reference_points(self, min: f64, max: f64) -> (f64, f64) {
        match self {
            Self::Benefit => (max, min),
            Self::Cost => (min, max),
        }
    }
}

impl FromStr for Direction {
    type Err = TopsisError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("benefit") {
            Ok(Self::Benefit)
        } else if value.eq_ignore_ascii_case("cost") {
            Ok(Self::Cost)
        } else {
            Err(TopsisError::InvalidDirection {
                value: s.to_owned(),
            })
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Benefit => f.write_str("benefit"),
            Self::Cost => f.write_str("cost"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Criterion {
    pub id: String,
    pub name: String,
    /// Must be finite and > 0. Weights are not required to sum to 1 unless
    /// [`WeightPolicy::RequireUnitSum`] is configured.
    pub weight: f64,
    pub direction: Direction,
}

impl Criterion {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        weight: f64,
        direction: Direction,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight,
            direction,
        }
    }
}

/// Criteria that passed validation for a single run, in caller order. Column `c` of every
/// matrix in the pipeline belongs to the criterion at position `c`.
#[derive(Debug)]
pub struct CriterionSet<'c> {
    criteria: &'c [Criterion],
    weights: Vec<Weight>,
    positions: BTreeMap<&'c str, usize>,
}

impl<'c> CriterionSet<'c> {
    pub fn new(criteria: &'c [Criterion], policy: WeightPolicy) -> Result<Self> {
        if criteria.is_empty() {
            return Err(TopsisError::EmptyInput(Input::Criteria));
        }
        let mut positions = BTreeMap::new();
        let mut weights = Vec::with_capacity(criteria.len());
        for (position, criterion) in criteria.iter().enumerate() {
            if positions.insert(criterion.id.as_str(), position).is_some() {
                return Err(TopsisError::DuplicateCriterion {
                    criterion: criterion.id.clone(),
                });
            }
            let weight = Weight::new(criterion.weight).ok_or_else(|| TopsisError::InvalidWeight {
                criterion: criterion.id.clone(),
                weight: criterion.weight,
            })?;
            weights.push(weight);
        }
        if let WeightPolicy::RequireUnitSum { tolerance } = policy {
            let sum: f64 = weights.iter().map(Weight::as_f64).sum();
            if !((sum - 1.0).abs() <= tolerance) {
                return Err(TopsisError::WeightSum { sum });
            }
        }
        Ok(Self {
            criteria,
            weights,
            positions,
        })
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'c Criterion> {
        self.criteria.iter()
    }

    pub fn id(&self, column: usize) -> &'c str {
        &self.criteria[column].id
    }

    pub fn weight(&self, column: usize) -> Weight {
        self.weights[column]
    }

    pub fn direction(&self, column: usize) -> Direction {
        self.criteria[column].direction
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }
}

#[cfg(test)]
mod test {
    use super::{Criterion, CriterionSet, Direction};
    use crate::{Input, TopsisError, WeightPolicy};

    fn criterion(id: &str, weight: f64) -> Criterion {
        Criterion::new(id, id, weight, Direction::Benefit)
    }

    #[test]
    fn direction_parsing() {
        assert_eq!("benefit".parse::<Direction>(), Ok(Direction::Benefit));
        assert_eq!(" Cost ".parse::<Direction>(), Ok(Direction::Cost));
        assert_eq!(
            "gain".parse::<Direction>(),
            Err(TopsisError::InvalidDirection {
                value: "gain".to_owned()
            })
        );
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn direction_reference_points() {
        assert_eq!(Direction::Benefit.reference_points(1.0, 3.0), (3.0, 1.0));
        assert_eq!(Direction::Cost.reference_points(1.0, 3.0), (1.0, 3.0));
    }

    #[test]
    fn empty() {
        let err = CriterionSet::new(&[], WeightPolicy::Permissive).unwrap_err();
        assert_eq!(err, TopsisError::EmptyInput(Input::Criteria));
    }

    #[test]
    fn duplicate_id() {
        let criteria = [criterion("C1", 0.5), criterion("C1", 0.5)];
        let err = CriterionSet::new(&criteria, WeightPolicy::Permissive).unwrap_err();
        assert_eq!(
            err,
            TopsisError::DuplicateCriterion {
                criterion: "C1".to_owned()
            }
        );
    }

    #[test]
    fn invalid_weights() {
        for weight in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let criteria = [criterion("C1", 1.0), criterion("C2", weight)];
            let err = CriterionSet::new(&criteria, WeightPolicy::Permissive).unwrap_err();
            assert!(
                matches!(&err, TopsisError::InvalidWeight { criterion, .. } if criterion == "C2"),
                "{err:?}"
            );
        }
    }

    #[test]
    fn weights_need_not_sum_to_one() {
        let criteria = [criterion("C1", 3.0), criterion("C2", 7.0)];
        let set = CriterionSet::new(&criteria, WeightPolicy::Permissive).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.position("C2"), Some(1));
        assert_eq!(set.position("C3"), None);
        assert_eq!(set.weight(1).as_f64(), 7.0);
    }

    #[test]
    fn unit_sum_policy() {
        let policy = WeightPolicy::RequireUnitSum { tolerance: 1e-9 };
        let criteria = [criterion("C1", 0.4), criterion("C2", 0.6)];
        assert!(CriterionSet::new(&criteria, policy).is_ok());

        let criteria = [criterion("C1", 3.0), criterion("C2", 7.0)];
        let err = CriterionSet::new(&criteria, policy).unwrap_err();
        assert_eq!(err, TopsisError::WeightSum { sum: 10.0 });
    }
}
