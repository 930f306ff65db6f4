use super::WeightedMatrix;
use crate::criteria::CriterionSet;

/// Per-criterion best and worst weighted values among the given alternatives, indexed by column.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferencePoints {
    pub ideal: Vec<f64>,
    pub anti_ideal: Vec<f64>,
}

/// Benefit criteria take the column maximum as ideal and the minimum as anti-ideal; cost criteria
/// the reverse. Only the values matter, not which alternative attains them.
pub fn reference_points(criteria: &CriterionSet<'_>, matrix: &WeightedMatrix) -> ReferencePoints {
    let matrix = matrix.as_matrix();
    let (ideal, anti_ideal) = (0..matrix.columns())
        .map(|column| {
            let (min, max) = matrix
                .column(column)
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                    (min.min(v), max.max(v))
                });
            criteria.direction(column).reference_points(min, max)
        })
        .unzip();
    ReferencePoints { ideal, anti_ideal }
}
