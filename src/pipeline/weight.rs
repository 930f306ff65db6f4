use super::{NormalizedMatrix, WeightedMatrix};
use crate::criteria::CriterionSet;

pub fn apply_weights(criteria: &CriterionSet<'_>, matrix: NormalizedMatrix) -> WeightedMatrix {
    let mut matrix = matrix.0;
    for column in 0..matrix.columns() {
        let weight = criteria.weight(column).as_f64();
        matrix.update_column(column, |v| v * weight);
    }
    WeightedMatrix(matrix)
}
