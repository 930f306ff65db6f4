use super::{euclidean_length, ReferencePoints, WeightedMatrix};

/// Euclidean distances of one alternative's weighted vector to the two reference points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distances {
    pub to_ideal: f64,
    pub to_anti_ideal: f64,
}

/// One entry per alternative, in row order.
pub fn distances(matrix: &WeightedMatrix, reference: &ReferencePoints) -> Vec<Distances> {
    let matrix = matrix.as_matrix();
    (0..matrix.rows())
        .map(|row| {
            let row = matrix.row(row);
            let to = |point: &[f64]| euclidean_length(row.iter().zip(point).map(|(v, p)| v - p));
            Distances {
                to_ideal: to(&reference.ideal),
                to_anti_ideal: to(&reference.anti_ideal),
            }
        })
        .collect()
}
