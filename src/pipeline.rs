//! The stages of a TOPSIS run. Each stage takes the previous stage's output by type, so the only
//! way to obtain a [`WeightedMatrix`] is from a [`NormalizedMatrix`], and so on down to the
//! ranking.

pub mod distance;
pub mod ideal;
pub mod normalize;
pub mod rank;
pub mod weight;

pub use distance::{distances, Distances};
pub use ideal::{reference_points, ReferencePoints};
pub use normalize::normalize;
pub use rank::{closeness, ranking_order};
pub use weight::apply_weights;

use crate::matrix::Matrix;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Validated,
    Normalized,
    Weighted,
    ReferencePointsComputed,
    DistancesComputed,
    Scored,
    Ranked,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Validated => "validated",
            Self::Normalized => "normalized",
            Self::Weighted => "weighted",
            Self::ReferencePointsComputed => "reference points computed",
            Self::DistancesComputed => "distances computed",
            Self::Scored => "scored",
            Self::Ranked => "ranked",
        };
        f.write_str(name)
    }
}

/// Raw values of validated alternatives.
#[derive(Clone, Debug, PartialEq)]
pub struct DecisionMatrix(pub(crate) Matrix);

/// Every column has unit Euclidean length.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedMatrix(pub(crate) Matrix);

/// Normalized values scaled by criterion weight.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedMatrix(pub(crate) Matrix);

macro_rules! impl_as_matrix {
    ($($stage:ident),*) => {
        $(
            impl $stage {
                pub fn as_matrix(&self) -> &Matrix {
                    &self.0
                }
            }
        )*
    };
}

impl_as_matrix!(DecisionMatrix, NormalizedMatrix, WeightedMatrix);

/// Euclidean length of `values`. Values are scaled by their largest magnitude before squaring, so
/// the result neither overflows nor underflows unless the length itself is out of range.
pub(crate) fn euclidean_length<I>(values: I) -> f64
where
    I: Iterator<Item = f64> + Clone,
{
    let scale = values.clone().fold(0.0_f64, |max, v| max.max(v.abs()));
    if scale == 0.0 {
        return 0.0;
    }
    scale * values.map(|v| (v / scale).powi(2)).sum::<f64>().sqrt()
}
