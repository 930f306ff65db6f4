use super::{DecisionMatrix, NormalizedMatrix};
use crate::{criteria::CriterionSet, Result, TopsisError};

/// Rescale every criterion column to unit Euclidean length: `value / sqrt(Σ value²)`.
///
/// Values are divided by the column's largest magnitude before the length is taken, so columns
/// of very large or very small values still normalize to unit length. A column of zeros has no
/// direction to preserve and fails with [`TopsisError::ZeroNormDivision`].
pub fn normalize(criteria: &CriterionSet<'_>, matrix: DecisionMatrix) -> Result<NormalizedMatrix> {
    let mut matrix = matrix.0;
    for column in 0..matrix.columns() {
        let scale = matrix
            .column(column)
            .fold(0.0_f64, |max, v| max.max(v.abs()));
        if scale == 0.0 {
            return Err(TopsisError::ZeroNormDivision {
                criterion: criteria.id(column).to_owned(),
            });
        }
        let length = matrix
            .column(column)
            .map(|v| (v / scale).powi(2))
            .sum::<f64>()
            .sqrt();
        matrix.update_column(column, |v| (v / scale) / length);
    }
    Ok(NormalizedMatrix(matrix))
}

#[cfg(test)]
mod test {
    use super::normalize;
    use crate::{
        test::assert_within, Alternative, AlternativeSet, Criterion, CriterionSet, Direction,
        TopsisError, WeightPolicy,
    };

    fn run(columns: &[(&str, &[f64])]) -> crate::Result<Vec<Vec<f64>>> {
        let criteria: Vec<Criterion> = columns
            .iter()
            .map(|(id, _)| Criterion::new(*id, *id, 1.0, Direction::Benefit))
            .collect();
        let rows = columns[0].1.len();
        let alternatives: Vec<Alternative> = (0..rows)
            .map(|row| {
                Alternative::with_values(
                    format!("A{row}"),
                    columns.iter().map(|(id, values)| (*id, values[row])),
                )
            })
            .collect();
        let criteria = CriterionSet::new(&criteria, WeightPolicy::Permissive)?;
        let alternatives = AlternativeSet::new(&criteria, &alternatives)?;
        let normalized = normalize(&criteria, alternatives.decision_matrix())?;
        let matrix = normalized.as_matrix();
        Ok((0..matrix.columns())
            .map(|c| matrix.column(c).collect())
            .collect())
    }

    #[test]
    fn unit_length_columns() {
        let columns = run(&[
            ("C1", &[120.0, 90.0, 150.0, 80.0]),
            ("C2", &[3.0, -4.0, 0.0, 0.0]),
        ])
        .unwrap();
        for column in &columns {
            let sum_sq: f64 = column.iter().map(|v| v * v).sum();
            assert_within(sum_sq, 1.0, 1e-12);
        }
        assert_within(columns[1][0], 0.6, 1e-15);
        assert_within(columns[1][1], -0.8, 1e-15);
        assert_eq!(columns[1][2], 0.0);
    }

    #[test]
    fn extreme_magnitudes() {
        let columns = run(&[("C1", &[1e300, 1e300]), ("C2", &[1e-300, 3e-300])]).unwrap();
        assert_within(columns[0][0], 0.5_f64.sqrt(), 1e-15);
        let sum_sq: f64 = columns[1].iter().map(|v| v * v).sum();
        assert_within(sum_sq, 1.0, 1e-12);
    }

    #[test]
    fn zero_column() {
        let err = run(&[("C1", &[1.0, 2.0]), ("C2", &[0.0, 0.0])]).unwrap_err();
        assert_eq!(
            err,
            TopsisError::ZeroNormDivision {
                criterion: "C2".to_owned()
            }
        );
    }
}
