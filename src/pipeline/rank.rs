use super::Distances;
use crate::{alternatives::AlternativeSet, Normalized, Result, TopsisError};

/// Closeness coefficient of every alternative: `d- / (d+ + d-)`.
///
/// An alternative at distance 0 from both reference points (a single alternative, or alternatives
/// identical on every criterion) has no defined score and fails the whole computation with
/// [`TopsisError::DegenerateScore`]. Distances beyond the range of `f64` fail with
/// [`TopsisError::NonFiniteDistance`].
pub fn closeness(
    alternatives: &AlternativeSet<'_>,
    distances: &[Distances],
) -> Result<Vec<Normalized>> {
    distances
        .iter()
        .enumerate()
        .map(|(row, d)| {
            let alternative = || alternatives.name(row).to_owned();
            let total = d.to_ideal + d.to_anti_ideal;
            if !total.is_finite() {
                return Err(TopsisError::NonFiniteDistance {
                    alternative: alternative(),
                });
            }
            (total > 0.0)
                .then(|| d.to_anti_ideal / total)
                .and_then(Normalized::new)
                .ok_or_else(|| TopsisError::DegenerateScore {
                    alternative: alternative(),
                })
        })
        .collect()
}

/// Return row indices ordered by descending score.
///
/// Scores within `tie_epsilon` of each other are tied, and tied alternatives keep their input
/// order. After sorting by score, each tier starts at its highest score and holds every following
/// score within `tie_epsilon` of it, so no two members of a tier differ by more than
/// `tie_epsilon`. Rows inside a tier are ordered by index. The final order is a total order on
/// `(tier, index)`, so it does not depend on sort stability.
///
/// A negative or NaN `tie_epsilon` is treated as 0.
pub fn ranking_order(scores: &[Normalized], tie_epsilon: f64) -> Vec<usize> {
    let tie_epsilon = if tie_epsilon >= 0.0 { tie_epsilon } else { 0.0 };
    let rows: Vec<usize> = (0..scores.len()).collect();
    let by_score = permutation::sort_by(&rows[..], |a: &usize, b: &usize| {
        scores[*b].cmp(&scores[*a]).then(a.cmp(b))
    });
    let by_score = by_score.apply_slice(&rows[..]);

    let Some(&first) = by_score.first() else {
        return Vec::new();
    };
    let mut tiers = vec![0_usize; scores.len()];
    let (mut head, mut tier) = (first, 0);
    for &row in &by_score {
        if scores[head].as_f64() - scores[row].as_f64() > tie_epsilon {
            head = row;
            tier += 1;
        }
        tiers[row] = tier;
    }

    let order = permutation::sort_by_key(&rows[..], |row: &usize| (tiers[*row], *row));
    order.apply_slice(&rows[..])
}

#[cfg(test)]
mod test {
    use super::{closeness, ranking_order};
    use crate::{
        pipeline::Distances, Alternative, AlternativeSet, Criterion, CriterionSet, Direction,
        Normalized, TopsisError, WeightPolicy,
    };

    fn scores(values: &[f64]) -> Vec<Normalized> {
        values.iter().map(|v| Normalized::new(*v).unwrap()).collect()
    }

    #[test]
    fn closeness_coefficient() {
        let criteria = [Criterion::new("C1", "C1", 1.0, Direction::Benefit)];
        let alternatives = [
            Alternative::with_values("A", [("C1", 1.0)]),
            Alternative::with_values("B", [("C1", 2.0)]),
            Alternative::with_values("C", [("C1", 3.0)]),
        ];
        let criteria = CriterionSet::new(&criteria, WeightPolicy::Permissive).unwrap();
        let alternatives = AlternativeSet::new(&criteria, &alternatives).unwrap();
        let distances = [
            Distances {
                to_ideal: 0.0,
                to_anti_ideal: 2.0,
            },
            Distances {
                to_ideal: 1.0,
                to_anti_ideal: 3.0,
            },
            Distances {
                to_ideal: 2.0,
                to_anti_ideal: 0.0,
            },
        ];
        let result = closeness(&alternatives, &distances).unwrap();
        assert_eq!(result, scores(&[1.0, 0.75, 0.0]));

        let degenerate = [distances[0], distances[1], Distances {
            to_ideal: 0.0,
            to_anti_ideal: 0.0,
        }];
        let err = closeness(&alternatives, &degenerate).unwrap_err();
        assert_eq!(
            err,
            TopsisError::DegenerateScore {
                alternative: "C".to_owned()
            }
        );

        for to_ideal in [f64::INFINITY, f64::NAN] {
            let out_of_range = [distances[0], Distances {
                to_ideal,
                to_anti_ideal: 1.0,
            }, distances[2]];
            let err = closeness(&alternatives, &out_of_range).unwrap_err();
            assert_eq!(
                err,
                TopsisError::NonFiniteDistance {
                    alternative: "B".to_owned()
                }
            );
        }
    }

    #[test]
    fn descending_order() {
        let order = ranking_order(&scores(&[0.2, 0.9, 0.5, 0.1]), 1e-9);
        assert_eq!(order, vec![1, 2, 0, 3]);
    }

    #[test]
    fn ties_keep_input_order() {
        let order = ranking_order(&scores(&[0.5, 0.7, 0.5, 0.7]), 1e-9);
        assert_eq!(order, vec![1, 3, 0, 2]);

        // Within epsilon counts as tied even when the later row scores slightly higher.
        let order = ranking_order(&scores(&[0.5, 0.5 + 1e-12, 0.4]), 1e-9);
        assert_eq!(order, vec![0, 1, 2]);
        let order = ranking_order(&scores(&[0.5, 0.5 + 1e-6, 0.4]), 1e-9);
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn tiers_span_at_most_epsilon() {
        // 0.5 is within epsilon of 0.5 + 1e-9 but not of the tier's highest score 0.5 + 2e-9.
        let order = ranking_order(&scores(&[0.5 + 2e-9, 0.3, 0.5, 0.5 + 1e-9]), 1.5e-9);
        assert_eq!(order, vec![0, 3, 2, 1]);

        let spaced: Vec<f64> = (0..5).map(|i| 0.5 + i as f64 * 0.9e-9).collect();
        let order = ranking_order(&scores(&spaced), 1e-9);
        assert_eq!(order, vec![3, 4, 1, 2, 0]);
    }

    #[test]
    fn exact_ties_only() {
        for tie_epsilon in [0.0, -1.0, f64::NAN] {
            let order = ranking_order(&scores(&[0.5, 0.5 + 1e-12, 0.5]), tie_epsilon);
            assert_eq!(order, vec![1, 0, 2]);
        }
    }

    #[test]
    fn empty() {
        assert!(ranking_order(&[], 1e-9).is_empty());
    }
}
