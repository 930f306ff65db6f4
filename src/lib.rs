pub mod alternatives;
pub mod config;
pub mod criteria;
pub mod error;
pub mod matrix;
pub mod num;
pub mod pipeline;
pub mod sink;

use serde::Serialize;

pub use crate::alternatives::{Alternative, AlternativeSet};
pub use crate::config::{Config, WeightPolicy, DEFAULT_TIE_EPSILON};
pub use crate::criteria::{Criterion, CriterionSet, Direction};
pub use crate::error::{Input, Result, TopsisError};
pub use crate::num::{Normalized, Weight};
pub use crate::pipeline::Stage;
pub use crate::sink::{LogSink, NoopSink, TracingSink};

/// One alternative's position in a [`Ranking`] with the metrics that produced it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedAlternative {
    /// 1-based position in the ranking. Tied alternatives still get distinct ranks, in input order.
    pub rank: usize,
    pub name: String,
    /// Position of the alternative in the engine's input.
    pub index: usize,
    /// Closeness coefficient.
    pub score: Normalized,
    pub distance_to_ideal: f64,
    pub distance_to_anti_ideal: f64,
}

/// Ideal and anti-ideal weighted values for one criterion.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReferencePoint {
    pub criterion: String,
    pub ideal: f64,
    pub anti_ideal: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ranking {
    /// Best first.
    pub alternatives: Vec<RankedAlternative>,
    /// In criterion input order.
    pub reference_points: Vec<ReferencePoint>,
}

impl Ranking {
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.alternatives.first()
    }

    pub fn get(&self, name: &str) -> Option<&RankedAlternative> {
        self.alternatives.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedAlternative> {
        self.alternatives.iter()
    }
}

/// Ranks alternatives against weighted criteria with TOPSIS.
///
/// Inputs are validated when [`DecisionEngine::run`] is called, not at construction. A run never
/// modifies the engine or its inputs and returns fresh [`Ranking`] records, so one engine may be
/// run any number of times, from any number of threads, with identical results.
pub struct DecisionEngine<S = NoopSink> {
    criteria: Vec<Criterion>,
    alternatives: Vec<Alternative>,
    config: Config,
    sink: S,
}

impl DecisionEngine {
    pub fn new(criteria: Vec<Criterion>, alternatives: Vec<Alternative>) -> Self {
        Self {
            criteria,
            alternatives,
            config: Config::default(),
            sink: NoopSink,
        }
    }
}

impl<S: LogSink> DecisionEngine<S> {
    pub fn with_config(self, config: Config) -> Self {
        Self { config, ..self }
    }

    pub fn with_sink<T: LogSink>(self, sink: T) -> DecisionEngine<T> {
        DecisionEngine {
            criteria: self.criteria,
            alternatives: self.alternatives,
            config: self.config,
            sink,
        }
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate the inputs, then normalize, weight, find the reference points, measure distances,
    /// score, and rank.
    ///
    /// All structural errors are reported before any numeric work starts. Numeric errors
    /// ([`TopsisError::is_numeric`]) abort the run as a whole; no partial ranking is returned.
    pub fn run(&self) -> Result<Ranking> {
        let criteria = CriterionSet::new(&self.criteria, self.config.weight_policy)?;
        let alternatives = AlternativeSet::new(&criteria, &self.alternatives)?;
        self.enter(
            Stage::Validated,
            format_args!(
                "{} criteria, {} alternatives",
                criteria.len(),
                alternatives.len()
            ),
        );

        let normalized = pipeline::normalize(&criteria, alternatives.decision_matrix())?;
        self.enter(Stage::Normalized, format_args!("columns have unit length"));

        let weighted = pipeline::apply_weights(&criteria, normalized);
        self.enter(Stage::Weighted, format_args!("weights applied"));

        let reference = pipeline::reference_points(&criteria, &weighted);
        self.enter(
            Stage::ReferencePointsComputed,
            format_args!(
                "ideal {:?}, anti-ideal {:?}",
                reference.ideal, reference.anti_ideal
            ),
        );

        let distances = pipeline::distances(&weighted, &reference);
        self.enter(
            Stage::DistancesComputed,
            format_args!("{} distance pairs", distances.len()),
        );

        let scores = pipeline::closeness(&alternatives, &distances)?;
        self.enter(Stage::Scored, format_args!("{scores:?}"));

        let order = pipeline::ranking_order(&scores, self.config.tie_epsilon);
        let ranked: Vec<RankedAlternative> = order
            .into_iter()
            .enumerate()
            .map(|(position, row)| RankedAlternative {
                rank: position + 1,
                name: alternatives.name(row).to_owned(),
                index: row,
                score: scores[row],
                distance_to_ideal: distances[row].to_ideal,
                distance_to_anti_ideal: distances[row].to_anti_ideal,
            })
            .collect();
        if let Some(best) = ranked.first() {
            self.enter(
                Stage::Ranked,
                format_args!("best {:?} with score {}", best.name, best.score),
            );
        }

        let reference_points = criteria
            .iter()
            .zip(reference.ideal.iter().zip(&reference.anti_ideal))
            .map(|(criterion, (&ideal, &anti_ideal))| ReferencePoint {
                criterion: criterion.id.clone(),
                ideal,
                anti_ideal,
            })
            .collect();
        Ok(Ranking {
            alternatives: ranked,
            reference_points,
        })
    }

    fn enter(&self, stage: Stage, detail: std::fmt::Arguments<'_>) {
        self.sink.log(&format!("{stage}: {detail}"));
    }
}
