use std::collections::{BTreeMap, BTreeSet};

use crate::{
    criteria::CriterionSet, matrix::Matrix, pipeline::DecisionMatrix, Input, Result, TopsisError,
};

/// A candidate to be ranked, with one raw value per criterion id.
#[derive(Clone, Debug, PartialEq)]
pub struct Alternative {
    pub name: String,
    pub values: BTreeMap<String, f64>,
}

impl Alternative {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, criterion: impl Into<String>, value: f64) -> Self {
        self.values.insert(criterion.into(), value);
        self
    }

    pub fn with_values<K, V>(name: impl Into<String>, values: V) -> Self
    where
        K: Into<String>,
        V: IntoIterator<Item = (K, f64)>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Alternatives validated against a [`CriterionSet`]: names are unique, and every alternative
/// has a finite value for exactly the criterion ids of the set.
#[derive(Debug)]
pub struct AlternativeSet<'a> {
    names: Vec<&'a str>,
    matrix: Matrix,
}

impl<'a> AlternativeSet<'a> {
    pub fn new(criteria: &CriterionSet<'_>, alternatives: &'a [Alternative]) -> Result<Self> {
        if alternatives.is_empty() {
            return Err(TopsisError::EmptyInput(Input::Alternatives));
        }
        let mut names = Vec::with_capacity(alternatives.len());
        let mut seen = BTreeSet::new();
        let mut matrix = Matrix::with_capacity(alternatives.len(), criteria.len());
        for alternative in alternatives {
            if !seen.insert(alternative.name.as_str()) {
                return Err(TopsisError::DuplicateAlternative {
                    alternative: alternative.name.clone(),
                });
            }
            if let Some(unknown) = alternative
                .values
                .keys()
                .find(|id| criteria.position(id).is_none())
            {
                return Err(TopsisError::UnknownCriterion {
                    alternative: alternative.name.clone(),
                    criterion: unknown.clone(),
                });
            }
            let mut row = Vec::with_capacity(criteria.len());
            for criterion in criteria.iter() {
                let value = *alternative.values.get(&criterion.id).ok_or_else(|| {
                    TopsisError::MissingValue {
                        alternative: alternative.name.clone(),
                        criterion: criterion.id.clone(),
                    }
                })?;
                if !value.is_finite() {
                    return Err(TopsisError::NonFiniteValue {
                        alternative: alternative.name.clone(),
                        criterion: criterion.id.clone(),
                        value,
                    });
                }
                row.push(value);
            }
            matrix.push_row(row);
            names.push(alternative.name.as_str());
        }
        Ok(Self { names, matrix })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, row: usize) -> &'a str {
        self.names[row]
    }

    /// Raw values, one row per alternative in input order.
    pub fn decision_matrix(&self) -> DecisionMatrix {
        DecisionMatrix(self.matrix.clone())
    }
}
