use crate::element::Element;
use crate::error::{Error, Result};
use crate::formula::Formula;
use crate::model::Model;

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

/// A finite relation: a set of `arity`-tuples.
///
/// Equality and hashing look only at the extension, not at the symbol.
#[derive(Debug, Clone)]
pub struct Relation {
    pub symbol: String,
    pub arity: usize,
    tuples: BTreeSet<Vec<Element>>,
}

impl Relation {
    /// The empty relation.
    pub fn new(symbol: impl Into<String>, arity: usize) -> Self {
        Self {
            symbol: symbol.into(),
            arity,
            tuples: BTreeSet::new(),
        }
    }

    pub fn from_tuples(
        symbol: impl Into<String>,
        arity: usize,
        tuples: impl IntoIterator<Item = Vec<Element>>,
    ) -> Result<Self> {
        let mut r = Self::new(symbol, arity);
        for t in tuples {
            r.add(t)?;
        }
        Ok(r)
    }

    /// The relation defined in `model` by `formula`, as computed by [`Formula::extension`].
    pub fn defined_by(
        symbol: impl Into<String>,
        arity: usize,
        formula: &Formula,
        model: &Model,
    ) -> Result<Self> {
        Self::from_tuples(symbol, arity, formula.extension(model, Some(arity))?)
    }

    pub fn add(&mut self, tuple: Vec<Element>) -> Result<()> {
        if tuple.len() != self.arity {
            return Err(Error::Arity {
                symbol: self.symbol.clone(),
                expected: self.arity,
                found: tuple.len(),
            });
        }
        self.tuples.insert(tuple);
        Ok(())
    }

    pub fn contains(&self, tuple: &[Element]) -> bool {
        self.tuples.contains(tuple)
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec<Element>> + Clone {
        self.tuples.iter()
    }

    /// The tuples whose every component lies in `subuniverse`.
    pub fn restrict(&self, subuniverse: &BTreeSet<Element>) -> Self {
        Self {
            symbol: self.symbol.clone(),
            arity: self.arity,
            tuples: self
                .tuples
                .iter()
                .filter(|t| t.iter().all(|e| subuniverse.contains(e)))
                .cloned()
                .collect(),
        }
    }

    // Tuples are checked on insertion, so this skips the arity check.
    pub(crate) fn from_checked(
        symbol: String,
        arity: usize,
        tuples: BTreeSet<Vec<Element>>,
    ) -> Self {
        Self {
            symbol,
            arity,
            tuples,
        }
    }
}

impl PartialEq for Relation {
    fn eq(&self, other: &Self) -> bool {
        self.tuples == other.tuples
    }
}

impl Eq for Relation {}

impl Hash for Relation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tuples.hash(state);
    }
}
