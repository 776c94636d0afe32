use crate::element::Element;
use crate::error::{Error, Result};
use crate::model::Relation;

use std::collections::{BTreeMap, BTreeSet};
use std::hash::{Hash, Hasher};

/// A finite operation: a map from `arity`-tuples of arguments to a value.
///
/// The map is single-valued by construction, but may be partial. Arity 0 operations are
/// constants, stored as the value of the empty tuple.
#[derive(Debug, Clone)]
pub struct Operation {
    pub symbol: String,
    pub arity: usize,
    table: BTreeMap<Vec<Element>, Element>,
}

impl Operation {
    /// The operation defined nowhere.
    pub fn new(symbol: impl Into<String>, arity: usize) -> Self {
        Self {
            symbol: symbol.into(),
            arity,
            table: BTreeMap::new(),
        }
    }

    pub fn constant(symbol: impl Into<String>, value: Element) -> Self {
        let mut op = Self::new(symbol, 0);
        op.table.insert(vec![], value);
        op
    }

    pub fn from_table(
        symbol: impl Into<String>,
        arity: usize,
        table: impl IntoIterator<Item = (Vec<Element>, Element)>,
    ) -> Result<Self> {
        let mut op = Self::new(symbol, arity);
        for (args, value) in table {
            op.insert(args, value)?;
        }
        Ok(op)
    }

    /// Add a row of the graph: every component but the last is an argument, the last is the
    /// result.
    pub fn add(&mut self, mut tuple: Vec<Element>) -> Result<()> {
        match tuple.pop() {
            Some(value) => self.insert(tuple, value),
            None => Err(Error::EmptyRow {
                symbol: self.symbol.clone(),
            }),
        }
    }

    /// Set the value at `args`, replacing any previous value.
    pub fn insert(&mut self, args: Vec<Element>, value: Element) -> Result<()> {
        if args.len() != self.arity {
            return Err(Error::Arity {
                symbol: self.symbol.clone(),
                expected: self.arity,
                found: args.len(),
            });
        }
        self.table.insert(args, value);
        Ok(())
    }

    pub fn get(&self, args: &[Element]) -> Option<&Element> {
        self.table.get(args)
    }

    /// Apply the operation, failing outside its domain.
    pub fn apply(&self, args: &[Element]) -> Result<&Element> {
        self.table
            .get(args)
            .ok_or_else(|| Error::UndefinedApplication {
                symbol: self.symbol.clone(),
                args: args.to_vec(),
            })
    }

    pub fn domain(&self) -> impl Iterator<Item = &Vec<Element>> {
        self.table.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Vec<Element>, &Element)> + Clone {
        self.table.iter()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Restrict the domain to argument tuples inside `subuniverse`.
    /// Results are kept even when they fall outside it.
    pub fn restrict(&self, subuniverse: &BTreeSet<Element>) -> Self {
        self.filtered(|args, _| args.iter().all(|e| subuniverse.contains(e)))
    }

    /// Restrict to entries whose arguments and result all lie in `subuniverse`.
    pub fn restrict_graph(&self, subuniverse: &BTreeSet<Element>) -> Self {
        self.filtered(|args, value| {
            subuniverse.contains(value) && args.iter().all(|e| subuniverse.contains(e))
        })
    }

    fn filtered(&self, keep: impl Fn(&[Element], &Element) -> bool) -> Self {
        Self {
            symbol: self.symbol.clone(),
            arity: self.arity,
            table: self
                .table
                .iter()
                .filter(|(args, value)| keep(args.as_slice(), *value))
                .map(|(args, value)| (args.clone(), value.clone()))
                .collect(),
        }
    }

    /// The graph `{(args.., f(args..))}` as a relation of arity `arity + 1`.
    pub fn graph_rel(&self) -> Relation {
        let tuples = self
            .table
            .iter()
            .map(|(args, value)| {
                let mut row = args.clone();
                row.push(value.clone());
                row
            })
            .collect();
        Relation::from_checked(format!("g{}", self.symbol), self.arity + 1, tuples)
    }

    // Rows are checked by the caller.
    pub(crate) fn from_checked(
        symbol: String,
        arity: usize,
        table: BTreeMap<Vec<Element>, Element>,
    ) -> Self {
        Self {
            symbol,
            arity,
            table,
        }
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
    }
}

impl Eq for Operation {}

impl Hash for Operation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
    }
}
