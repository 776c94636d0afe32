//! First-order terms and formulas, interpreted in finite models.
//!
//! Formulas only *interpret* a model; nothing here constructs or mutates one.
use crate::element::Element;
use crate::error::{Error, Result};
use crate::model::Model;

use itertools::Itertools;
use std::collections::{BTreeSet, HashMap};
use std::ops::{BitAnd, BitOr, Not};

/// An assignment of universe elements to variable names.
pub type Assignment = HashMap<String, Element>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Var(String),
    Apply { symbol: String, args: Vec<Term> },
}

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Term::Var(name.into())
    }

    pub fn apply(symbol: impl Into<String>, args: Vec<Term>) -> Self {
        Term::Apply {
            symbol: symbol.into(),
            args,
        }
    }

    pub fn constant(symbol: impl Into<String>) -> Self {
        Self::apply(symbol, vec![])
    }

    pub fn free_vars(&self) -> BTreeSet<String> {
        match self {
            Term::Var(x) => BTreeSet::from([x.clone()]),
            Term::Apply { args, .. } => args.iter().flat_map(Term::free_vars).collect(),
        }
    }

    pub fn evaluate(&self, model: &Model, assignment: &Assignment) -> Result<Element> {
        match self {
            Term::Var(x) => assignment
                .get(x)
                .cloned()
                .ok_or_else(|| Error::FreeVariable(x.clone())),
            Term::Apply { symbol, args } => {
                let args = args
                    .iter()
                    .map(|t| t.evaluate(model, assignment))
                    .collect::<Result<Vec<_>>>()?;
                model.apply(symbol, &args)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    True,
    False,
    Relation { symbol: String, args: Vec<Term> },
    Equal(Term, Term),
    Not(Box<Formula>),
    And(Vec<Formula>),
    Or(Vec<Formula>),
    Forall(String, Box<Formula>),
    Exists(String, Box<Formula>),
}

impl Formula {
    pub fn relation(symbol: impl Into<String>, args: Vec<Term>) -> Self {
        Formula::Relation {
            symbol: symbol.into(),
            args,
        }
    }

    pub fn equal(lhs: Term, rhs: Term) -> Self {
        Formula::Equal(lhs, rhs)
    }

    pub fn forall(x: impl Into<String>, body: Formula) -> Self {
        Formula::Forall(x.into(), Box::new(body))
    }

    pub fn exists(x: impl Into<String>, body: Formula) -> Self {
        Formula::Exists(x.into(), Box::new(body))
    }

    pub fn free_vars(&self) -> BTreeSet<String> {
        match self {
            Formula::True | Formula::False => BTreeSet::new(),
            Formula::Relation { args, .. } => args.iter().flat_map(Term::free_vars).collect(),
            Formula::Equal(l, r) => l.free_vars().union(&r.free_vars()).cloned().collect(),
            Formula::Not(f) => f.free_vars(),
            Formula::And(fs) | Formula::Or(fs) => fs.iter().flat_map(Formula::free_vars).collect(),
            Formula::Forall(x, f) | Formula::Exists(x, f) => {
                let mut vars = f.free_vars();
                vars.remove(x);
                vars
            }
        }
    }

    /// Whether `model` satisfies the formula under `assignment`. Quantifiers range over the
    /// universe.
    pub fn satisfy(&self, model: &Model, assignment: &Assignment) -> Result<bool> {
        match self {
            Formula::True => Ok(true),
            Formula::False => Ok(false),
            Formula::Relation { symbol, args } => {
                let relation = model
                    .relation(symbol)
                    .ok_or_else(|| Error::UnknownRelation(symbol.clone()))?;
                let args = args
                    .iter()
                    .map(|t| t.evaluate(model, assignment))
                    .collect::<Result<Vec<_>>>()?;
                Ok(relation.contains(&args))
            }
            Formula::Equal(l, r) => {
                Ok(l.evaluate(model, assignment)? == r.evaluate(model, assignment)?)
            }
            Formula::Not(f) => Ok(!f.satisfy(model, assignment)?),
            Formula::And(fs) => {
                for f in fs {
                    if !f.satisfy(model, assignment)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Formula::Or(fs) => {
                for f in fs {
                    if f.satisfy(model, assignment)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Formula::Forall(x, f) => {
                let mut assignment = assignment.clone();
                for e in model.universe() {
                    assignment.insert(x.clone(), e.clone());
                    if !f.satisfy(model, &assignment)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Formula::Exists(x, f) => {
                let mut assignment = assignment.clone();
                for e in model.universe() {
                    assignment.insert(x.clone(), e.clone());
                    if f.satisfy(model, &assignment)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }

    /// The tuples satisfying the formula, with free variables in alphabetical order.
    ///
    /// When `arity` exceeds the number of free variables, every satisfying tuple is padded with
    /// every possible suffix of universe elements.
    pub fn extension(&self, model: &Model, arity: Option<usize>) -> Result<BTreeSet<Vec<Element>>> {
        let vars: Vec<String> = self.free_vars().into_iter().collect();
        let mut result = BTreeSet::new();
        for t in tuples(model, vars.len()) {
            let assignment: Assignment = vars.iter().cloned().zip(t.iter().cloned()).collect();
            if !self.satisfy(model, &assignment)? {
                continue;
            }
            match arity {
                Some(n) if n > vars.len() => {
                    for suffix in tuples(model, n - vars.len()) {
                        result.insert(t.iter().chain(&suffix).cloned().collect());
                    }
                }
                _ => {
                    result.insert(t);
                }
            }
        }
        Ok(result)
    }
}

// All `n`-tuples over the universe; the empty tuple when `n == 0`.
fn tuples(model: &Model, n: usize) -> Vec<Vec<Element>> {
    if n == 0 {
        return vec![vec![]];
    }
    itertools::repeat_n(model.universe().iter().cloned(), n)
        .multi_cartesian_product()
        .collect()
}

impl BitAnd for Formula {
    type Output = Formula;

    fn bitand(self, other: Formula) -> Formula {
        match (self, other) {
            (Formula::True, f) | (f, Formula::True) => f,
            (Formula::False, _) | (_, Formula::False) => Formula::False,
            (f, g) if f == !g.clone() => Formula::False,
            (Formula::And(mut fs), Formula::And(gs)) => {
                fs.extend(gs);
                Formula::And(fs)
            }
            (Formula::And(mut fs), g) => {
                fs.push(g);
                Formula::And(fs)
            }
            (f, Formula::And(mut gs)) => {
                gs.insert(0, f);
                Formula::And(gs)
            }
            (f, g) => Formula::And(vec![f, g]),
        }
    }
}

impl BitOr for Formula {
    type Output = Formula;

    fn bitor(self, other: Formula) -> Formula {
        match (self, other) {
            (Formula::False, f) | (f, Formula::False) => f,
            (Formula::True, _) | (_, Formula::True) => Formula::True,
            (f, g) if f == !g.clone() => Formula::True,
            (Formula::Or(mut fs), Formula::Or(gs)) => {
                fs.extend(gs);
                Formula::Or(fs)
            }
            (Formula::Or(mut fs), g) => {
                fs.push(g);
                Formula::Or(fs)
            }
            (f, Formula::Or(mut gs)) => {
                gs.insert(0, f);
                Formula::Or(gs)
            }
            (f, g) => Formula::Or(vec![f, g]),
        }
    }
}

impl Not for Formula {
    type Output = Formula;

    fn not(self) -> Formula {
        match self {
            Formula::True => Formula::False,
            Formula::False => Formula::True,
            Formula::Not(f) => *f,
            f => Formula::Not(Box::new(f)),
        }
    }
}
