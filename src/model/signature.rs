use crate::error::{Error, Result};

use std::collections::BTreeMap;

/// Operation and relation symbols with their arities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Signature {
    pub operations: BTreeMap<String, usize>,
    pub relations: BTreeMap<String, usize>,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operation(mut self, symbol: impl Into<String>, arity: usize) -> Self {
        self.operations.insert(symbol.into(), arity);
        self
    }

    pub fn with_relation(mut self, symbol: impl Into<String>, arity: usize) -> Self {
        self.relations.insert(symbol.into(), arity);
        self
    }

    /// The first symbol (operations before relations, then alphabetically) on which `self` and
    /// `other` disagree, either by arity or by presence.
    pub fn mismatch<'s>(&'s self, other: &'s Self) -> Option<&'s str> {
        fn first<'a>(
            a: &'a BTreeMap<String, usize>,
            b: &'a BTreeMap<String, usize>,
        ) -> Option<&'a str> {
            a.keys()
                .chain(b.keys())
                .filter(|s| a.get(*s) != b.get(*s))
                .min()
                .map(String::as_str)
        }
        first(&self.operations, &other.operations)
            .or_else(|| first(&self.relations, &other.relations))
    }

    pub fn check_compatible(&self, other: &Self) -> Result<()> {
        match self.mismatch(other) {
            None => Ok(()),
            Some(symbol) => Err(Error::SignatureMismatch {
                symbol: symbol.to_string(),
            }),
        }
    }
}
