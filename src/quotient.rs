//! Quotients of algebras by congruences.
use crate::element::Element;
use crate::error::{Error, Result};
use crate::model::{Model, Operation, Structure};
use crate::morphism::Homomorphism;
use crate::partition::Partition;

use std::collections::{BTreeMap, BTreeSet};

/// Anything that can tell whether two elements are congruent.
pub trait Congruence {
    fn related(&self, a: &Element, b: &Element) -> bool;
}

impl Congruence for Partition<Element> {
    fn related(&self, a: &Element, b: &Element) -> bool {
        Partition::related(self, a, b)
    }
}

impl<F: Fn(&Element, &Element) -> bool> Congruence for F {
    fn related(&self, a: &Element, b: &Element) -> bool {
        self(a, b)
    }
}

/// The quotient of a relation-free model by a congruence.
///
/// Each class is represented by its least element in universe order; operations apply the
/// original operation and then move the result to its representative.
#[derive(Debug, Clone)]
pub struct Quotient<'a, S: Structure + ?Sized = Model> {
    model: Model,
    supermodel: &'a S,
    representative: BTreeMap<Element, Element>,
}

impl<'a, S: Structure + ?Sized> Quotient<'a, S> {
    pub fn new<C: Congruence + ?Sized>(supermodel: &'a S, congruence: &C) -> Result<Self> {
        let source = supermodel.model();
        if !source.relations().is_empty() {
            return Err(Error::RelationalQuotient);
        }

        let mut representatives: Vec<Element> = Vec::new();
        for e in source.universe() {
            if !representatives.iter().any(|r| congruence.related(r, e)) {
                representatives.push(e.clone());
            }
        }
        let kept: BTreeSet<Element> = representatives.iter().cloned().collect();
        let representative_of = |e: &Element| -> Option<Element> {
            if kept.contains(e) {
                return Some(e.clone());
            }
            representatives
                .iter()
                .find(|r| congruence.related(e, r))
                .cloned()
        };

        let mut operations = BTreeMap::new();
        for (symbol, op) in source.operations() {
            let mut table = BTreeMap::new();
            for (args, value) in op.restrict(&kept).iter() {
                let value = representative_of(value).ok_or_else(|| Error::MissingRepresentative {
                    element: value.clone(),
                })?;
                table.insert(args.clone(), value);
            }
            operations.insert(
                symbol.clone(),
                Operation::from_checked(symbol.clone(), op.arity, table),
            );
        }

        let representative = source
            .universe()
            .iter()
            .filter_map(|e| representative_of(e).map(|r| (e.clone(), r)))
            .collect();

        Ok(Self {
            model: Model::from_parts(representatives, BTreeMap::new(), operations),
            supermodel,
            representative,
        })
    }

    pub fn supermodel(&self) -> &'a S {
        self.supermodel
    }

    /// The representative of the class of `e`.
    pub fn representative(&self, e: &Element) -> Option<&Element> {
        self.representative.get(e)
    }

    /// The surjection from the supermodel onto the quotient sending each element to its
    /// representative.
    pub fn natural_map(&self) -> Homomorphism<'_> {
        Homomorphism::new(
            self.representative
                .iter()
                .map(|(e, r)| (e.clone(), r.clone())),
            self.supermodel.model(),
            &self.model,
            self.model.signature(),
        )
    }
}

impl<S: Structure + ?Sized> Structure for Quotient<'_, S> {
    fn model(&self) -> &Model {
        &self.model
    }
}
