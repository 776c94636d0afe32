//! Direct products of models sharing a signature.
use crate::element::Element;
use crate::error::{Error, Result};
use crate::model::{Model, Operation, Relation, Structure};
use crate::morphism::Homomorphism;

use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

/// A factor of a product. Products given as factors contribute their own factors, so a
/// product of products is flat.
#[derive(Debug, Clone)]
pub enum Factor {
    Model(Model),
    Product(Product),
}

impl From<Model> for Factor {
    fn from(model: Model) -> Self {
        Factor::Model(model)
    }
}

impl From<Product> for Factor {
    fn from(product: Product) -> Self {
        Factor::Product(product)
    }
}

/// The direct product of a non-empty list of models.
///
/// The universe is the set of tuples with one coordinate per factor; operations and relations
/// act coordinate-wise.
#[derive(Debug, Clone)]
pub struct Product {
    model: Model,
    factors: Vec<Model>,
}

impl Product {
    pub fn new<F: Into<Factor>>(factors: impl IntoIterator<Item = F>) -> Result<Self> {
        let mut flat = Vec::new();
        for factor in factors {
            match factor.into() {
                Factor::Model(m) => flat.push(m),
                Factor::Product(p) => flat.extend(p.factors),
            }
        }

        let signature = flat.first().ok_or(Error::EmptyProduct)?.signature();
        for f in &flat[1..] {
            signature.check_compatible(&f.signature())?;
        }

        let universe = flat
            .iter()
            .map(|f| f.universe().iter().cloned())
            .multi_cartesian_product()
            .map(Element::Tuple);

        let operations = signature
            .operations
            .iter()
            .map(|(symbol, &arity)| {
                let coordinates: Vec<&Operation> =
                    flat.iter().filter_map(|f| f.operation(symbol)).collect();
                (
                    symbol.clone(),
                    product_operation(symbol, arity, &coordinates),
                )
            })
            .collect();

        let relations = signature
            .relations
            .iter()
            .map(|(symbol, &arity)| {
                let coordinates: Vec<&Relation> =
                    flat.iter().filter_map(|f| f.relation(symbol)).collect();
                (
                    symbol.clone(),
                    product_relation(symbol, arity, &coordinates),
                )
            })
            .collect();

        Ok(Self {
            model: Model::from_parts(universe, relations, operations),
            factors: flat,
        })
    }

    /// `model × model × … × model`, `n` times.
    pub fn power(model: &Model, n: usize) -> Result<Self> {
        Self::new(std::iter::repeat(model.clone()).take(n))
    }

    pub fn factors(&self) -> &[Model] {
        &self.factors
    }

    pub fn factor(&self, i: usize) -> Option<&Model> {
        self.factors.get(i)
    }

    pub fn indices(&self) -> Range<usize> {
        0..self.factors.len()
    }

    /// The surjective homomorphism onto factor `i`, sending each tuple to its `i`-th
    /// coordinate.
    pub fn projection(&self, i: usize) -> Result<Homomorphism<'_>> {
        let factor = self.factor(i).ok_or(Error::FactorIndex {
            index: i,
            factors: self.factors.len(),
        })?;
        let values = self
            .model
            .universe()
            .iter()
            .filter_map(|x| x.coordinate(i).map(|y| (x.clone(), y.clone())));
        Ok(Homomorphism::new(
            values,
            &self.model,
            factor,
            self.model.signature(),
        ))
    }
}

impl Structure for Product {
    fn model(&self) -> &Model {
        &self.model
    }

    fn as_product(&self) -> Option<&Product> {
        Some(self)
    }
}

// Pick one entry of every coordinate's table; column `j` of the choice is the `j`-th
// argument of the product entry. Constants fall out as the one choice of empty rows.
fn product_operation(symbol: &str, arity: usize, coordinates: &[&Operation]) -> Operation {
    let table: BTreeMap<Vec<Element>, Element> = coordinates
        .iter()
        .map(|op| op.iter())
        .multi_cartesian_product()
        .map(|rows| {
            let args = (0..arity)
                .map(|j| Element::tuple(rows.iter().map(|(args, _)| args[j].clone())))
                .collect();
            let value = Element::tuple(rows.iter().map(|(_, value)| (*value).clone()));
            (args, value)
        })
        .collect();
    Operation::from_checked(symbol.to_string(), arity, table)
}

fn product_relation(symbol: &str, arity: usize, coordinates: &[&Relation]) -> Relation {
    let tuples: BTreeSet<Vec<Element>> = coordinates
        .iter()
        .map(|rel| rel.iter())
        .multi_cartesian_product()
        .map(|rows| {
            (0..arity)
                .map(|j| Element::tuple(rows.iter().map(|row| row[j].clone())))
                .collect()
        })
        .collect();
    Relation::from_checked(symbol.to_string(), arity, tuples)
}
