//! Finite models: a universe with named relations and operations.
mod operation;
mod relation;
mod signature;

pub use operation::*;
pub use relation::*;
pub use signature::*;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::partition::Partition;
use crate::product::Product;

use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// A finite model of a first-order signature.
///
/// The universe is kept sorted and free of duplicates; every relation tuple and every operation
/// entry (arguments and result) lies inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    universe: Vec<Element>,
    relations: BTreeMap<String, Relation>,
    operations: BTreeMap<String, Operation>,
}

/// Anything that is, or wraps, a [`Model`]: the base model itself and every derived
/// construction. Submodels and quotients are generic over their supermodel through this trait.
pub trait Structure {
    fn model(&self) -> &Model;

    /// `Some` exactly when the structure is a direct product.
    fn as_product(&self) -> Option<&Product> {
        None
    }
}

impl Structure for Model {
    fn model(&self) -> &Model {
        self
    }
}

impl Model {
    /// Construct a model, checking that relations and operations stay inside `universe`.
    /// Relations and operations are keyed by their symbols.
    pub fn new(
        universe: impl IntoIterator<Item = Element>,
        relations: impl IntoIterator<Item = Relation>,
        operations: impl IntoIterator<Item = Operation>,
    ) -> Result<Self> {
        let model = Self::from_parts(
            universe,
            relations
                .into_iter()
                .map(|r| (r.symbol.clone(), r))
                .collect(),
            operations
                .into_iter()
                .map(|o| (o.symbol.clone(), o))
                .collect(),
        );
        model.validate()?;
        Ok(model)
    }

    pub(crate) fn from_parts(
        universe: impl IntoIterator<Item = Element>,
        relations: BTreeMap<String, Relation>,
        operations: BTreeMap<String, Operation>,
    ) -> Self {
        let universe: BTreeSet<Element> = universe.into_iter().collect();
        Self {
            universe: universe.into_iter().collect(),
            relations,
            operations,
        }
    }

    fn validate(&self) -> Result<()> {
        let outside = |symbol: &str, e: &Element| Error::OutsideUniverse {
            symbol: symbol.to_string(),
            element: e.clone(),
        };
        for r in self.relations.values() {
            if let Some(e) = r.iter().flatten().find(|e| !self.contains(e)) {
                return Err(outside(&r.symbol, e));
            }
        }
        for o in self.operations.values() {
            for (args, value) in o.iter() {
                if let Some(e) = args.iter().chain([value]).find(|e| !self.contains(e)) {
                    return Err(outside(&o.symbol, e));
                }
            }
        }
        Ok(())
    }

    pub fn universe(&self) -> &[Element] {
        &self.universe
    }

    pub fn len(&self) -> usize {
        self.universe.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universe.is_empty()
    }

    pub fn contains(&self, e: &Element) -> bool {
        self.universe.binary_search(e).is_ok()
    }

    pub fn relations(&self) -> &BTreeMap<String, Relation> {
        &self.relations
    }

    pub fn operations(&self) -> &BTreeMap<String, Operation> {
        &self.operations
    }

    pub fn relation(&self, symbol: &str) -> Option<&Relation> {
        self.relations.get(symbol)
    }

    pub fn operation(&self, symbol: &str) -> Option<&Operation> {
        self.operations.get(symbol)
    }

    pub fn signature(&self) -> Signature {
        Signature {
            operations: self
                .operations
                .iter()
                .map(|(s, o)| (s.clone(), o.arity))
                .collect(),
            relations: self
                .relations
                .iter()
                .map(|(s, r)| (s.clone(), r.arity))
                .collect(),
        }
    }

    /// Apply the operation named `symbol`.
    pub fn apply(&self, symbol: &str, args: &[Element]) -> Result<Element> {
        self.operation(symbol)
            .ok_or_else(|| Error::UnknownOperation(symbol.to_string()))?
            .apply(args)
            .cloned()
    }

    /// The model on `subuniverse`, keeping only relation tuples and operation entries that lie
    /// entirely inside it. Elements of `subuniverse` outside the universe are dropped.
    pub fn restrict(&self, subuniverse: impl IntoIterator<Item = Element>) -> Model {
        let subuniverse: BTreeSet<Element> = subuniverse
            .into_iter()
            .filter(|e| self.contains(e))
            .collect();
        let relations = self
            .relations
            .iter()
            .map(|(s, r)| (s.clone(), r.restrict(&subuniverse)))
            .collect();
        let operations = self
            .operations
            .iter()
            .map(|(s, o)| (s.clone(), o.restrict_graph(&subuniverse)))
            .collect();
        Self::from_parts(subuniverse, relations, operations)
    }

    /// The substructure generated by `generators`: the smallest subuniverse containing them
    /// that is closed under every operation (constants included).
    pub fn substructure(&self, generators: impl IntoIterator<Item = Element>) -> Result<Model> {
        let mut universe: BTreeSet<Element> = BTreeSet::new();
        let mut news: BTreeSet<Element> = generators.into_iter().collect();
        if let Some(e) = news.iter().find(|e| !self.contains(e)) {
            return Err(Error::OutsideUniverse {
                symbol: "generators".to_string(),
                element: e.clone(),
            });
        }
        let mut round = 0;

        loop {
            let mut local_news: BTreeSet<Element> = BTreeSet::new();
            let known: Vec<Element> = universe.union(&news).cloned().collect();
            for op in self.operations.values() {
                if op.arity == 0 {
                    if round == 0 {
                        local_news.insert(op.apply(&[])?.clone());
                    }
                    continue;
                }
                for args in itertools::repeat_n(known.iter().cloned(), op.arity)
                    .multi_cartesian_product()
                {
                    // only tuples touching something new can produce something new
                    if args.iter().any(|e| news.contains(e)) {
                        local_news.insert(op.apply(&args)?.clone());
                    }
                }
            }

            universe.append(&mut news);
            news = local_news
                .into_iter()
                .filter(|e| !universe.contains(e))
                .collect();
            round += 1;
            debug!(
                round,
                closed = universe.len(),
                new = news.len(),
                "closure round"
            );

            if news.is_empty() {
                break;
            }
        }

        Ok(self.restrict(universe))
    }

    /// Whether `partition` is compatible with every operation: related arguments give related
    /// results. Elements unseen by `partition` count as singletons.
    pub fn is_congruence(&self, partition: &Partition<Element>) -> bool {
        self.operations.values().all(|op| {
            let mut value_of: HashMap<Vec<&Element>, &Element> = HashMap::new();
            op.iter().all(|(args, value)| {
                let key: Vec<&Element> = args.iter().map(|e| class_of(partition, e)).collect();
                let value = class_of(partition, value);
                *value_of.entry(key).or_insert(value) == value
            })
        })
    }

    /// The smallest congruence relating each of `pairs`: the congruence closure of the pairs
    /// under every operation.
    pub fn congruence_generated_by(
        &self,
        pairs: impl IntoIterator<Item = (Element, Element)>,
    ) -> Partition<Element> {
        let mut theta = Partition::discrete(self.universe.iter().cloned());
        for (a, b) in pairs {
            theta.join_blocks(&a, &b);
        }

        loop {
            let mut pending = Vec::new();
            for op in self.operations.values() {
                let mut value_of: HashMap<Vec<Element>, Element> = HashMap::new();
                for (args, value) in op.iter() {
                    let key: Vec<Element> = args.iter().map(|e| theta.root(e)).collect();
                    let value = theta.root(value);
                    match value_of.get(&key) {
                        Some(other) if *other != value => pending.push((other.clone(), value)),
                        Some(_) => {}
                        None => {
                            value_of.insert(key, value);
                        }
                    }
                }
            }
            if pending.is_empty() {
                return theta;
            }
            for (a, b) in pending {
                theta.join_blocks(&a, &b);
            }
        }
    }
}

fn class_of<'a>(partition: &'a Partition<Element>, e: &'a Element) -> &'a Element {
    partition.representative(e).unwrap_or(e)
}
