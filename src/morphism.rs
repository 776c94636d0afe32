//! Structure-preserving maps between models.
//!
//! All maps are finite tables and may be partial: applying a map outside its domain yields
//! `None` rather than an error.
use crate::element::Element;
use crate::model::{Model, Signature};
use crate::partition::Partition;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::Deref;

/// What a map claims to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapKind {
    Homomorphism,
    /// The inclusion of a submodel into its supermodel.
    Embedding,
    Isomorphism,
    Automorphism,
}

/// A possibly partial map `source → target` claiming to respect the signature `subtype`.
#[derive(Debug, Clone)]
pub struct Homomorphism<'a> {
    values: BTreeMap<Element, Element>,
    source: &'a Model,
    target: &'a Model,
    subtype: Signature,
    kind: MapKind,
}

impl<'a> Homomorphism<'a> {
    pub fn new(
        values: impl IntoIterator<Item = (Element, Element)>,
        source: &'a Model,
        target: &'a Model,
        subtype: Signature,
    ) -> Self {
        Self {
            values: values.into_iter().collect(),
            source,
            target,
            subtype,
            kind: MapKind::Homomorphism,
        }
    }

    /// The identity-valued inclusion of `source` into `target`.
    pub fn embedding(source: &'a Model, target: &'a Model, subtype: Signature) -> Self {
        let values = source.universe().iter().map(|x| (x.clone(), x.clone()));
        Self::new(values, source, target, subtype).with_kind(MapKind::Embedding)
    }

    fn with_kind(mut self, kind: MapKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn source(&self) -> &'a Model {
        self.source
    }

    pub fn target(&self) -> &'a Model {
        self.target
    }

    pub fn subtype(&self) -> &Signature {
        &self.subtype
    }

    pub fn kind(&self) -> MapKind {
        self.kind
    }

    pub fn values(&self) -> &BTreeMap<Element, Element> {
        &self.values
    }

    pub fn domain(&self) -> impl Iterator<Item = &Element> {
        self.values.keys()
    }

    /// The image of `x`, or `None` where the map is undefined.
    pub fn call(&self, x: &Element) -> Option<&Element> {
        self.values.get(x)
    }

    /// Apply the map to each component of `xs`.
    pub fn vcall(&self, xs: &[Element]) -> Vec<Option<Element>> {
        xs.iter().map(|x| self.call(x).cloned()).collect()
    }

    /// `self ∘ g`: defined where `g` is defined and `self` is defined on `g`'s result.
    pub fn compose(&self, g: &Homomorphism<'a>) -> Homomorphism<'a> {
        let values = g
            .values
            .iter()
            .filter_map(|(x, y)| self.call(y).map(|z| (x.clone(), z.clone())));
        Homomorphism::new(values, g.source, self.target, self.subtype.clone())
    }

    /// The partition of the domain relating `a` and `b` exactly when `f(a) = f(b)`.
    pub fn kernel(&self) -> Partition<Element> {
        let mut kernel = Partition::new();
        let mut first_with_value: HashMap<&Element, &Element> = HashMap::new();
        for (x, y) in &self.values {
            kernel.add_element(x.clone());
            match first_with_value.get(y) {
                Some(first) => kernel.join_blocks(x, first),
                None => {
                    first_with_value.insert(y, x);
                }
            }
        }
        kernel
    }

    /// The set of values taken.
    pub fn image(&self) -> BTreeSet<Element> {
        self.values.values().cloned().collect()
    }

    /// The target restricted to the image.
    pub fn image_model(&self) -> Model {
        self.target.restrict(self.image())
    }

    pub fn is_surjective(&self) -> bool {
        self.image().len() == self.target.len()
            && self.image().iter().all(|y| self.target.contains(y))
    }

    pub fn is_injective(&self) -> bool {
        self.image().len() == self.values.len()
    }

    /// Whether the map commutes with every operation of `subtype` and sends tuples of every
    /// relation of `subtype` to relation tuples, wherever it is defined. Symbols of `subtype`
    /// missing from `source` or `target` fail.
    pub fn preserves_structure(&self) -> bool {
        let operations = self.subtype.operations.keys().all(|symbol| {
            let Some(op) = self.source.operation(symbol) else {
                return false;
            };
            let Some(target_op) = self.target.operation(symbol) else {
                return false;
            };
            op.iter().all(|(args, value)| {
                let image: Option<Vec<Element>> = self.vcall(args).into_iter().collect();
                match (image, self.call(value)) {
                    (Some(args), Some(value)) => target_op.get(&args) == Some(value),
                    _ => true,
                }
            })
        });
        let relations = self.subtype.relations.keys().all(|symbol| {
            let Some(rel) = self.source.relation(symbol) else {
                return false;
            };
            let Some(target_rel) = self.target.relation(symbol) else {
                return false;
            };
            rel.iter().all(|t| {
                let image: Option<Vec<Element>> = self.vcall(t).into_iter().collect();
                image.map_or(true, |t| target_rel.contains(&t))
            })
        });
        operations && relations
    }
}

/// A bijective homomorphism.
///
/// Bijectivity is the caller's responsibility: [`Isomorphism::inverse`] of a non-injective map
/// silently drops entries.
#[derive(Debug, Clone)]
pub struct Isomorphism<'a> {
    map: Homomorphism<'a>,
}

impl<'a> Isomorphism<'a> {
    pub fn new(
        values: impl IntoIterator<Item = (Element, Element)>,
        source: &'a Model,
        target: &'a Model,
        subtype: Signature,
    ) -> Self {
        let map = Homomorphism::new(values, source, target, subtype);
        Self {
            map: map.with_kind(MapKind::Isomorphism),
        }
    }

    /// Swap keys with values and source with target.
    pub fn inverse(&self) -> Self {
        let map = Homomorphism {
            values: self
                .map
                .values
                .iter()
                .map(|(x, y)| (y.clone(), x.clone()))
                .collect(),
            source: self.map.target,
            target: self.map.source,
            subtype: self.map.subtype.clone(),
            kind: self.map.kind,
        };
        Self { map }
    }

    pub fn into_homomorphism(self) -> Homomorphism<'a> {
        self.map
    }
}

impl<'a> Deref for Isomorphism<'a> {
    type Target = Homomorphism<'a>;

    fn deref(&self) -> &Self::Target {
        &self.map
    }
}

/// An isomorphism from a model to itself.
#[derive(Debug, Clone)]
pub struct Automorphism<'a> {
    iso: Isomorphism<'a>,
}

impl<'a> Automorphism<'a> {
    pub fn new(
        values: impl IntoIterator<Item = (Element, Element)>,
        model: &'a Model,
        subtype: Signature,
    ) -> Self {
        let map = Homomorphism::new(values, model, model, subtype);
        Self {
            iso: Isomorphism {
                map: map.with_kind(MapKind::Automorphism),
            },
        }
    }

    pub fn model(&self) -> &'a Model {
        self.iso.map.source
    }

    pub fn inverse(&self) -> Self {
        Self {
            iso: self.iso.inverse(),
        }
    }

    pub fn into_isomorphism(self) -> Isomorphism<'a> {
        self.iso
    }
}

impl<'a> Deref for Automorphism<'a> {
    type Target = Isomorphism<'a>;

    fn deref(&self) -> &Self::Target {
        &self.iso
    }
}
