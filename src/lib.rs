//! # Finite Models
//!
//! A [Model](crate::model::Model) is a finite universe of
//! [elements](crate::element::Element) together with named relations and (possibly partial)
//! operations over it. This crate builds new models from old ones:
//!
//! - [submodels](crate::submodel::Submodel) and the substructure generated by a set of elements,
//! - [direct products](crate::product::Product) with their coordinate projections,
//! - [quotients](crate::quotient::Quotient) by a congruence,
//! - [subdirect products](crate::submodel::SubdirectProduct), and whether they are *global*.
//!
//! Equivalence relations are represented as [partitions](crate::partition::Partition) backed by
//! a weighted, path-compressing [union-find](crate::union_find::UnionFind).
//!
//! # Example
//!
//! The two-element meet-semilattice, squared, contains the subdirect product `{00, 01, 11}`.
//! Choosing the class of `1` on the first coordinate and the class of `0` on the second is
//! consistent, but no element realizes it, so the chain is not global. The whole square is:
//!
//! ```rust
//! use finite_models::prelude::*;
//!
//! let a = Element::Atom;
//! let meet = Operation::from_table(
//!     "meet",
//!     2,
//!     (0..2).flat_map(|i| (0..2).map(move |j| (vec![a(i), a(j)], a(i.min(j))))),
//! )
//! .unwrap();
//! let two = Model::new([a(0), a(1)], vec![], vec![meet]).unwrap();
//! let square = Product::power(&two, 2).unwrap();
//!
//! let t = |x, y| Element::tuple([a(x), a(y)]);
//! let chain = SubdirectProduct::new([t(0, 0), t(0, 1), t(1, 1)], &square).unwrap();
//! assert!(!chain.is_global());
//!
//! let full = SubdirectProduct::new(square.model().universe().to_vec(), &square).unwrap();
//! assert!(full.is_global());
//! ```
//!
//! # Logging
//!
//! The closure and globality algorithms emit [`tracing`] events at `debug` and `trace` level.
//! Nothing is printed unless the caller installs a subscriber.

pub mod element;
pub mod error;
pub mod partition;
pub mod union_find;

pub mod formula;
pub mod model;
pub mod morphism;

pub mod congruence_system;
pub mod product;
pub mod quotient;
pub mod submodel;

pub use error::{Error, Result};

pub mod prelude {
    //! The types needed to build and transform models.
    pub use crate::element::Element;
    pub use crate::error::{Error, Result};
    pub use crate::formula::{Assignment, Formula, Term};
    pub use crate::model::{Model, Operation, Relation, Signature, Structure};
    pub use crate::morphism::{Automorphism, Homomorphism, Isomorphism, MapKind};
    pub use crate::partition::Partition;
    pub use crate::product::Product;
    pub use crate::quotient::{Congruence, Quotient};
    pub use crate::submodel::{SubdirectProduct, Submodel};
    pub use crate::union_find::UnionFind;
}
