//! Submodels, and subdirect products as submodels of a direct product.
use crate::congruence_system::{is_system, minorize, sup_proj, CongruenceSystem};
use crate::element::Element;
use crate::error::{Error, Result};
use crate::model::{Model, Signature, Structure};
use crate::morphism::Homomorphism;
use crate::partition::Partition;
use crate::product::Product;

use itertools::Itertools;
use tracing::{debug, trace};

/// A model living inside a supermodel, with relations and operations restricted to its
/// universe. The supermodel is borrowed, never owned.
#[derive(Debug, Clone)]
pub struct Submodel<'a, S: Structure + ?Sized = Model> {
    model: Model,
    supermodel: &'a S,
}

impl<'a, S: Structure + ?Sized> Submodel<'a, S> {
    /// The restriction of `supermodel` to `universe`, which must lie inside it.
    pub fn new(universe: impl IntoIterator<Item = Element>, supermodel: &'a S) -> Result<Self> {
        let universe: Vec<Element> = universe.into_iter().collect();
        if let Some(e) = universe.iter().find(|e| !supermodel.model().contains(e)) {
            return Err(Error::OutsideUniverse {
                symbol: "universe".to_string(),
                element: e.clone(),
            });
        }
        Ok(Self {
            model: supermodel.model().restrict(universe),
            supermodel,
        })
    }

    /// The submodel generated by `generators`.
    pub fn generated_by(
        generators: impl IntoIterator<Item = Element>,
        supermodel: &'a S,
    ) -> Result<Self> {
        Ok(Self {
            model: supermodel.model().substructure(generators)?,
            supermodel,
        })
    }

    pub fn supermodel(&self) -> &'a S {
        self.supermodel
    }

    /// The inclusion `x ↦ x` into the supermodel.
    pub fn natural_embedding(&self) -> Homomorphism<'_> {
        Homomorphism::embedding(
            &self.model,
            self.supermodel.model(),
            self.model.signature(),
        )
    }

    /// Whether the supermodel is a direct product and every coordinate projection restricted
    /// to this submodel is onto its factor.
    pub fn is_subdirect(&self) -> bool {
        let Some(product) = self.supermodel.as_product() else {
            return false;
        };
        let embedding = self.natural_embedding();
        product.indices().all(|i| match product.projection(i) {
            Ok(pi) => {
                pi.compose(&embedding).image_model().universe() == product.factors()[i].universe()
            }
            Err(_) => false,
        })
    }
}

impl<S: Structure + ?Sized> Structure for Submodel<'_, S> {
    fn model(&self) -> &Model {
        &self.model
    }
}

/// A submodel of a direct product whose projections are all onto.
#[derive(Debug, Clone)]
pub struct SubdirectProduct<'a> {
    submodel: Submodel<'a, Product>,
}

impl<'a> SubdirectProduct<'a> {
    pub fn new(universe: impl IntoIterator<Item = Element>, product: &'a Product) -> Result<Self> {
        let submodel = Submodel::new(universe, product)?;
        if !submodel.is_subdirect() {
            return Err(Error::NotSubdirect);
        }
        Ok(Self { submodel })
    }

    pub fn product(&self) -> &'a Product {
        self.submodel.supermodel()
    }

    pub fn natural_embedding(&self) -> Homomorphism<'_> {
        self.submodel.natural_embedding()
    }

    /// The kernel of the `i`-th projection: elements agreeing on coordinate `i`.
    pub fn tita(&self, i: usize) -> Result<Partition<Element>> {
        let pi = self.product().projection(i)?;
        Ok(pi.compose(&self.natural_embedding()).kernel())
    }

    /// The kernels of all projections, in factor order. Their meet is the identity.
    pub fn sigma(&self) -> Vec<Partition<Element>> {
        self.product()
            .indices()
            .map(|i| self.coordinate_kernel(i))
            .collect()
    }

    // Kernel of the projection onto coordinate `i`, for an index known to be in range.
    fn coordinate_kernel(&self, i: usize) -> Partition<Element> {
        let values = self
            .model()
            .universe()
            .iter()
            .filter_map(|x| x.coordinate(i).map(|y| (x.clone(), y.clone())));
        let factor = &self.product().factors()[i];
        Homomorphism::new(values, self.model(), factor, Signature::new()).kernel()
    }

    /// Whether every pairwise consistent choice of classes of the (minorized) kernels is
    /// realized by an element of the universe.
    pub fn is_global(&self) -> bool {
        let sigma = self.sigma();
        let sigma_m = minorize(&sigma);
        let sup = |a: &Partition<Element>, b: &Partition<Element>| sup_proj(&sigma, a, b);

        // one representative per class of each minorized kernel
        let classes: Vec<Vec<Element>> = sigma_m.iter().map(|p| p.representatives()).collect();
        debug!(
            kernels = sigma.len(),
            minorized = sigma_m.len(),
            "deciding globality"
        );

        for candidate in classes.into_iter().multi_cartesian_product() {
            if !is_system(&sigma_m, &candidate, sup) {
                continue;
            }
            let system = CongruenceSystem::new(&sigma_m, candidate, &sigma);
            if !system.has_solution() {
                trace!(candidate = ?system.candidate(), "system without solution");
                return false;
            }
        }
        true
    }
}

impl Structure for SubdirectProduct<'_> {
    fn model(&self) -> &Model {
        &self.submodel.model
    }
}
