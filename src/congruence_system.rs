//! Systems of congruences, in the sense of the Chinese remainder theorem.
//!
//! A *system* over congruences `θ_1, …, θ_n` is a choice of elements `a_1, …, a_n` which is
//! pairwise consistent: `a_i` and `a_j` are related by `θ_i ∨ θ_j` for all `i, j`. A
//! *solution* is an element `a` with `a θ_i a_i` for every `i`.
use crate::partition::Partition;

use std::collections::HashSet;
use std::hash::Hash;
use tracing::trace;

/// The meet of a non-empty list of partitions.
pub fn meet_all<T: Clone + Eq + Hash>(congruences: &[Partition<T>]) -> Option<Partition<T>> {
    let (first, rest) = congruences.split_first()?;
    Some(rest.iter().fold(first.copy(), |acc, p| acc.meet(p)))
}

/// Drop, from left to right, every partition whose omission leaves the meet of the list
/// unchanged. The result has the same meet as the input and no redundant member.
pub fn minorize<T: Clone + Eq + Hash>(congruences: &[Partition<T>]) -> Vec<Partition<T>> {
    let Some(total) = meet_all(congruences) else {
        return Vec::new();
    };
    let mut kept = congruences.to_vec();
    let mut i = 0;
    while i < kept.len() {
        if kept.len() > 1 {
            let rest: Vec<Partition<T>> = kept
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, p)| p.copy())
                .collect();
            if meet_all(&rest).is_some_and(|m| m == total) {
                kept.remove(i);
                continue;
            }
        }
        i += 1;
    }
    trace!(before = congruences.len(), after = kept.len(), "minorized");
    kept
}

/// Every element known to some partition of `congruences`, in first-seen order.
pub fn ground_set<T: Clone + Eq + Hash>(congruences: &[Partition<T>]) -> Vec<T> {
    let mut seen = HashSet::new();
    congruences
        .iter()
        .flat_map(|p| p.elements().iter())
        .filter(|e| seen.insert(*e))
        .cloned()
        .collect()
}

/// The supremum `a ∨ b`, over the ground set of all of `original`.
pub fn sup_proj<T: Clone + Eq + Hash>(
    original: &[Partition<T>],
    a: &Partition<T>,
    b: &Partition<T>,
) -> Partition<T> {
    let mut sup = a.join(b);
    for e in ground_set(original) {
        sup.add_element(e);
    }
    sup
}

/// Whether `candidate` is pairwise consistent for `congruences`, where `sup` computes the
/// supremum of two congruences.
pub fn is_system<T, F>(congruences: &[Partition<T>], candidate: &[T], sup: F) -> bool
where
    T: Clone + Eq + Hash,
    F: Fn(&Partition<T>, &Partition<T>) -> Partition<T>,
{
    if congruences.len() != candidate.len() {
        return false;
    }
    for i in 0..congruences.len() {
        for j in (i + 1)..congruences.len() {
            let join = sup(&congruences[i], &congruences[j]);
            if !join.related(&candidate[i], &candidate[j]) {
                return false;
            }
        }
    }
    true
}

/// A candidate system `(θ_i, a_i)`, solved by search over the ground set of `original`.
#[derive(Debug, Clone)]
pub struct CongruenceSystem<'a, T> {
    congruences: &'a [Partition<T>],
    candidate: Vec<T>,
    original: &'a [Partition<T>],
}

impl<'a, T: Clone + Eq + Hash> CongruenceSystem<'a, T> {
    pub fn new(
        congruences: &'a [Partition<T>],
        candidate: Vec<T>,
        original: &'a [Partition<T>],
    ) -> Self {
        Self {
            congruences,
            candidate,
            original,
        }
    }

    pub fn candidate(&self) -> &[T] {
        &self.candidate
    }

    /// Some element `a` with `a θ_i a_i` for every `i`.
    pub fn solution(&self) -> Option<T> {
        ground_set(self.original).into_iter().find(|x| {
            self.congruences
                .iter()
                .zip(&self.candidate)
                .all(|(theta, a)| theta.related(x, a))
        })
    }

    pub fn has_solution(&self) -> bool {
        self.solution().is_some()
    }
}
