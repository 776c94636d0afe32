//! Partitions of a finite set, the representation used for congruences.
use crate::union_find::UnionFind;

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// An equivalence relation over a finite, lazily grown ground set.
///
/// Two partitions compare equal when they induce the same equivalence relation on the same
/// ground set, regardless of which elements were chosen as representatives.
#[derive(Debug, Clone)]
pub struct Partition<T> {
    classes: UnionFind<T>,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            classes: UnionFind::default(),
        }
    }
}

impl<T: Clone + Eq + Hash> Partition<T> {
    /// The empty partition. Every element is related only to itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a partition from explicit blocks. See [`Partition::extend`].
    pub fn from_blocks<B>(blocks: impl IntoIterator<Item = B>) -> Self
    where
        B: IntoIterator<Item = T>,
    {
        let mut p = Self::new();
        p.extend(blocks);
        p
    }

    /// The discrete partition of `elements`: one singleton block each.
    pub fn discrete(elements: impl IntoIterator<Item = T>) -> Self {
        let mut p = Self::new();
        for e in elements {
            p.add_element(e);
        }
        p
    }

    /// Insert every element of each block and join it to the block's first element.
    pub fn extend<B>(&mut self, blocks: impl IntoIterator<Item = B>)
    where
        B: IntoIterator<Item = T>,
    {
        for block in blocks {
            let mut first = None;
            for e in block {
                let id = self.classes.insert(e);
                match first {
                    None => first = Some(id),
                    Some(f) => {
                        self.classes.union_ids(id, f);
                    }
                }
            }
        }
    }

    pub fn add_element(&mut self, e: T) {
        self.classes.insert(e);
    }

    /// Representative of the block of `e`, inserting `e` as a singleton if it is unseen.
    pub fn root(&mut self, e: &T) -> T {
        self.classes.find(e)
    }

    /// Representative of the block of `e` without mutating the partition.
    pub fn representative(&self, e: &T) -> Option<&T> {
        self.classes.representative(e)
    }

    pub fn join_blocks(&mut self, a: &T, b: &T) {
        self.classes.union(a, b);
    }

    /// Whether `a` and `b` lie in the same block.
    pub fn related(&self, a: &T, b: &T) -> bool {
        self.classes.connected(a, b)
    }

    pub fn contains(&self, e: &T) -> bool {
        self.classes.contains(e)
    }

    /// The ground set, in the order elements were first seen.
    pub fn elements(&self) -> &[T] {
        self.classes.objects()
    }

    /// Size of the ground set.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.classes.components()
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        self.classes.to_list()
    }

    /// One representative per block, in order of first appearance.
    pub fn representatives(&self) -> Vec<T> {
        self.to_list()
            .into_iter()
            .filter_map(|block| block.into_iter().next())
            .collect()
    }

    /// The relation as a set of ordered pairs, including the diagonal.
    pub fn to_list_of_pairs(&self) -> HashSet<(T, T)> {
        let mut pairs = HashSet::new();
        for block in self.to_list() {
            for a in &block {
                for b in &block {
                    pairs.insert((a.clone(), b.clone()));
                }
            }
        }
        pairs
    }

    /// An independent copy.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// The partition whose blocks are the nonempty intersections of a block of `self` with a
    /// block of `other`. The ground set is that of `self`.
    pub fn meet(&self, other: &Self) -> Self {
        let mut result = Self::new();
        let mut first_of_pair: HashMap<(usize, usize), usize> = HashMap::new();
        for (id, e) in self.elements().iter().enumerate() {
            let new_id = result.classes.insert(e.clone());
            // unseen in `other` means a singleton there, so a singleton here
            let Some(j) = other.classes.id(e) else {
                continue;
            };
            let key = (self.classes.root_id(id), other.classes.root_id(j));
            match first_of_pair.get(&key) {
                Some(&first) => {
                    result.classes.union_ids(new_id, first);
                }
                None => {
                    first_of_pair.insert(key, new_id);
                }
            }
        }
        result
    }

    /// The finest partition coarser than both: a copy of `other` in which every element of
    /// `self` is merged with its `self`-representative.
    pub fn join(&self, other: &Self) -> Self {
        let mut result = other.copy();
        let elements = self.elements().iter().cloned();
        result.classes.insert_objects(elements);
        for (id, e) in self.elements().iter().enumerate() {
            let root = self.classes.root_id(id);
            if root != id {
                result.join_blocks(e, &self.elements()[root]);
            }
        }
        result
    }

    /// Whether every block of `self` lies inside a block of `other`.
    pub fn refines(&self, other: &Self) -> bool {
        let mut image: HashMap<usize, usize> = HashMap::new();
        for (id, e) in self.elements().iter().enumerate() {
            let Some(j) = other.classes.id(e) else {
                // a singleton of `other` can only contain a singleton of `self`
                if self.classes.weight(e) != Some(1) {
                    return false;
                }
                continue;
            };
            let root_other = other.classes.root_id(j);
            let root_self = self.classes.root_id(id);
            if *image.entry(root_self).or_insert(root_other) != root_other {
                return false;
            }
        }
        true
    }
}

impl<T: Clone + Eq + Hash> PartialEq for Partition<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.block_count() == other.block_count()
            && self.elements().iter().all(|e| other.contains(e))
            && self.refines(other)
    }
}

impl<T: Clone + Eq + Hash> Eq for Partition<T> {}

impl<T: Clone + Eq + Hash> FromIterator<Vec<T>> for Partition<T> {
    fn from_iter<I: IntoIterator<Item = Vec<T>>>(iter: I) -> Self {
        Self::from_blocks(iter)
    }
}
