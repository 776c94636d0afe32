use std::collections::HashMap;
use std::hash::Hash;

/// Weighted union-find over a lazily discovered set of objects.
///
/// Objects are interned into an arena the first time they are seen; `parent` and `size` are
/// indexed by arena id. `size` is only meaningful at roots, and is zero for absorbed roots.
#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    index: HashMap<T, usize>,
    objects: Vec<T>,
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl<T> Default for UnionFind<T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            objects: Vec::new(),
            parent: Vec::new(),
            size: Vec::new(),
            components: 0,
        }
    }
}

impl<T: Clone + Eq + Hash> UnionFind<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of known objects.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of classes.
    pub fn components(&self) -> usize {
        self.components
    }

    pub fn contains(&self, x: &T) -> bool {
        self.index.contains_key(x)
    }

    /// Known objects, in the order they were first seen.
    pub fn objects(&self) -> &[T] {
        &self.objects
    }

    /// Intern `x` as a singleton class if it is unseen, returning its arena id.
    pub fn insert(&mut self, x: T) -> usize {
        if let Some(&id) = self.index.get(&x) {
            return id;
        }
        let id = self.objects.len();
        self.index.insert(x.clone(), id);
        self.objects.push(x);
        self.parent.push(id);
        self.size.push(1);
        self.components += 1;
        id
    }

    pub fn insert_objects(&mut self, objects: impl IntoIterator<Item = T>) {
        for x in objects {
            self.insert(x);
        }
    }

    /// The representative of the class of `x`, inserting `x` as a singleton if it is unseen.
    pub fn find(&mut self, x: &T) -> T {
        let id = self.insert(x.clone());
        let root = self.find_id(id);
        self.objects[root].clone()
    }

    /// Chase parents to the root, then point every visited node directly at it.
    pub(crate) fn find_id(&mut self, id: usize) -> usize {
        let mut path = vec![id];
        let mut node = self.parent[id];
        while node != path[path.len() - 1] {
            path.push(node);
            node = self.parent[node];
        }
        for i in path {
            self.parent[i] = node;
        }
        node
    }

    /// Root of `id` without path compression.
    pub(crate) fn root_id(&self, id: usize) -> usize {
        let mut node = id;
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }

    pub(crate) fn id(&self, x: &T) -> Option<usize> {
        self.index.get(x).copied()
    }

    /// Representative of `x` without mutating the structure. `None` if `x` is unseen.
    pub fn representative(&self, x: &T) -> Option<&T> {
        self.id(x).map(|id| &self.objects[self.root_id(id)])
    }

    /// Whether `x` and `y` are in the same class. Unseen objects are only related to themselves.
    pub fn connected(&self, x: &T, y: &T) -> bool {
        match (self.id(x), self.id(y)) {
            (Some(i), Some(j)) => self.root_id(i) == self.root_id(j),
            _ => x == y,
        }
    }

    pub fn is_root(&self, x: &T) -> bool {
        self.id(x).is_some_and(|id| self.parent[id] == id)
    }

    /// Size of the class of `x`, or `None` if `x` is unseen.
    pub fn weight(&self, x: &T) -> Option<usize> {
        self.id(x).map(|id| self.size[self.root_id(id)])
    }

    /// Merge the classes of `x` and `y`, inserting either if unseen.
    /// Returns `false` when they were already in the same class.
    pub fn union(&mut self, x: &T, y: &T) -> bool {
        let i = self.insert(x.clone());
        let j = self.insert(y.clone());
        self.union_ids(i, j)
    }

    pub(crate) fn union_ids(&mut self, i: usize, j: usize) -> bool {
        let root_x = self.find_id(i);
        let root_y = self.find_id(j);
        if root_x == root_y {
            return false;
        }

        // the lighter root goes under the heavier one; ties keep `x`'s root
        let (root, parent) = if self.size[root_x] >= self.size[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };

        self.parent[root] = parent;
        self.size[parent] += self.size[root];
        self.size[root] = 0;
        self.components -= 1;
        true
    }

    /// The classes as blocks, ordered by first appearance of their members.
    /// Each block lists its members in insertion order.
    pub fn to_list(&self) -> Vec<Vec<T>> {
        let mut block_of_root: HashMap<usize, usize> = HashMap::new();
        let mut blocks: Vec<Vec<T>> = Vec::new();
        for (id, x) in self.objects.iter().enumerate() {
            let root = self.root_id(id);
            let block = *block_of_root.entry(root).or_insert_with(|| {
                blocks.push(Vec::new());
                blocks.len() - 1
            });
            blocks[block].push(x.clone());
        }
        blocks
    }
}
