/// An element of a finite universe.
///
/// Base models are usually built over [`Element::Atom`]s; direct products have universes of
/// [`Element::Tuple`]s, one coordinate per (flattened) factor.
/// The derived order is total, which gives every universe a canonical iteration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Element {
    Atom(i64),
    Tuple(Vec<Element>),
}

impl Element {
    pub fn tuple(coordinates: impl IntoIterator<Item = Element>) -> Self {
        Element::Tuple(coordinates.into_iter().collect())
    }

    /// The coordinates of a tuple element, or `None` for an atom.
    pub fn coordinates(&self) -> Option<&[Element]> {
        match self {
            Element::Atom(_) => None,
            Element::Tuple(xs) => Some(xs),
        }
    }

    /// The `i`-th coordinate of a tuple element.
    pub fn coordinate(&self, i: usize) -> Option<&Element> {
        self.coordinates().and_then(|xs| xs.get(i))
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Atom(value)
    }
}

impl From<Vec<Element>> for Element {
    fn from(coordinates: Vec<Element>) -> Self {
        Element::Tuple(coordinates)
    }
}
