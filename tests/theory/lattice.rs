// The two-element lattice {0, 1} with meet and join, and its powers.

use finite_models::prelude::*;

pub fn a(x: i64) -> Element {
    Element::Atom(x)
}

// A tuple of atoms, as found in the universe of a product.
pub fn t(xs: &[i64]) -> Element {
    Element::tuple(xs.iter().map(|&x| a(x)))
}

fn binary(symbol: &str, f: fn(i64, i64) -> i64) -> Operation {
    Operation::from_table(
        symbol,
        2,
        (0..2).flat_map(|i| (0..2).map(move |j| (vec![a(i), a(j)], a(f(i, j))))),
    )
    .unwrap()
}

pub fn two() -> Model {
    Model::new(
        [a(0), a(1)],
        vec![],
        vec![binary("meet", i64::min), binary("join", i64::max)],
    )
    .unwrap()
}

// The two-element lattice with its order relation.
pub fn ordered_two() -> Model {
    let le = Relation::from_tuples(
        "<=",
        2,
        vec![vec![a(0), a(0)], vec![a(0), a(1)], vec![a(1), a(1)]],
    )
    .unwrap();
    Model::new(
        [a(0), a(1)],
        vec![le],
        vec![binary("meet", i64::min), binary("join", i64::max)],
    )
    .unwrap()
}

pub fn cube() -> Product {
    Product::power(&two(), 3).unwrap()
}
