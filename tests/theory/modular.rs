// Cyclic groups Z/n under addition, with the successor as a unary operation.

use finite_models::prelude::*;

use super::lattice::a;

pub fn cyclic(n: i64) -> Model {
    let add = Operation::from_table(
        "+",
        2,
        (0..n).flat_map(|i| (0..n).map(move |j| (vec![a(i), a(j)], a((i + j) % n)))),
    )
    .unwrap();
    let table = (0..n).map(|i| (vec![a(i)], a((i + 1) % n)));
    let succ = Operation::from_table("s", 1, table).unwrap();
    let zero = Operation::constant("0", a(0));
    Model::new((0..n).map(a), vec![], vec![add, succ, zero]).unwrap()
}

// The congruence of residues modulo `d` on Z/n.
pub fn residues(n: i64, d: i64) -> Partition<Element> {
    Partition::from_blocks((0..d).map(|r| (0..n).filter(move |i| i % d == r).map(a)))
}
