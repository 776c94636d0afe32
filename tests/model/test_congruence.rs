use finite_models::prelude::*;

use super::strategy::arb_pair;
use crate::theory::lattice::a;
use crate::theory::modular::{cyclic, residues};

use proptest::{prop_assert, proptest};

proptest! {
    #[test]
    fn generated_congruence_is_a_congruence((x, y) in arb_pair(&cyclic(6))) {
        let z6 = cyclic(6);
        let theta = z6.congruence_generated_by([(x.clone(), y.clone())]);
        prop_assert!(theta.related(&x, &y));
        prop_assert!(z6.is_congruence(&theta));
    }

    #[test]
    fn generated_congruence_is_least((x, y) in arb_pair(&cyclic(6))) {
        let z6 = cyclic(6);
        let theta = z6.congruence_generated_by([(x.clone(), y.clone())]);
        // every congruence of Z/6 is a residue partition
        for d in [1, 2, 3, 6] {
            let rho = residues(6, d);
            if rho.related(&x, &y) {
                prop_assert!(theta.refines(&rho));
            }
        }
    }
}

#[test]
fn residues_are_congruences() {
    let z6 = cyclic(6);
    for d in [1, 2, 3, 6] {
        assert!(z6.is_congruence(&residues(6, d)));
    }
}

#[test]
fn arbitrary_partition_is_not_a_congruence() {
    let z6 = cyclic(6);
    // 0 ~ 1 forces 1 ~ 2 through the successor
    let p = Partition::from_blocks(vec![vec![a(0), a(1)]]);
    assert!(!z6.is_congruence(&p));
    assert_eq!(z6.congruence_generated_by([(a(0), a(1))]).block_count(), 1);
}

#[test]
fn four_generates_the_residues_modulo_two() {
    let z6 = cyclic(6);
    assert_eq!(z6.congruence_generated_by([(a(0), a(4))]), residues(6, 2));
}
