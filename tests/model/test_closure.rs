use finite_models::prelude::*;

use super::strategy::arb_subset;
use crate::theory::lattice::{a, cube, t, two};
use crate::theory::modular::cyclic;

use proptest::{prop_assert, proptest};

// Whether `universe` is closed under every operation of `model`.
fn is_closed(model: &Model, universe: &[Element]) -> bool {
    model.operations().values().all(|op| {
        op.iter()
            .filter(|(args, _)| args.iter().all(|e| universe.contains(e)))
            .all(|(_, value)| universe.contains(value))
    })
}

// Every subset of the universe, as bit masks.
fn subsets(model: &Model) -> impl Iterator<Item = Vec<Element>> + '_ {
    let n = model.len();
    (0..1u32 << n).map(move |mask| {
        (0..n)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| model.universe()[i].clone())
            .collect()
    })
}

proptest! {
    #[test]
    fn closure_contains_generators_and_is_closed(gens in arb_subset(cube().model())) {
        let p = cube();
        let sub = p.model().substructure(gens.clone()).unwrap();
        prop_assert!(gens.iter().all(|g| sub.contains(g)));
        prop_assert!(is_closed(p.model(), sub.universe()));
    }

    #[test]
    fn closure_is_minimal(gens in arb_subset(cube().model())) {
        let p = cube();
        let sub = p.model().substructure(gens.clone()).unwrap();
        for candidate in subsets(p.model()) {
            if gens.iter().all(|g| candidate.contains(g)) && is_closed(p.model(), &candidate) {
                prop_assert!(sub.universe().iter().all(|e| candidate.contains(e)));
            }
        }
    }

    #[test]
    fn closure_is_idempotent(gens in arb_subset(cube().model())) {
        let p = cube();
        let sub = p.model().substructure(gens).unwrap();
        let again = p.model().substructure(sub.universe().to_vec()).unwrap();
        prop_assert!(again == sub);
    }
}

#[test]
fn empty_generators_give_empty_closure_without_constants() {
    let sub = two().substructure(Vec::new()).unwrap();
    assert!(sub.is_empty());
}

#[test]
fn constants_enter_the_closure() {
    // 0 and successor generate everything
    let z5 = cyclic(5);
    assert_eq!(z5.substructure(Vec::new()).unwrap(), z5);
}

#[test]
fn diagonal_of_cube_is_generated_by_its_ends() {
    let p = cube();
    let m = p.model();
    let sub = m.substructure([t(&[0, 0, 0]), t(&[1, 1, 1])]).unwrap();
    assert_eq!(sub.universe(), &[t(&[0, 0, 0]), t(&[1, 1, 1])]);
    assert_eq!(
        sub.apply("meet", &[t(&[0, 0, 0]), t(&[1, 1, 1])]),
        Ok(t(&[0, 0, 0]))
    );
}

#[test]
fn generators_outside_universe_are_rejected() {
    assert!(matches!(
        two().substructure([a(2)]),
        Err(Error::OutsideUniverse { .. })
    ));
}
