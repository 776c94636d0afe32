use finite_models::prelude::*;

use super::strategy::arb_subset;
use crate::theory::lattice::{a, cube, ordered_two};

use proptest::{prop_assert, prop_assert_eq, proptest};

proptest! {
    #[test]
    fn restrict_is_idempotent(sub in arb_subset(cube().model())) {
        let p = cube();
        let once = p.model().restrict(sub.clone());
        let twice = once.restrict(sub);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn restrict_stays_inside(sub in arb_subset(cube().model())) {
        let p = cube();
        let r = p.model().restrict(sub.clone());
        for op in r.operations().values() {
            for (args, value) in op.iter() {
                prop_assert!(sub.contains(value));
                prop_assert!(args.iter().all(|e| sub.contains(e)));
            }
        }
    }

    #[test]
    fn embedding_of_closed_subset_preserves_structure(sub in arb_subset(cube().model())) {
        let p = cube();
        let closed = p.model().substructure(sub).unwrap();
        let s = Submodel::new(closed.universe().to_vec(), p.model()).unwrap();
        let i = s.natural_embedding();
        prop_assert_eq!(i.kind(), MapKind::Embedding);
        prop_assert!(i.is_injective());
        prop_assert!(i.preserves_structure());
    }
}

#[test]
fn restrict_drops_relation_tuples_leaving_subuniverse() {
    let m = ordered_two();
    let r = m.restrict([a(0)]);
    let le = r.relation("<=").unwrap();
    assert_eq!(le.len(), 1);
    assert!(le.contains(&[a(0), a(0)]));
    assert_eq!(r.signature(), m.signature());
}
