use finite_models::prelude::*;
use finite_models::product::Factor;

use crate::theory::lattice::{a, cube, ordered_two, t, two};
use crate::theory::modular::cyclic;

#[test]
fn cube_has_eight_triples() {
    let p = cube();
    assert_eq!(p.model().len(), 8);
    assert_eq!(p.factors().len(), 3);
    assert_eq!(
        p.model().apply("join", &[t(&[1, 0, 0]), t(&[0, 0, 1])]),
        Ok(t(&[1, 0, 1]))
    );
}

#[test]
fn products_of_products_are_flat() {
    let square = Product::power(&two(), 2).unwrap();
    let p = Product::new([Factor::from(square), Factor::from(two())]).unwrap();
    assert_eq!(p.factors().len(), 3);
    assert_eq!(p.model(), cube().model());
}

#[test]
fn projections_are_surjective_homomorphisms() {
    let p = cube();
    for i in p.indices() {
        let pi = p.projection(i).unwrap();
        assert!(pi.is_surjective());
        assert!(pi.preserves_structure());
        assert_eq!(pi.call(&t(&[0, 1, 0])), Some(&a(i64::from(i == 1))));
    }
    assert_eq!(
        p.projection(3).err(),
        Some(Error::FactorIndex {
            index: 3,
            factors: 3
        })
    );
}

#[test]
fn relations_act_coordinatewise() {
    let square = Product::power(&ordered_two(), 2).unwrap();
    let le = square.model().relation("<=").unwrap();
    assert_eq!(le.len(), 9);
    assert!(le.contains(&[t(&[0, 1]), t(&[1, 1])]));
    assert!(!le.contains(&[t(&[0, 1]), t(&[1, 0])]));
}

#[test]
fn signatures_must_agree() {
    assert!(matches!(
        Product::new([two(), cyclic(2)]),
        Err(Error::SignatureMismatch { .. })
    ));
    assert_eq!(
        Product::new(Vec::<Model>::new()).err(),
        Some(Error::EmptyProduct)
    );
}

#[test]
fn kernel_of_projection_agrees_on_coordinate() {
    let p = Product::power(&two(), 2).unwrap();
    let kernel = p.projection(0).unwrap().kernel();
    assert_eq!(kernel.block_count(), 2);
    assert!(kernel.related(&t(&[1, 0]), &t(&[1, 1])));
    assert!(!kernel.related(&t(&[0, 0]), &t(&[1, 0])));
}
