use finite_models::prelude::*;

use crate::theory::lattice::{a, ordered_two, t, two};
use crate::theory::modular::{cyclic, residues};

#[test]
fn identity_congruence_gives_an_isomorphic_copy() {
    let z6 = cyclic(6);
    let identity = Partition::discrete(z6.universe().to_vec());
    let q = Quotient::new(&z6, &identity).unwrap();
    assert_eq!(q.model(), &z6);

    let nu = q.natural_map();
    assert!(nu.is_injective());
    assert!(nu.is_surjective());
    assert!(nu.preserves_structure());
}

#[test]
fn z6_modulo_three_is_z3() {
    let z6 = cyclic(6);
    let q = Quotient::new(&z6, &residues(6, 3)).unwrap();
    assert_eq!(q.model().universe(), &[a(0), a(1), a(2)]);
    assert_eq!(q.model().apply("+", &[a(2), a(2)]), Ok(a(1)));
    assert_eq!(q.model().apply("s", &[a(2)]), Ok(a(0)));
    assert_eq!(q.model().apply("0", &[]), Ok(a(0)));
    assert_eq!(q.representative(&a(5)), Some(&a(2)));
}

#[test]
fn natural_map_kernel_is_the_congruence() {
    let z6 = cyclic(6);
    let theta = residues(6, 2);
    let q = Quotient::new(&z6, &theta).unwrap();
    assert_eq!(q.natural_map().kernel(), theta);
}

#[test]
fn quotient_of_a_product_by_a_projection_kernel() {
    let square = Product::power(&two(), 2).unwrap();
    let kernel = square.projection(1).unwrap().kernel();
    let q = Quotient::new(&square, &kernel).unwrap();
    assert_eq!(q.model().len(), 2);
    assert_eq!(q.representative(&t(&[1, 1])), Some(&t(&[0, 1])));
    assert!(q.natural_map().preserves_structure());
}

#[test]
fn closure_congruences_work() {
    let z6 = cyclic(6);
    let q = Quotient::new(&z6, &|x: &Element, y: &Element| match (x, y) {
        (Element::Atom(i), Element::Atom(j)) => (i - j) % 3 == 0,
        _ => x == y,
    })
    .unwrap();
    assert_eq!(q.model().len(), 3);
}

#[test]
fn models_with_relations_cannot_be_quotiented() {
    let m = ordered_two();
    let identity = Partition::discrete(m.universe().to_vec());
    assert_eq!(
        Quotient::new(&m, &identity).err(),
        Some(Error::RelationalQuotient)
    );
}
