use finite_models::union_find::UnionFind;

use proptest::collection::vec;
use proptest::{prop_assert, prop_assert_eq, proptest};

fn sorted_blocks(uf: &UnionFind<u32>) -> Vec<Vec<u32>> {
    let mut blocks: Vec<Vec<u32>> = uf
        .to_list()
        .into_iter()
        .map(|mut b| {
            b.sort();
            b
        })
        .collect();
    blocks.sort();
    blocks
}

#[test]
fn unions_of_one_to_five() {
    let mut uf = UnionFind::new();
    uf.insert_objects(1..=5u32);
    uf.union(&1, &2);
    uf.union(&3, &4);

    assert_eq!(uf.find(&1), uf.find(&2));
    assert_eq!(uf.find(&3), uf.find(&4));
    assert_ne!(uf.find(&1), uf.find(&3));
    assert_eq!(sorted_blocks(&uf), vec![vec![1, 2], vec![3, 4], vec![5]]);
}

#[test]
fn find_inserts_unseen_objects() {
    let mut uf: UnionFind<u32> = UnionFind::new();
    assert_eq!(uf.find(&7), 7);
    assert!(uf.contains(&7));
    assert_eq!(uf.components(), 1);
}

proptest! {
    #[test]
    fn weights_sum_to_size(pairs in vec((0..12u32, 0..12u32), 0..20)) {
        let mut uf = UnionFind::new();
        uf.insert_objects(0..12u32);
        for (x, y) in &pairs {
            uf.union(x, y);
        }
        let blocks = uf.to_list();
        prop_assert_eq!(blocks.len(), uf.components());
        prop_assert_eq!(blocks.iter().map(Vec::len).sum::<usize>(), uf.len());
        for block in &blocks {
            prop_assert_eq!(uf.weight(&block[0]), Some(block.len()));
            prop_assert!(block.iter().all(|x| uf.connected(x, &block[0])));
        }
    }

    #[test]
    fn union_is_transitive(pairs in vec((0..8u32, 0..8u32), 1..10)) {
        let mut uf = UnionFind::new();
        for (x, y) in &pairs {
            uf.union(x, y);
        }
        for (x, y) in &pairs {
            let root = uf.find(x);
            prop_assert_eq!(uf.find(y), root);
        }
    }
}
