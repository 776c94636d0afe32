use finite_models::partition::Partition;

use proptest::collection::vec;
use proptest::strategy::{BoxedStrategy, Strategy};

const MAX_ELEMENTS: usize = 10;
const MAX_BLOCKS: usize = 4;

// Element `i` goes to block `labels[i]`.
pub fn from_labels(labels: &[usize]) -> Partition<usize> {
    let mut blocks: Vec<Vec<usize>> = vec![Vec::new(); MAX_BLOCKS];
    for (e, &label) in labels.iter().enumerate() {
        blocks[label].push(e);
    }
    Partition::from_blocks(blocks)
}

fn arb_labels(n: usize) -> impl Strategy<Value = Vec<usize>> {
    vec(0..MAX_BLOCKS, n)
}

/// `k` random partitions of the same ground set `0..n`.
pub fn arb_partitions(k: usize) -> BoxedStrategy<Vec<Partition<usize>>> {
    (1..MAX_ELEMENTS)
        .prop_flat_map(move |n| vec(arb_labels(n), k))
        .prop_map(|labels| labels.iter().map(|l| from_labels(l)).collect())
        .boxed()
}

pub fn arb_partition() -> BoxedStrategy<Partition<usize>> {
    arb_partitions(1).prop_map(|mut ps| ps.remove(0)).boxed()
}
