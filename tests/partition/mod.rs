pub mod strategy;
pub mod test_union_find;
