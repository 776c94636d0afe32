pub mod test_product;
