pub mod test_quotient;
