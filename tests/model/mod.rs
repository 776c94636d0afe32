pub mod test_closure;
pub mod test_congruence;
pub mod test_restrict;
