
// Not every test binary issues tokens.
#[allow(unused_imports)]
pub use factory::{create_principal, create_principal_with_token};
pub use test_state::test_state;
