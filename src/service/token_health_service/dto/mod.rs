mod token_failure;

pub use token_failure::*;
