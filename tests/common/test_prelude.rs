// common/test_prelude.rs

// Re-export commonly used items for integration tests.
pub use assert_cmd::Command;
pub use predicates::prelude::*;
pub use predicates::str::contains;
pub use stackrunner::BuildError;
