//! Utilities shared by the binary and the test suites

pub mod testing;
