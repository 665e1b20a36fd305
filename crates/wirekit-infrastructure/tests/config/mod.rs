//! Configuration Tests

mod loader_test;
