//! Manifest Tests

mod bootstrap_test;
