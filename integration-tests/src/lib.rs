//! Shared test models for climstep integration tests.

pub mod test_models;
