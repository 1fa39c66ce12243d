//! Test helpers module
//!
//! This module provides utilities and helpers for testing the university
//! schedule service: a disposable database and request builders.

#![allow(dead_code)]

pub mod database_helper;
pub mod test_data;

pub use database_helper::*;
pub use test_data::*;

/// Get a clean test database or skip the current test
macro_rules! require_database {
    () => {
        match crate::helpers::TestDatabase::try_new().await {
            Some(db) => db,
            None => return,
        }
    };
}
