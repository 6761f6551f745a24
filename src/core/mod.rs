//! Core modules for the Sigur parameter-store tooling.
//!
//! The write path is `settings` -> `apply` -> `store`; `db` owns connection
//! setup and `schemas` holds the fixture DDL for the vendor tables.

pub mod apply;
pub mod db;
pub mod error;
pub mod output;
pub mod schemas;
pub mod settings;
pub mod store;
