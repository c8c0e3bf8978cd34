//! contactbook_core - domain types and storage contracts shared by the
//! contactbook server and client.
//!
//! Following the Functional Core pattern, nothing in this crate performs I/O.

pub mod contact;
pub mod problem;
pub mod storage;
