//! Core domain types and storage abstractions for the trinket project.

pub mod item;
pub mod storage;
