//! Browser-adjacent utilities.

pub mod storage;
