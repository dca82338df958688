//! Utility functions shared by the query components

pub mod sql;
pub mod url;
