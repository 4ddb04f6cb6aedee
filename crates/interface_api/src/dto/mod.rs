//! Response views and query parameters

pub mod claims;
pub mod policy;
pub mod summary;
