//! Port adapters backed by fixture documents

pub mod portal;

pub use portal::FixturePortalAdapter;
