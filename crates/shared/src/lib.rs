//! Shared domain and wire types for the TripTactix desktop client.

pub mod domain;
pub mod protocol;
