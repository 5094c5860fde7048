//! Search subdomain: the pure filter engine.

pub mod filter;
