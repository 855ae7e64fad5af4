//! Route generation between grid features

/// Manhattan route decomposition into unit moves
pub mod route;

pub use route::Route;
