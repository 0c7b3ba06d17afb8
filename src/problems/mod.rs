//! Problem implementations for the layered DP engine.
//!
//! - [`run_bound`]: minimum-deviation repair of a partially fixed binary
//!   string so that no run reaches length `k`.

pub mod run_bound;
