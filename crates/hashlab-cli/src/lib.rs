//! Console demonstrations of SHA-256 hash-function properties
//!
//! The interactive menu binary lives in `main.rs`; the sequential
//! resistance suite in `bin/resistance.rs`. Both render results computed
//! by the `hashlab` library.

pub mod avalanche;
pub mod console;
pub mod preimage;
