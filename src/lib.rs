//! Anytime maximum clique solver (branch & bound with a greedy coloring bound)

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// graph instance base trait and clique checker
pub mod instance;

/// read DIMACS instances
pub mod dimacs;

/// error types
pub mod error;

/// helper and utility methods for executables
pub mod util;

/// maximum clique search
pub mod search;
