//! Test harness for the relief generation pipeline.
//!
//! Provides image and mask constructors, mesh math, an ASCII STL
//! parsing oracle, and assertion helpers shared by the integration
//! suites in `tests/`.
//!
//! # Key Components
//!
//! - [`helpers`] — input constructors and mesh math
//! - [`oracle`] — STL parsing and verification verdicts
//! - [`assertions`] — assertion helpers with diagnostic output

pub mod assertions;
pub mod helpers;
pub mod oracle;

pub use helpers::HarnessError;
pub use oracle::{parse_ascii_stl, OracleVerdict, StlFacet};
