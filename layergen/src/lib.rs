//! layergen library
//!
//! The generation engine behind the `layergen` CLI: identifier case
//! conversion, fill-data derivation, template rendering and multi-file
//! orchestration.
//!
//! # Example
//!
//! ```rust,no_run
//! use layergen::scaffold::{GenerationSpec, Orchestrator, TemplateBundle};
//!
//! # fn main() -> layergen::Result<()> {
//! let bundle = TemplateBundle::builtin();
//! let spec = GenerationSpec::parse("full", "product", "catalog", false)?;
//! for file in Orchestrator::new(&bundle, ".").generate(&spec)? {
//!     println!("{}", file.path.display());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;

pub use config::GeneratorConfig;
pub use error::{GenerateError, Result};
pub use scaffold::{GenerationSpec, Orchestrator, TemplateBundle};
