//! Utility core for component rendering.
//!
//! Three independent, stateless facilities:
//!
//! - [`sampler`]: weighted random sampling over arbitrary value sets,
//!   built once into an immutable flattened pool and drawn from with an
//!   injected RNG.
//! - [`signature`]: best-effort extraction of a callable's declared
//!   parameter names from its source text.
//! - [`validate`]: predicate-driven validation that every item in a list
//!   is a renderable component shape.
//!
//! None of these perform I/O; the validator's diagnostics go through the
//! `log` facade and never affect results.

pub mod errors;
pub mod sampler;
pub mod signature;
pub mod validate;

// Re-export commonly used types
pub use crate::errors::SamplerError;
pub use crate::sampler::{RawEntry, WeightedEntry, WeightedSampler};
pub use crate::signature::{extract_parameter_names, strip_comments};
pub use crate::validate::{is_valid_component_list, ShapeClassifier, ShapeKind};
