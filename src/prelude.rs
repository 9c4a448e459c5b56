// prelude.rs - Convenient re-exports.
//
//! # Prelude
//!
//! ```
//! use bolton::prelude::*;
//!
//! let config = EngineConfig::default();
//! assert!(is_match(Some("42"), Some("answer: 42"), None, &config).unwrap());
//! ```

pub use crate::config::EngineConfig;
pub use crate::error::FunctionError;
pub use crate::flags::{interpret, FlagSet, Options};
pub use crate::functions::{is_match, replace, RegexReplaceFunc, RegexpFunc};
pub use crate::levenshtein::{edit_distance, levenshtein, LevenshteinFunc};
pub use crate::pattern::{CompiledMatcher, Pattern};
pub use crate::registry::{register_bolt_on_functions, FunctionRegistry, ScalarFunction};
pub use crate::value::Value;
