//! # Bolton
//!
//! Bolt-on scalar functions for SQL engines: regex matching, regex
//! substitution, and Levenshtein edit distance.
//!
//! The regex functions accept an optional flag string. `i` folds case and
//! `x` enables free-spacing patterns, where blanks and line comments outside
//! character classes are stripped before compilation. `m` and `g` are
//! accepted and ignored, `s` is accepted with a warning. Anything else is an
//! error.
//!
//! ## Quick Start
//!
//! ```rust
//! use bolton::prelude::*;
//!
//! let config = EngineConfig::default();
//! assert!(is_match(Some(r"\d{4}"), Some("year 2026"), None, &config).unwrap());
//!
//! let out = replace(Some("a  b   c"), Some(r"\s+"), Some(" "), None, &config).unwrap();
//! assert_eq!(out.as_deref(), Some("a b c"));
//! ```
//!
//! Free-spacing patterns:
//!
//! ```rust
//! use bolton::prelude::*;
//!
//! let pattern = "# a date\n\\d{4} - \\d{2}";
//! let config = EngineConfig::default();
//! assert!(is_match(Some(pattern), Some("on 2026-10"), Some("x"), &config).unwrap());
//! ```
//!
//! ## Host Binding
//!
//! A host engine dispatches through a [`FunctionRegistry`]:
//!
//! ```rust
//! use bolton::prelude::*;
//!
//! let registry = FunctionRegistry::with_bolt_on_functions(EngineConfig::default());
//! let out = registry
//!     .call("regex_replace", &["Cherry Pepper".into(), "p+".into(), "P".into(), "i".into()])
//!     .unwrap();
//! assert_eq!(out, Value::from("Cherry PePer"));
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`flags`] | Flag parsing and the free-spacing rewrite |
//! | [`pattern`] | Flag-adjusted patterns and compiled matchers |
//! | [`functions`] | `regexp` and `regex_replace` |
//! | [`levenshtein`] | `levenshtein` |
//! | [`registry`] | Name/arity table for host dispatch |
//! | [`value`] | Dynamic SQL values |
//! | [`config`] | Engine flags (unicode mode) |
//! | [`error`] | Error type |
//!
//! [`FunctionRegistry`]: registry::FunctionRegistry

pub mod config;
pub mod error;
pub mod flags;
pub mod functions;
pub mod levenshtein;
pub mod pattern;
pub mod prelude;
pub mod registry;
pub mod value;
