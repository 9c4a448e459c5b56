// functions.rs - The REGEXP predicate and REGEX_REPLACE transform.
//
// Each call interprets its flags once, compiles once, runs once, and drops
// everything it built. Absent text operands are not errors: REGEXP answers
// FALSE and REGEX_REPLACE answers NULL.

use std::ops::RangeInclusive;

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{FunctionError, Result};
use crate::pattern::Pattern;
use crate::registry::ScalarFunction;
use crate::value::Value;

const REGEXP_ARITY: RangeInclusive<usize> = 2..=3;
const REGEX_REPLACE_ARITY: RangeInclusive<usize> = 3..=4;

/// Does `value` contain a match for `pattern`?
///
/// Search is unanchored. An absent `pattern` or `value` yields `false`.
///
/// # Examples
///
/// ```
/// use bolton::config::EngineConfig;
/// use bolton::functions::is_match;
///
/// let config = EngineConfig::default();
/// assert!(is_match(Some("b+"), Some("abbc"), None, &config).unwrap());
/// assert!(is_match(Some("ABC"), Some("xabcx"), Some("i"), &config).unwrap());
/// assert!(!is_match(None, Some("abc"), None, &config).unwrap());
/// ```
pub fn is_match(
    pattern: Option<&str>,
    value: Option<&str>,
    flags: Option<&str>,
    config: &EngineConfig,
) -> Result<bool> {
    let (Some(pattern), Some(value)) = (pattern, value) else {
        return Ok(false);
    };
    let matcher = Pattern::new(pattern, flags).compile(config)?;
    Ok(matcher.is_match(value))
}

/// Replace every match of `pattern` in `value` with `replacement`.
///
/// Replacement is always global; the `g` flag changes nothing. If any of
/// `value`, `pattern` or `replacement` is absent the result is `None`.
///
/// # Examples
///
/// ```
/// use bolton::config::EngineConfig;
/// use bolton::functions::replace;
///
/// let config = EngineConfig::default();
/// let out = replace(Some("Apple pie"), Some("p+"), Some("P"), Some("i"), &config).unwrap();
/// assert_eq!(out.as_deref(), Some("APle Pie"));
/// ```
pub fn replace(
    value: Option<&str>,
    pattern: Option<&str>,
    replacement: Option<&str>,
    flags: Option<&str>,
    config: &EngineConfig,
) -> Result<Option<String>> {
    let (Some(value), Some(pattern), Some(replacement)) = (value, pattern, replacement) else {
        return Ok(None);
    };
    let matcher = Pattern::new(pattern, flags).compile(config)?;
    Ok(Some(matcher.replace_all(value, replacement)))
}

fn check_arity(
    function: &'static str,
    expected: RangeInclusive<usize>,
    args: &[Value],
) -> Result<()> {
    if expected.contains(&args.len()) {
        Ok(())
    } else {
        debug!(function, got = args.len(), "wrong argument count");
        Err(FunctionError::Arity { function, expected })
    }
}

/// `regexp(PATTERN, VALUE [, FLAGS])`: 1 on match, 0 otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexpFunc {
    config: EngineConfig,
}

impl RegexpFunc {
    pub fn new(config: EngineConfig) -> Self {
        RegexpFunc { config }
    }
}

impl ScalarFunction for RegexpFunc {
    fn name(&self) -> &'static str {
        "regexp"
    }

    fn arity(&self) -> RangeInclusive<usize> {
        REGEXP_ARITY
    }

    fn invoke(&self, args: &[Value]) -> Result<Value> {
        check_arity(self.name(), self.arity(), args)?;
        let pattern = args[0].as_text();
        let value = args[1].as_text();
        let flags = args.get(2).and_then(Value::as_text);
        let hit = is_match(
            pattern.as_deref(),
            value.as_deref(),
            flags.as_deref(),
            &self.config,
        )?;
        Ok(Value::from(hit))
    }
}

/// `regex_replace(VALUE, PATTERN, REPLACEMENT [, FLAGS])`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexReplaceFunc {
    config: EngineConfig,
}

impl RegexReplaceFunc {
    pub fn new(config: EngineConfig) -> Self {
        RegexReplaceFunc { config }
    }
}

impl ScalarFunction for RegexReplaceFunc {
    fn name(&self) -> &'static str {
        "regex_replace"
    }

    fn arity(&self) -> RangeInclusive<usize> {
        REGEX_REPLACE_ARITY
    }

    fn invoke(&self, args: &[Value]) -> Result<Value> {
        check_arity(self.name(), self.arity(), args)?;
        let value = args[0].as_text();
        let pattern = args[1].as_text();
        let replacement = args[2].as_text();
        let flags = args.get(3).and_then(Value::as_text);
        let out = replace(
            value.as_deref(),
            pattern.as_deref(),
            replacement.as_deref(),
            flags.as_deref(),
            &self.config,
        )?;
        Ok(Value::from(out))
    }
}
