// levenshtein.rs - Edit distance between two strings.
//
// Classic two-row dynamic programme over UTF-8 bytes, so a two-byte
// character against its one-byte neighbour costs two edits. Both rows
// are sized `len(b) + 1` and swapped after every outer step; they are
// reserved fallibly so an oversized input reports OutOfMemory instead of
// aborting the host.

use std::mem;
use std::ops::RangeInclusive;

use crate::error::{FunctionError, Result};
use crate::registry::ScalarFunction;
use crate::value::Value;

/// Levenshtein distance between `a` and `b`, or `None` if either is absent.
///
/// # Examples
///
/// ```
/// use bolton::levenshtein::levenshtein;
///
/// assert_eq!(levenshtein(Some("kitten"), Some("sitting")).unwrap(), Some(3));
/// assert_eq!(levenshtein(None, Some("x")).unwrap(), None);
/// ```
pub fn levenshtein(a: Option<&str>, b: Option<&str>) -> Result<Option<usize>> {
    match (a, b) {
        (Some(a), Some(b)) => edit_distance(a, b).map(Some),
        _ => Ok(None),
    }
}

/// Levenshtein distance between two present strings.
pub fn edit_distance(a: &str, b: &str) -> Result<usize> {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.is_empty() {
        return Ok(b.len());
    }
    if b.is_empty() {
        return Ok(a.len());
    }

    let width = b.len() + 1;

    let mut prev = Vec::new();
    prev.try_reserve_exact(width)?;
    prev.extend(0..width);
    let mut curr = Vec::new();
    curr.try_reserve_exact(width)?;
    curr.resize(width, 0usize);

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        mem::swap(&mut prev, &mut curr);
    }

    Ok(prev[b.len()])
}

/// `levenshtein(A, B)` as a scalar function.
#[derive(Debug, Default, Clone, Copy)]
pub struct LevenshteinFunc;

impl ScalarFunction for LevenshteinFunc {
    fn name(&self) -> &'static str {
        "levenshtein"
    }

    fn arity(&self) -> RangeInclusive<usize> {
        2..=2
    }

    fn invoke(&self, args: &[Value]) -> Result<Value> {
        if !self.arity().contains(&args.len()) {
            return Err(FunctionError::Arity {
                function: self.name(),
                expected: self.arity(),
            });
        }
        let a = args[0].as_text();
        let b = args[1].as_text();
        let distance = levenshtein(a.as_deref(), b.as_deref())?;
        Ok(distance
            .map(|d| Value::Integer(i64::try_from(d).unwrap_or(i64::MAX)))
            .unwrap_or(Value::Null))
    }
}
