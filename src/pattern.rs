// pattern.rs - Flag-adjusted patterns and their compiled matchers.
//
// A Pattern is built once per call from the raw pattern text and flag
// string, compiled once into a CompiledMatcher, and dropped with the call.
// Nothing here is cached across calls. Patterns and replacement templates
// follow ECMAScript syntax.

use std::borrow::Cow;
use std::ops::Range;

use memchr::memchr;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{FunctionError, Result};
use crate::flags::{interpret, FlagSet};

/// Pattern text after flag interpretation.
///
/// # Examples
///
/// ```
/// use bolton::pattern::Pattern;
///
/// let pat = Pattern::new(r"\d+ # digits", Some("x"));
/// assert_eq!(pat.as_str(), r"\d+#digits");
/// ```
#[derive(Debug, Clone)]
pub struct Pattern<'p> {
    text: Cow<'p, str>,
    flags: FlagSet,
}

impl<'p> Pattern<'p> {
    /// Resolve `flags` against `pattern`, rewriting it if `x` is present.
    pub fn new(pattern: &'p str, flags: Option<&str>) -> Pattern<'p> {
        let (flags, text) = interpret(flags, pattern);
        Pattern { text, flags }
    }

    /// The text handed to the engine.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }

    /// Compile into a matcher.
    ///
    /// An invalid FlagSet is rejected with [`FunctionError::InvalidFlag`]
    /// before the engine is touched. Engine failures become
    /// [`FunctionError::InvalidPattern`].
    pub fn compile(&self, config: &EngineConfig) -> Result<CompiledMatcher> {
        if self.flags.is_invalid() {
            return Err(FunctionError::InvalidFlag {
                flags: self.flags.rejected().iter().collect(),
            });
        }

        let engine_flags = config.engine_flags(self.flags.case_insensitive());
        let regex = regress::Regex::with_flags(&self.text, engine_flags.as_str()).map_err(|err| {
            debug!(pattern = %self.text, error = %err, "pattern rejected by engine");
            FunctionError::from(err)
        })?;

        Ok(CompiledMatcher {
            regex,
            source: self.text.clone().into_owned(),
            flags: self.flags.clone(),
        })
    }
}

/// A compiled, ready-to-search pattern.
///
/// Owned by a single call; holds no interior mutability visible to callers.
pub struct CompiledMatcher {
    regex: regress::Regex,
    source: String,
    flags: FlagSet,
}

impl CompiledMatcher {
    /// `true` if the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.find(text).is_some()
    }

    /// Replace every non-overlapping match in `text` with `replacement`.
    ///
    /// `replacement` is an ECMAScript template: `$&` is the whole match,
    /// `` $` `` and `$'` the text before and after it, `$1`..`$99` numbered
    /// groups, `$<name>` named groups and `$$` a literal dollar sign. A
    /// group reference takes at most two digits and only if that group
    /// exists, so with one group `$1x` is group 1 followed by `x` and `$10`
    /// is group 1 followed by `0`.
    pub fn replace_all(&self, text: &str, replacement: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for m in self.regex.find_iter(text) {
            let range = m.range();
            out.push_str(&text[last..range.start]);
            expand_template(&m, text, replacement, &mut out);
            last = range.end;
        }
        out.push_str(&text[last..]);
        out
    }

    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }

    /// The pattern as the engine sees it.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl std::fmt::Debug for CompiledMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledMatcher")
            .field("source", &self.source)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

/// Append `template` to `out`, substituting `$` references against `m`.
fn expand_template(m: &regress::Match, text: &str, template: &str, out: &mut String) {
    let bytes = template.as_bytes();
    let whole: Range<usize> = m.range();
    let group_count = m.captures.len();
    let mut rest = 0;

    while let Some(off) = memchr(b'$', &bytes[rest..]) {
        let at = rest + off;
        out.push_str(&template[rest..at]);
        let tail = &template[at + 1..];

        let consumed = match tail.as_bytes().first() {
            Some(b'$') => {
                out.push('$');
                1
            }
            Some(b'&') => {
                out.push_str(&text[whole.clone()]);
                1
            }
            Some(b'`') => {
                out.push_str(&text[..whole.start]);
                1
            }
            Some(b'\'') => {
                out.push_str(&text[whole.end..]);
                1
            }
            Some(b'0'..=b'9') => match group_reference(tail.as_bytes(), group_count) {
                Some((index, len)) => {
                    if let Some(group) = m.group(index) {
                        out.push_str(&text[group]);
                    }
                    len
                }
                None => {
                    out.push('$');
                    0
                }
            },
            Some(b'<') if m.named_groups().next().is_some() => match tail.find('>') {
                Some(close) => {
                    if let Some(group) = m.named_group(&tail[1..close]) {
                        out.push_str(&text[group]);
                    }
                    close + 1
                }
                None => {
                    out.push('$');
                    0
                }
            },
            _ => {
                out.push('$');
                0
            }
        };
        rest = at + 1 + consumed;
    }
    out.push_str(&template[rest..]);
}

/// Resolve `$n` / `$nn` against `group_count` groups.
///
/// Returns the group index and the number of digits consumed, preferring
/// two digits when that group exists.
fn group_reference(digits: &[u8], group_count: usize) -> Option<(usize, usize)> {
    let first = usize::from(digits[0] - b'0');
    if let Some(second) = digits.get(1).filter(|d| d.is_ascii_digit()) {
        let index = first * 10 + usize::from(second - b'0');
        if (1..=group_count).contains(&index) {
            return Some((index, 2));
        }
    }
    (1..=group_count).contains(&first).then_some((first, 1))
}
