// flags.rs - Flag string interpretation and the extended-mode rewrite.
//
// A flag string such as "ix" is folded character by character into a
// FlagSet. When `x` is present the pattern is rewritten once, stripping
// whitespace and line comments outside character classes, before it is
// handed to the engine.

use std::borrow::Cow;

use bitflags::bitflags;
use memchr::memchr;
use smallvec::SmallVec;
use tracing::warn;

bitflags! {
    /// Recognized flag options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Options: u8 {
        /// `i`: case-insensitive matching.
        const CASE_INSENSITIVE = 1;
        /// `m`: accepted, no effect.
        const MULTILINE = 1 << 1;
        /// `g`: accepted, no effect. Replacement is always global.
        const GLOBAL = 1 << 2;
        /// `s`: accepted with a warning, no effect.
        const DOT_MATCHES_NEWLINE = 1 << 3;
        /// `x`: free-spacing rewrite of the pattern.
        const EXTENDED = 1 << 4;
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::empty()
    }
}

impl Options {
    /// Map a single flag character to its option, or `None` if unknown.
    pub fn from_flag_char(c: char) -> Option<Options> {
        match c {
            'i' => Some(Options::CASE_INSENSITIVE),
            'm' => Some(Options::MULTILINE),
            'g' => Some(Options::GLOBAL),
            's' => Some(Options::DOT_MATCHES_NEWLINE),
            'x' => Some(Options::EXTENDED),
            _ => None,
        }
    }
}

/// Options resolved from a flag string.
///
/// The set is invalid if any character of the flag string was unknown; the
/// offending characters are kept for the error message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    options: Options,
    rejected: SmallVec<[char; 4]>,
}

impl FlagSet {
    /// Fold a flag string into a FlagSet. Every character is scanned, even
    /// after an unknown one has been seen.
    pub fn parse(flags: &str) -> FlagSet {
        flags.chars().fold(FlagSet::default(), |mut set, c| {
            match Options::from_flag_char(c) {
                Some(opt) => {
                    if opt == Options::DOT_MATCHES_NEWLINE {
                        warn!("'s' flag (dot matches newline) is not supported and has no effect");
                    }
                    set.options |= opt;
                }
                None => set.rejected.push(c),
            }
            set
        })
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn is_invalid(&self) -> bool {
        !self.rejected.is_empty()
    }

    /// Unknown characters in the order they appeared.
    pub fn rejected(&self) -> &[char] {
        &self.rejected
    }

    pub fn case_insensitive(&self) -> bool {
        self.options.contains(Options::CASE_INSENSITIVE)
    }

    pub fn multiline(&self) -> bool {
        self.options.contains(Options::MULTILINE)
    }

    pub fn global(&self) -> bool {
        self.options.contains(Options::GLOBAL)
    }

    pub fn dot_matches_newline(&self) -> bool {
        self.options.contains(Options::DOT_MATCHES_NEWLINE)
    }

    pub fn extended(&self) -> bool {
        self.options.contains(Options::EXTENDED)
    }
}

/// Resolve `flags` and apply the extended rewrite to `pattern` if requested.
///
/// An absent or empty flag string yields an empty FlagSet and the pattern
/// unchanged. This never fails; unknown flags only mark the set invalid.
pub fn interpret<'p>(flags: Option<&str>, pattern: &'p str) -> (FlagSet, Cow<'p, str>) {
    let set = match flags {
        Some(flags) if !flags.is_empty() => FlagSet::parse(flags),
        _ => return (FlagSet::default(), Cow::Borrowed(pattern)),
    };
    let pattern = if set.extended() {
        Cow::Owned(strip_extended(pattern))
    } else {
        Cow::Borrowed(pattern)
    };
    (set, pattern)
}

/// Strip free-spacing whitespace and line comments from `pattern`.
///
/// Whitespace (space, tab, newline) outside `[...]` is dropped. A `#`
/// outside a class starts a comment only when it is the first character of
/// the pattern or directly follows a newline in the *source* text; a `#`
/// preceded by stripped blanks on the same line stays literal. Escaped
/// characters are always copied.
pub fn strip_extended(pattern: &str) -> String {
    let bytes = pattern.as_bytes();
    let mut out = String::with_capacity(pattern.len());
    let mut in_class = false;
    let mut escaping = false;
    let mut pos = 0;

    while let Some(c) = pattern[pos..].chars().next() {
        let i = pos;
        pos += c.len_utf8();

        if escaping {
            out.push(c);
            escaping = false;
            continue;
        }
        match c {
            '\\' => {
                out.push(c);
                escaping = true;
            }
            '[' => {
                in_class = true;
                out.push(c);
            }
            ']' => {
                in_class = false;
                out.push(c);
            }
            ' ' | '\t' | '\n' if !in_class => {}
            '#' if !in_class && (i == 0 || bytes[i - 1] == b'\n') => {
                // Resume at the newline, which is dropped as whitespace.
                pos = memchr(b'\n', &bytes[i..]).map_or(bytes.len(), |off| i + off);
            }
            _ => out.push(c),
        }
    }
    out
}
