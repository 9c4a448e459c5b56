// config.rs - Engine switches applied to every matcher.

/// Settings forwarded to the regex engine on every compile.
///
/// The default leaves the ECMAScript `u` flag off. Ordinary patterns such
/// as `a.c` or `[^x]` behave the same either way.
///
/// # Examples
///
/// ```
/// use bolton::config::EngineConfig;
///
/// let config = EngineConfig::new().unicode(true);
/// assert!(config.get_unicode());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    unicode: bool,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile with ECMAScript's `u` flag.
    ///
    /// Unicode mode enables `\u{...}` escapes and is strict about identity
    /// escapes, so prefer `[ ]` over `\ ` for a literal blank in a
    /// free-spacing pattern.
    pub fn unicode(mut self, yes: bool) -> Self {
        self.unicode = yes;
        self
    }

    pub fn get_unicode(&self) -> bool {
        self.unicode
    }

    /// Engine flag string for a pattern compiled with these settings.
    pub(crate) fn engine_flags(&self, case_insensitive: bool) -> String {
        let mut flags = String::with_capacity(2);
        if case_insensitive {
            flags.push('i');
        }
        if self.unicode {
            flags.push('u');
        }
        flags
    }
}
