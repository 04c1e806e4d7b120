//! Rule configuration.

/// Configuration for the operator-spacing rule.
///
/// The host reads the switch from its own settings; the rule only consults
/// it before touching the source.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct LintConfig {
    /// When `false`, every check returns immediately with no diagnostics.
    pub enabled: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        LintConfig { enabled: true }
    }
}

impl LintConfig {
    /// A config with the rule switched off.
    pub const fn disabled() -> Self {
        LintConfig { enabled: false }
    }

    /// Set the enable switch.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
