//! Configuration for the builtin table.

/// Configuration for the builtin table.
///
/// Controls which function groups are registered and how `gamma` resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Register the math functions (`sin`, `log`, `lgamma_r`, ...).
    pub math_functions: bool,

    /// Register the `_`-prefixed helpers such as `_type_error`.
    pub internal_functions: bool,

    /// Make `gamma` the true Gamma function instead of an alias of `lgamma`.
    pub legacy_gamma: bool,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            math_functions: true,
            internal_functions: true,
            legacy_gamma: false,
        }
    }
}

impl LibraryConfig {
    /// Creates a configuration without the math table.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            math_functions: false,
            ..Self::default()
        }
    }

    /// Creates a configuration where `gamma` is the true Gamma function.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            legacy_gamma: true,
            ..Self::default()
        }
    }

    /// Builder method to enable/disable the math table.
    #[must_use]
    pub fn with_math_functions(mut self, enabled: bool) -> Self {
        self.math_functions = enabled;
        self
    }

    /// Builder method to enable/disable internal helpers.
    #[must_use]
    pub fn with_internal_functions(mut self, enabled: bool) -> Self {
        self.internal_functions = enabled;
        self
    }

    /// Builder method to choose the `gamma` aliasing.
    #[must_use]
    pub fn with_legacy_gamma(mut self, legacy: bool) -> Self {
        self.legacy_gamma = legacy;
        self
    }
}
