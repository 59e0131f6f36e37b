//! Generator configuration.

use inlinegen_compose::ComposeOptions;
use inlinegen_model::{DelegatePolicy, Validator};

/// Settings for a [`Generator`](crate::Generator).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Spaces per indentation level in generated source.
    pub indent_width: usize,

    /// What to do when delegated interfaces have nothing to delegate.
    pub delegate_policy: DelegatePolicy,

    /// Process declarations on the rayon pool.
    pub parallel: bool,

    /// Emit the shared support unit when any unit is generated.
    pub emit_support_unit: bool,

    /// Reuse results for declarations unchanged since the previous pass.
    pub cache: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            delegate_policy: DelegatePolicy::Downgrade,
            parallel: false,
            emit_support_unit: true,
            cache: true,
        }
    }
}

impl GeneratorConfig {
    /// Reports delegate misuse as an error instead of downgrading.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            delegate_policy: DelegatePolicy::Diagnose,
            ..Self::default()
        }
    }

    /// Parallel processing, for large snapshots.
    #[must_use]
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Self::default()
        }
    }

    /// No caching and no support unit; every pass starts from scratch.
    #[must_use]
    pub fn isolated() -> Self {
        Self {
            emit_support_unit: false,
            cache: false,
            ..Self::default()
        }
    }

    /// Builder method to set the indent width.
    #[must_use]
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Builder method to set the delegate policy.
    #[must_use]
    pub fn with_delegate_policy(mut self, delegate_policy: DelegatePolicy) -> Self {
        self.delegate_policy = delegate_policy;
        self
    }

    /// Builder method to enable or disable parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builder method to enable or disable the support unit.
    #[must_use]
    pub fn with_support_unit(mut self, emit: bool) -> Self {
        self.emit_support_unit = emit;
        self
    }

    /// Builder method to enable or disable the cache.
    #[must_use]
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    /// Composer options derived from this configuration.
    #[must_use]
    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            indent_width: self.indent_width,
        }
    }

    /// Validator derived from this configuration.
    #[must_use]
    pub fn validator(&self) -> Validator {
        Validator::new(self.delegate_policy)
    }

    /// The settings that affect per-declaration output.
    #[must_use]
    pub fn fingerprint(&self) -> ConfigFingerprint {
        ConfigFingerprint {
            indent_width: self.indent_width,
            delegate_policy: self.delegate_policy,
        }
    }
}

/// The part of a configuration a cached result depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConfigFingerprint {
    indent_width: usize,
    delegate_policy: DelegatePolicy,
}
