//! Generation passes.
//!
//! A pass is a pure function of the snapshot and the configuration. The
//! generator keeps results from the previous pass so that declarations
//! which did not change are not validated or composed again.

use inlinegen_compose::{Composer, GeneratedUnit};
use inlinegen_foundation::{CancellationToken, Diagnostic, Result};
use inlinegen_model::{DeclarationId, Descriptor, RawDeclaration, Validator};
use inlinegen_usage::{LengthMap, UsageChecker};
use rayon::prelude::*;
use tracing::{debug, info, trace, warn};

use crate::config::{ConfigFingerprint, GeneratorConfig};
use crate::snapshot::Snapshot;

/// Everything a pass produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationOutput {
    /// Declaration diagnostics in snapshot order, then site diagnostics in
    /// site order.
    pub diagnostics: Vec<Diagnostic>,
    /// Generated units ordered by declaration identity, then the support unit.
    pub units: Vec<GeneratedUnit>,
    /// Counters for the pass.
    pub stats: PassStats,
}

impl GenerationOutput {
    /// Returns true if any error diagnostic was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }

    /// The unit generated for a declaration, if any.
    #[must_use]
    pub fn unit_for(&self, id: &DeclarationId) -> Option<&GeneratedUnit> {
        self.units.iter().find(|u| u.id.as_ref() == Some(id))
    }
}

/// Counters for one pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Declarations in the snapshot.
    pub declarations: usize,
    /// Declarations that passed validation.
    pub valid: usize,
    /// Declarations served from the cache.
    pub cache_hits: usize,
    /// Construction sites checked.
    pub sites: usize,
}

#[derive(Clone, Debug)]
struct Processed {
    descriptor: Descriptor,
    unit: Option<GeneratedUnit>,
}

#[derive(Clone, Debug)]
struct CacheEntry {
    declaration: RawDeclaration,
    fingerprint: ConfigFingerprint,
    processed: Processed,
}

/// Runs generation passes.
#[derive(Clone, Debug)]
pub struct Generator {
    config: GeneratorConfig,
    composer: Composer,
    cache: im::HashMap<DeclarationId, CacheEntry>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Generator {
    /// Creates a generator with an empty cache.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            composer: Composer::new(config.compose_options()),
            cache: im::HashMap::new(),
        }
    }

    /// The generator's configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Number of declarations remembered from the previous pass.
    #[must_use]
    pub fn cached_declarations(&self) -> usize {
        self.cache.len()
    }

    /// Forgets every cached result.
    pub fn clear_cache(&mut self) {
        self.cache = im::HashMap::new();
    }

    /// Runs one pass over a snapshot.
    ///
    /// # Errors
    ///
    /// Returns a malformed-input error if the snapshot violates the input
    /// contract, or a cancellation error if `cancel` fires before the pass
    /// completes. No partial output is returned and the cache is untouched.
    pub fn run(
        &mut self,
        snapshot: &Snapshot,
        cancel: &CancellationToken,
    ) -> Result<GenerationOutput> {
        cancel.check()?;
        snapshot.check_contract()?;

        let validator = self.config.validator();
        let fingerprint = self.config.fingerprint();
        let step = |decl: &RawDeclaration| -> Result<(Processed, bool)> {
            cancel.check()?;
            self.process(decl, &validator, fingerprint)
        };

        let processed: Vec<(Processed, bool)> = if self.config.parallel {
            snapshot
                .declarations
                .par_iter()
                .map(step)
                .collect::<Result<_>>()?
        } else {
            snapshot
                .declarations
                .iter()
                .map(step)
                .collect::<Result<_>>()?
        };

        // Usage checks need every declaration of the pass.
        let lengths: LengthMap = processed
            .iter()
            .filter_map(|(p, _)| p.descriptor.as_valid())
            .collect();
        let checker = UsageChecker::new(lengths);

        let mut diagnostics: Vec<Diagnostic> = processed
            .iter()
            .flat_map(|(p, _)| p.descriptor.diagnostics().iter().cloned())
            .collect();
        for site in &snapshot.sites {
            cancel.check()?;
            diagnostics.extend(checker.check(site));
        }

        let mut units: Vec<GeneratedUnit> = processed
            .iter()
            .filter_map(|(p, _)| p.unit.clone())
            .collect();
        units.sort_by(|a, b| a.id.cmp(&b.id));
        if self.config.emit_support_unit && !units.is_empty() {
            units.push(self.composer.compose_support()?);
        }

        let stats = PassStats {
            declarations: snapshot.declarations.len(),
            valid: checker.lengths().len(),
            cache_hits: processed.iter().filter(|(_, hit)| *hit).count(),
            sites: snapshot.sites.len(),
        };

        self.cache = if self.config.cache {
            snapshot
                .declarations
                .iter()
                .zip(processed)
                .map(|(decl, (processed, _))| {
                    let entry = CacheEntry {
                        declaration: decl.clone(),
                        fingerprint,
                        processed,
                    };
                    (decl.id.clone(), entry)
                })
                .collect()
        } else {
            im::HashMap::new()
        };

        info!(
            declarations = stats.declarations,
            valid = stats.valid,
            units = units.len(),
            diagnostics = diagnostics.len(),
            cache_hits = stats.cache_hits,
            "generation pass complete"
        );

        Ok(GenerationOutput {
            diagnostics,
            units,
            stats,
        })
    }

    /// Validates and composes one declaration, or reuses the cached result.
    /// The flag is true on a cache hit.
    fn process(
        &self,
        decl: &RawDeclaration,
        validator: &Validator,
        fingerprint: ConfigFingerprint,
    ) -> Result<(Processed, bool)> {
        if self.config.cache {
            if let Some(entry) = self.cache.get(&decl.id) {
                if entry.fingerprint == fingerprint && entry.declaration == *decl {
                    trace!(declaration = %decl.id, "cache hit");
                    return Ok((entry.processed.clone(), true));
                }
            }
        }

        let descriptor = Descriptor::build(decl, validator);
        let unit = match &descriptor {
            Descriptor::Valid(valid) => {
                if valid.dropped_delegate() {
                    warn!(
                        declaration = %decl.id,
                        "delegated interfaces requested without any interface option; ignoring"
                    );
                }
                Some(self.composer.compose(valid)?)
            }
            Descriptor::Rejected(rejected) => {
                debug!(
                    declaration = %decl.id,
                    diagnostics = rejected.diagnostics.len(),
                    "skipping composition"
                );
                None
            }
        };

        Ok((Processed { descriptor, unit }, false))
    }
}
