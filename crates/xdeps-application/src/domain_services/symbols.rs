//! Symbol classification
//!
//! Combines the referenceability filter and the package-descriptor
//! extractor so that a descriptor can only be produced for a symbol that
//! passed the filter.

use std::sync::Arc;
use xdeps_domain::error::{Error, Result};
use xdeps_domain::ports::providers::SymbolSemantics;
use xdeps_domain::value_objects::{PackageDescriptor, SymbolDescriptor};

/// Outcome of classifying a resolved symbol
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolClass {
    /// Locals, private members and the like; never has cross-repo dependents
    Unreferenceable,
    /// Exported symbol with its package identity
    Package(PackageDescriptor),
}

/// Applies per-language symbol rules
#[derive(Clone)]
pub struct SymbolClassifier {
    semantics: Arc<dyn SymbolSemantics>,
}

impl SymbolClassifier {
    /// Create a classifier over the language rules
    pub fn new(semantics: Arc<dyn SymbolSemantics>) -> Self {
        Self { semantics }
    }

    /// Classify `symbol`
    ///
    /// A referenceable symbol without a package descriptor is reported as
    /// `DescriptorUnavailable` rather than treated as unreferenceable.
    pub fn classify(&self, language: &str, symbol: &SymbolDescriptor) -> Result<SymbolClass> {
        if !self.semantics.is_referenceable(language, symbol) {
            return Ok(SymbolClass::Unreferenceable);
        }
        self.semantics
            .package_descriptor(symbol, language)
            .map(SymbolClass::Package)
            .ok_or_else(|| Error::descriptor_unavailable(language, symbol.to_string()))
    }
}
