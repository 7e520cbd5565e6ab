//! Definition lookup
//!
//! Translates a request position into one `textDocument/xdefinition` call
//! against the authorized workspace root.
//!
//! When the backend returns several candidates only the first is used.

use crate::context::RequestContext;
use std::sync::Arc;
use tracing::debug;
use xdeps_domain::constants::METHOD_XDEFINITION;
use xdeps_domain::error::{Error, Result};
use xdeps_domain::ports::providers::DefinitionResolver;
use xdeps_domain::value_objects::{AuthorizedRepository, SymbolLocation, SymbolPosition};

/// Resolves the definition behind a symbol occurrence
#[derive(Clone)]
pub struct DefinitionLocator {
    resolver: Arc<dyn DefinitionResolver>,
}

impl DefinitionLocator {
    /// Create a locator over the language backend
    pub fn new(resolver: Arc<dyn DefinitionResolver>) -> Self {
        Self { resolver }
    }

    /// Resolve the definition of the symbol at `op` inside `repo`
    ///
    /// Zero candidates is a `ResolutionFailed` error.
    pub async fn locate(
        &self,
        ctx: &RequestContext,
        repo: &AuthorizedRepository,
        op: &SymbolPosition,
    ) -> Result<SymbolLocation> {
        let document = repo.root(&op.commit_id).document(&op.file);

        let locations = ctx
            .run(
                METHOD_XDEFINITION,
                self.resolver
                    .resolve_cross_repo_definition(&op.language, &document, op.position()),
            )
            .await
            .map_err(|e| e.into_resolution_failure(format!("LSP {METHOD_XDEFINITION} {document}")))?;

        let candidates = locations.len();
        let Some(location) = locations.into_iter().next() else {
            return Err(Error::resolution(format!(
                "{METHOD_XDEFINITION} returned zero locations for {document} at {}:{}",
                op.line, op.character
            )));
        };
        // TODO: aggregate references over every candidate location
        if candidates > 1 {
            debug!(
                document = %document,
                candidates,
                "multiple definition locations returned, using the first"
            );
        }
        Ok(location)
    }
}
