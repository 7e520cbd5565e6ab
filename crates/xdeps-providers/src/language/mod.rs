//! Language Backend Implementations
//!
//! | Provider | Ports | Description |
//! |----------|-------|-------------|
//! | [`LspGatewayClient`] | `DefinitionResolver`, `DependencyCrawler` | JSON-RPC over HTTP to a language gateway |
//! | [`NullLanguageBackend`] | `DefinitionResolver`, `DependencyCrawler` | Resolves nothing, crawls nothing |
//! | [`LanguageSemantics`] | `SymbolSemantics` | Built-in per-language visibility rules |

pub mod lsp_gateway;
pub mod null;
pub mod semantics;

pub use lsp_gateway::LspGatewayClient;
pub use null::NullLanguageBackend;
pub use semantics::LanguageSemantics;
