//! Language gateway client
//!
//! Talks JSON-RPC 2.0 over HTTP to a language-analysis gateway that fronts
//! the per-language servers. Each call is a one-shot session sent as a
//! single batch:
//!
//! ```text
//! [ initialize{rootPath, mode}, <method>{params}, shutdown, exit ]
//! ```
//!
//! The gateway has unchecked read access to every repository, so the
//! workspace roots and documents passed here are the authorized
//! [`WorkspaceRoot`]/[`DocumentUri`] types only.

use crate::constants::{CONTENT_TYPE_JSON, JSONRPC_PAYLOAD_ID, JSONRPC_VERSION};
use crate::utils::HttpResponseUtils;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;
use xdeps_domain::constants::{METHOD_XDEFINITION, METHOD_XDEPENDENCIES, METHOD_XPACKAGES};
use xdeps_domain::error::{Error, Result};
use xdeps_domain::ports::providers::{DefinitionResolver, DependencyCrawler};
use xdeps_domain::value_objects::{
    DocumentUri, PackageInformation, Position, SymbolLocation, WorkspaceDependency, WorkspaceRoot,
};

const PROVIDER_NAME: &str = "LSP gateway";

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

/// JSON-RPC client for the language gateway
///
/// ## Example
///
/// ```rust,no_run
/// use xdeps_providers::language::LspGatewayClient;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// let client = LspGatewayClient::new(
///     "http://127.0.0.1:4388/xlang".to_string(),
///     Duration::from_secs(30),
///     Client::new(),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LspGatewayClient {
    endpoint: String,
    timeout: Duration,
    http_client: Client,
}

impl LspGatewayClient {
    /// Create a new gateway client
    ///
    /// # Arguments
    /// * `endpoint` - Gateway URL accepting JSON-RPC batches
    /// * `timeout` - Per-call timeout
    /// * `http_client` - Reqwest HTTP client
    pub fn new(endpoint: String, timeout: Duration, http_client: Client) -> Self {
        Self {
            endpoint,
            timeout,
            http_client,
        }
    }

    /// Gateway endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Batch body for one method call inside a fresh session
    pub fn session_batch(mode: &str, root: &str, method: &str, params: Value) -> Value {
        json!([
            {
                "jsonrpc": JSONRPC_VERSION,
                "id": 0,
                "method": "initialize",
                "params": {"rootPath": root, "rootUri": root, "mode": mode},
            },
            {
                "jsonrpc": JSONRPC_VERSION,
                "id": JSONRPC_PAYLOAD_ID,
                "method": method,
                "params": params,
            },
            {"jsonrpc": JSONRPC_VERSION, "id": 2, "method": "shutdown"},
            {"jsonrpc": JSONRPC_VERSION, "method": "exit"},
        ])
    }

    /// Run `method` in a one-shot session and decode its result
    ///
    /// A `null` result decodes as `R::default()`.
    async fn one_shot<R>(&self, mode: &str, root: &str, method: &str, params: Value) -> Result<R>
    where
        R: DeserializeOwned + Default,
    {
        let body = Self::session_batch(mode, root, method, params);

        debug!(method, mode, root, "language gateway request");
        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::network(format!(
                        "{PROVIDER_NAME} {method} timed out after {:?}",
                        self.timeout
                    ))
                } else {
                    Error::network_with_source(format!("{PROVIDER_NAME} {method} failed"), e)
                }
            })?;

        let responses: Vec<JsonRpcResponse> =
            HttpResponseUtils::check_and_parse(response, PROVIDER_NAME).await?;
        Self::payload_result(responses, method)
    }

    fn payload_result<R>(responses: Vec<JsonRpcResponse>, method: &str) -> Result<R>
    where
        R: DeserializeOwned + Default,
    {
        // Session errors (e.g. initialize refused) surface on any id.
        if let Some(err) = responses.iter().find_map(|r| r.error.as_ref()) {
            return Err(Error::network(format!(
                "{PROVIDER_NAME} {method} error {}: {}",
                err.code, err.message
            )));
        }

        let result = responses
            .into_iter()
            .find(|r| r.id.as_ref().and_then(Value::as_u64) == Some(JSONRPC_PAYLOAD_ID))
            .ok_or_else(|| {
                Error::network(format!("{PROVIDER_NAME} {method}: no response for request"))
            })?
            .result;

        match result {
            None | Some(Value::Null) => Ok(R::default()),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }
}

#[async_trait]
impl DefinitionResolver for LspGatewayClient {
    async fn resolve_cross_repo_definition(
        &self,
        language: &str,
        document: &DocumentUri,
        position: Position,
    ) -> Result<Vec<SymbolLocation>> {
        let params = json!({
            "textDocument": {"uri": document},
            "position": position,
        });
        self.one_shot(language, document.root(), METHOD_XDEFINITION, params)
            .await
    }
}

#[async_trait]
impl DependencyCrawler for LspGatewayClient {
    async fn workspace_dependencies(
        &self,
        language: &str,
        root: &WorkspaceRoot,
    ) -> Result<Vec<WorkspaceDependency>> {
        self.one_shot(language, root.as_str(), METHOD_XDEPENDENCIES, json!({}))
            .await
    }

    async fn workspace_packages(
        &self,
        language: &str,
        root: &WorkspaceRoot,
    ) -> Result<Vec<PackageInformation>> {
        self.one_shot(language, root.as_str(), METHOD_XPACKAGES, json!({}))
            .await
    }
}
