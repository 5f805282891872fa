use attohttpc::{RequestBuilder, Session};
use log::debug;
use retry::{OperationResult, delay::Exponential, retry_with_index};
use std::thread;
use std::time::Duration;

use crate::api::models::RpcResponse;
use crate::cancellation::CancellationToken;
use crate::error::{AurError, Result};
use crate::models::package::{By, Package};
use crate::user_agent;

const RPC_VERSION: &str = "5";
const MAX_RETRIES: usize = 3;
const INITIAL_BACKOFF_MS: u64 = 1000;

/// Client for the AUR RPC service (`/rpc?v=5`).
#[derive(Debug, Clone)]
pub struct RpcClient {
    session: Session,
    base_url: String,
}

impl RpcClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let mut session = Session::new();
        session.header("User-Agent", user_agent::rpc_client());
        session.timeout(timeout);
        session.proxy_settings(attohttpc::ProxySettings::from_env());

        Self {
            session,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn rpc_url(&self) -> String {
        format!("{}/rpc", self.base_url)
    }

    /// Server-side search for packages matching `term` in the `by` field.
    pub fn search(&self, token: &CancellationToken, term: &str, by: By) -> Result<Vec<Package>> {
        let url = self.rpc_url();
        debug!("RPC search by={by} term={term}");

        self.execute_with_retry(token, move || {
            let mut request = self
                .session
                .get(&url)
                .param("v", RPC_VERSION)
                .param("type", "search")
                .param("arg", term);

            // `none` is the engine-only provider selector; the service
            // applies its own default when `by` is omitted.
            if by != By::None {
                request = request.param("by", by.to_string());
            }

            request
        })
    }

    /// Exact-name lookup for one or more packages.
    pub fn info(&self, token: &CancellationToken, names: &[String]) -> Result<Vec<Package>> {
        let url = self.rpc_url();
        debug!("RPC info for {} package(s)", names.len());

        self.execute_with_retry(token, move || {
            let mut request = self
                .session
                .get(&url)
                .param("v", RPC_VERSION)
                .param("type", "info");

            for name in names {
                request = request.param("arg[]", name);
            }

            request
        })
    }

    fn execute_with_retry<F>(
        &self,
        token: &CancellationToken,
        request_builder: F,
    ) -> Result<Vec<Package>>
    where
        F: Fn() -> RequestBuilder,
    {
        let result = retry_with_index(
            Exponential::from_millis(INITIAL_BACKOFF_MS).take(MAX_RETRIES),
            |current_try| {
                if token.is_cancelled() {
                    return OperationResult::Err(AurError::Cancelled);
                }

                let response = match request_builder().send() {
                    Ok(resp) => resp,
                    Err(e) => {
                        let user_error =
                            AurError::Rpc(format!("network error connecting to the AUR: {e}"));

                        if current_try < (MAX_RETRIES - 1) as u64 {
                            return OperationResult::Retry(user_error);
                        }
                        return OperationResult::Err(user_error);
                    }
                };

                if response.status() == attohttpc::StatusCode::TOO_MANY_REQUESTS
                    && current_try < (MAX_RETRIES - 1) as u64
                {
                    if let Some(retry_after) = response.headers().get("Retry-After") {
                        if let Ok(retry_str) = retry_after.to_str() {
                            if let Ok(seconds) = retry_str.parse::<u64>() {
                                thread::sleep(Duration::from_secs(seconds));
                            }
                        }
                    }
                    return OperationResult::Retry(AurError::Rpc(
                        "Too many requests. Waiting before retrying...".to_string(),
                    ));
                }

                if !response.is_success() {
                    let status = response.status();
                    return OperationResult::Err(AurError::Rpc(format!(
                        "HTTP error ({}) from the AUR RPC endpoint: {}",
                        status.as_u16(),
                        status.canonical_reason().unwrap_or("Unknown error")
                    )));
                }

                match response.text() {
                    Ok(body) => match parse_rpc_body(&body) {
                        Ok(data) => OperationResult::Ok(data),
                        Err(e) => OperationResult::Err(e),
                    },
                    Err(e) => OperationResult::Err(AurError::Rpc(format!(
                        "failed to read RPC response body: {e}"
                    ))),
                }
            },
        );

        result.map_err(|e| e.error)
    }
}

fn parse_rpc_body(body: &str) -> Result<Vec<Package>> {
    let response: RpcResponse =
        serde_json::from_str(body).map_err(|e| AurError::Rpc(format!("invalid response: {e}")))?;

    // The service reports failures in-band with a 200 status.
    if response.response_type == "error" {
        let message = response
            .error
            .unwrap_or_else(|| "unknown RPC error".to_string());
        return Err(AurError::Rpc(message));
    }

    debug!(
        "RPC v{} returned {} result(s)",
        response.version, response.resultcount
    );
    Ok(response.results)
}
