use serde::Deserialize;

use crate::models::package::Package;

/// Envelope every AUR RPC v5 response is wrapped in.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    pub version: u32,
    #[serde(rename = "type")]
    pub response_type: String,
    pub resultcount: usize,
    #[serde(default)]
    pub results: Vec<Package>,
    #[serde(default)]
    pub error: Option<String>,
}
