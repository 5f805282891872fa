// Copyright 2026 aurum developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! User-Agent string constants for consistent HTTP client identification.
//!
//! The AUR asks clients to identify themselves; every HTTP client in the
//! codebase takes its User-Agent header from here.

/// The aurum package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent for the RPC client (search/info requests)
pub fn rpc_client() -> String {
    format!("aurum/rpc/{VERSION}")
}

/// User-Agent for the metadata snapshot client
pub fn metadata_client() -> String {
    format!("aurum/metadata/{VERSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agents() {
        assert_eq!(rpc_client(), format!("aurum/rpc/{VERSION}"));
        assert_eq!(metadata_client(), format!("aurum/metadata/{VERSION}"));
    }

    #[test]
    fn test_version_format() {
        // Version should follow semver format (e.g., "0.2.1")
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert_eq!(
            parts.len(),
            3,
            "Version should have 3 parts (major.minor.patch)"
        );

        for part in parts {
            assert!(
                part.parse::<u32>().is_ok(),
                "Version part should be a number"
            );
        }
    }
}
