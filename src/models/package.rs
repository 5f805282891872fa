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

use serde::{Deserialize, Serialize};
use std::fmt;

/// One AUR package's metadata, shaped after the RPC v5 payload.
///
/// The metadata snapshot omits empty list fields and uses `null` for unset
/// scalars, so lists default to empty and nullable scalars are `Option`s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Package {
    #[serde(rename = "ID")]
    pub id: u64,
    pub name: String,
    #[serde(rename = "PackageBaseID")]
    pub package_base_id: u64,
    pub package_base: String,
    pub version: String,
    pub description: Option<String>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
    pub num_votes: u64,
    pub popularity: f64,
    /// Unix timestamp of the out-of-date flag, unset when current.
    pub out_of_date: Option<i64>,
    pub maintainer: Option<String>,
    pub first_submitted: i64,
    pub last_modified: i64,
    #[serde(rename = "URLPath")]
    pub url_path: String,
    pub depends: Vec<String>,
    pub make_depends: Vec<String>,
    pub check_depends: Vec<String>,
    pub opt_depends: Vec<String>,
    pub conflicts: Vec<String>,
    pub provides: Vec<String>,
    pub replaces: Vec<String>,
    pub groups: Vec<String>,
    pub license: Vec<String>,
    pub keywords: Vec<String>,
}

/// Which package field(s) a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum By {
    /// Name and Provides; the selector used for provider lookups.
    None,
    Name,
    #[default]
    NameDesc,
    Maintainer,
    Depends,
    MakeDepends,
    OptDepends,
    CheckDepends,
    Provides,
}

impl By {
    /// Maps CLI flag text to a selector, falling back to the default for
    /// anything unrecognized.
    pub fn from_arg(value: &str) -> By {
        match value {
            "none" => By::None,
            "name" => By::Name,
            "maintainer" => By::Maintainer,
            "depends" => By::Depends,
            "makedepends" => By::MakeDepends,
            "optdepends" => By::OptDepends,
            "checkdepends" => By::CheckDepends,
            "provides" => By::Provides,
            _ => By::NameDesc,
        }
    }
}

impl fmt::Display for By {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            By::None => "none",
            By::Name => "name",
            By::NameDesc => "name-desc",
            By::Maintainer => "maintainer",
            By::Depends => "depends",
            By::MakeDepends => "makedepends",
            By::OptDepends => "optdepends",
            By::CheckDepends => "checkdepends",
            By::Provides => "provides",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_display() {
        let cases = [
            (By::None, "none"),
            (By::Name, "name"),
            (By::NameDesc, "name-desc"),
            (By::Maintainer, "maintainer"),
            (By::Depends, "depends"),
            (By::MakeDepends, "makedepends"),
            (By::OptDepends, "optdepends"),
            (By::CheckDepends, "checkdepends"),
            (By::Provides, "provides"),
        ];

        for (by, want) in cases {
            assert_eq!(by.to_string(), want);
        }
    }

    #[test]
    fn test_by_from_arg_round_trips() {
        for by in [
            By::None,
            By::Name,
            By::NameDesc,
            By::Maintainer,
            By::Depends,
            By::MakeDepends,
            By::OptDepends,
            By::CheckDepends,
            By::Provides,
        ] {
            assert_eq!(By::from_arg(&by.to_string()), by);
        }
    }

    #[test]
    fn test_by_from_arg_defaults_to_name_desc() {
        assert_eq!(By::from_arg("votes"), By::NameDesc);
        assert_eq!(By::from_arg(""), By::NameDesc);
    }

    #[test]
    fn test_package_deserializes_rpc_payload() {
        let raw = r#"{
            "ID": 1193389,
            "Name": "ripgrep-git",
            "PackageBaseID": 123013,
            "PackageBase": "ripgrep-git",
            "Version": "14.1.0.r11.g3b6a87b-1",
            "Description": "A search tool that combines the usability of ag with the raw speed of grep",
            "URL": "https://github.com/BurntSushi/ripgrep",
            "NumVotes": 87,
            "Popularity": 0.49,
            "OutOfDate": null,
            "Maintainer": null,
            "FirstSubmitted": 1474539175,
            "LastModified": 1713900047,
            "URLPath": "/cgit/aur.git/snapshot/ripgrep-git.tar.gz",
            "Depends": ["gcc-libs"],
            "MakeDepends": ["cargo", "git"],
            "Provides": ["ripgrep"],
            "Conflicts": ["ripgrep"],
            "License": ["MIT", "Unlicense"],
            "Keywords": ["grep", "search"]
        }"#;

        let package: Package = serde_json::from_str(raw).unwrap();
        assert_eq!(package.id, 1193389);
        assert_eq!(package.name, "ripgrep-git");
        assert_eq!(package.maintainer, None);
        assert_eq!(package.out_of_date, None);
        assert_eq!(package.make_depends, vec!["cargo", "git"]);
        // Omitted list fields default to empty.
        assert!(package.opt_depends.is_empty());
        assert!(package.groups.is_empty());
    }

    #[test]
    fn test_package_serializes_with_rpc_field_names() {
        let package = Package {
            name: "ripgrep".to_string(),
            url_path: "/cgit/aur.git/snapshot/ripgrep.tar.gz".to_string(),
            ..Package::default()
        };

        let raw = serde_json::to_string(&package).unwrap();
        assert!(raw.contains("\"ID\":"));
        assert!(raw.contains("\"URLPath\":"));
        assert!(raw.contains("\"PackageBaseID\":"));
        assert!(raw.contains("\"NumVotes\":"));
    }
}
