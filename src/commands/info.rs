use chrono::{DateTime, Utc};
use colored::Colorize;
use std::io::Write;

use crate::api::RpcClient;
use crate::cancellation::CancellationToken;
use crate::commands::{bold, use_color};
use crate::config::AurConfig;
use crate::error::Result;
use crate::metadata;
use crate::metadata::AurQuery;
use crate::models::package::{By, Package};

pub struct InfoCommand<'a> {
    config: &'a AurConfig,
}

impl<'a> InfoCommand<'a> {
    pub fn new(config: &'a AurConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(
        &self,
        token: &CancellationToken,
        names: &[String],
        verbose: bool,
        local: bool,
        json: bool,
    ) -> Result<()> {
        let results = if local {
            let client = metadata::Client::from_config(self.config);
            let query = AurQuery {
                needles: names.to_vec(),
                by: By::Name,
                contains: false,
            };
            client.get(token, &query)?
        } else {
            let client = RpcClient::new(&self.config.aur_url, self.config.timeout());
            client.info(token, names)?
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&results)?);
            return Ok(());
        }

        if results.is_empty() {
            println!("{} No packages found", "✗".red());
            return Ok(());
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let color = use_color();
        for package in &results {
            print_info(&mut out, package, &self.config.aur_url, verbose, color)?;
        }

        Ok(())
    }
}

/// Multi-field block rendering, in the manner of `pacman -Si`.
fn print_info(
    w: &mut impl Write,
    package: &Package,
    aur_url: &str,
    verbose: bool,
    use_color: bool,
) -> std::io::Result<()> {
    let base_url = aur_url.trim_end_matches('/');

    print_info_value(w, "Name", &[package.name.as_str()], use_color)?;
    print_info_value(w, "Version", &[package.version.as_str()], use_color)?;
    print_info_value(
        w,
        "Description",
        &[package.description.as_deref().unwrap_or("")],
        use_color,
    )?;

    if verbose {
        let package_url = format!("{base_url}/packages/{}", package.name);
        let snapshot_url = format!("{base_url}{}", package.url_path);
        let votes = package.num_votes.to_string();
        let popularity = format!("{:.6}", package.popularity);
        let first_submitted = format_timestamp(package.first_submitted);
        let last_modified = format_timestamp(package.last_modified);
        let out_of_date = match package.out_of_date {
            Some(timestamp) => format_timestamp(timestamp),
            None => "No".to_string(),
        };
        let id = package.id.to_string();
        let package_base_id = package.package_base_id.to_string();

        print_info_value(w, "Keywords", &as_strs(&package.keywords), use_color)?;
        print_info_value(
            w,
            "URL",
            &[package.url.as_deref().unwrap_or("")],
            use_color,
        )?;
        print_info_value(w, "AUR URL", &[package_url.as_str()], use_color)?;

        print_info_value(w, "Groups", &as_strs(&package.groups), use_color)?;
        print_info_value(w, "Licenses", &as_strs(&package.license), use_color)?;
        print_info_value(w, "Provides", &as_strs(&package.provides), use_color)?;
        print_info_value(w, "Depends On", &as_strs(&package.depends), use_color)?;
        print_info_value(w, "Make Deps", &as_strs(&package.make_depends), use_color)?;
        print_info_value(
            w,
            "Check Deps",
            &as_strs(&package.check_depends),
            use_color,
        )?;
        print_info_value(
            w,
            "Optional Deps",
            &as_strs(&package.opt_depends),
            use_color,
        )?;
        print_info_value(
            w,
            "Conflicts With",
            &as_strs(&package.conflicts),
            use_color,
        )?;
        print_info_value(w, "Replaces", &as_strs(&package.replaces), use_color)?;

        print_info_value(
            w,
            "Maintainer",
            &[package.maintainer.as_deref().unwrap_or("")],
            use_color,
        )?;
        print_info_value(w, "Votes", &[votes.as_str()], use_color)?;
        print_info_value(w, "Popularity", &[popularity.as_str()], use_color)?;
        print_info_value(w, "First Submitted", &[first_submitted.as_str()], use_color)?;
        print_info_value(w, "Last Modified", &[last_modified.as_str()], use_color)?;
        print_info_value(w, "Out-of-date", &[out_of_date.as_str()], use_color)?;

        print_info_value(w, "ID", &[id.as_str()], use_color)?;
        print_info_value(w, "Package Base ID", &[package_base_id.as_str()], use_color)?;
        print_info_value(w, "Package Base", &[package.package_base.as_str()], use_color)?;
        print_info_value(w, "Snapshot URL", &[snapshot_url.as_str()], use_color)?;
    }

    writeln!(w)
}

/// Writes one aligned `Key : value` line; absent values render as "None",
/// list values are joined with two spaces.
fn print_info_value(
    w: &mut impl Write,
    key: &str,
    values: &[&str],
    use_color: bool,
) -> std::io::Result<()> {
    let label = bold(&format!("{key:<16}: "), use_color);

    let joined = values
        .iter()
        .filter(|value| !value.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("  ");

    if joined.is_empty() {
        writeln!(w, "{label}None")
    } else {
        writeln!(w, "{label}{joined}")
    }
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

fn format_timestamp(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|time| time.format("%a %d %b %Y %I:%M:%S %p UTC").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUR_URL: &str = "https://aur.archlinux.org";

    fn sample_package() -> Package {
        Package {
            name: "test".to_string(),
            version: "1.0.0.".to_string(),
            num_votes: 20,
            popularity: 4.0,
            description: Some("Test description".to_string()),
            ..Package::default()
        }
    }

    #[test]
    fn test_print_info_brief() {
        let mut buffer = Vec::new();
        print_info(&mut buffer, &sample_package(), AUR_URL, false, true).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "\x1b[1mName            : \x1b[0mtest\n\
             \x1b[1mVersion         : \x1b[0m1.0.0.\n\
             \x1b[1mDescription     : \x1b[0mTest description\n\n"
        );
    }

    #[test]
    fn test_print_info_brief_plain() {
        let mut buffer = Vec::new();
        print_info(&mut buffer, &sample_package(), AUR_URL, false, false).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Name            : test\n\
             Version         : 1.0.0.\n\
             Description     : Test description\n\n"
        );
    }

    #[test]
    fn test_print_info_verbose() {
        let mut buffer = Vec::new();
        print_info(&mut buffer, &sample_package(), AUR_URL, true, false).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        // Unset fields render as "None"; numbers keep the original formats.
        assert!(output.contains("Keywords        : None\n"));
        assert!(output.contains("URL             : None\n"));
        assert!(output.contains("AUR URL         : https://aur.archlinux.org/packages/test\n"));
        assert!(output.contains("Maintainer      : None\n"));
        assert!(output.contains("Votes           : 20\n"));
        assert!(output.contains("Popularity      : 4.000000\n"));
        assert!(output.contains("First Submitted : Thu 01 Jan 1970 12:00:00 AM UTC\n"));
        assert!(output.contains("Out-of-date     : No\n"));
        assert!(output.contains("ID              : 0\n"));
        assert!(output.contains("Package Base ID : 0\n"));
        assert!(output.contains("Snapshot URL    : https://aur.archlinux.org\n"));
        assert!(output.ends_with("\n\n"));
    }

    #[test]
    fn test_print_info_verbose_lists_and_flags() {
        let package = Package {
            license: vec!["MIT".to_string(), "Unlicense".to_string()],
            out_of_date: Some(86_400),
            maintainer: Some("alice".to_string()),
            url_path: "/cgit/aur.git/snapshot/test.tar.gz".to_string(),
            ..sample_package()
        };

        let mut buffer = Vec::new();
        print_info(&mut buffer, &package, AUR_URL, true, false).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("Licenses        : MIT  Unlicense\n"));
        assert!(output.contains("Maintainer      : alice\n"));
        assert!(output.contains("Out-of-date     : Fri 02 Jan 1970 12:00:00 AM UTC\n"));
        assert!(output.contains(
            "Snapshot URL    : https://aur.archlinux.org/cgit/aur.git/snapshot/test.tar.gz\n"
        ));
    }

    #[test]
    fn test_format_timestamp_epoch() {
        assert_eq!(format_timestamp(0), "Thu 01 Jan 1970 12:00:00 AM UTC");
    }
}
