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

pub struct SearchCommand<'a> {
    config: &'a AurConfig,
}

impl<'a> SearchCommand<'a> {
    pub fn new(config: &'a AurConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(
        &self,
        token: &CancellationToken,
        terms: &[String],
        by: By,
        local: bool,
        json: bool,
    ) -> Result<()> {
        let results = if local {
            let client = metadata::Client::from_config(self.config);
            let query = AurQuery {
                needles: terms.to_vec(),
                by,
                contains: true,
            };
            client.get(token, &query)?
        } else {
            let client = RpcClient::new(&self.config.aur_url, self.config.timeout());
            // The RPC service takes a single term; multiple words form one phrase.
            client.search(token, &terms.join(" "), by)?
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
            print_search(&mut out, package, color)?;
        }

        Ok(())
    }
}

/// One line per package plus an indented description, the classic
/// `search` rendering.
fn print_search(w: &mut impl Write, package: &Package, use_color: bool) -> std::io::Result<()> {
    writeln!(
        w,
        "- {} {} ({} {:.2})\n\t{}",
        bold(&package.name, use_color),
        package.version,
        package.num_votes,
        package.popularity,
        package.description.as_deref().unwrap_or(""),
    )
}
