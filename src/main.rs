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

use aurum::cancellation;
use aurum::commands::cache::CacheCommand;
use aurum::commands::info::InfoCommand;
use aurum::commands::search::SearchCommand;
use aurum::config::{AurConfig, aurum_home};
use aurum::error::{Result, format_error_chain, get_exit_code};
use aurum::logging;
use aurum::models::package::By;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "aurum")]
#[command(author, version, about = "AUR package search tool", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info and detailed package info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// AUR base URL
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    /// Display results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for packages
    #[command(visible_alias = "s")]
    Search {
        /// Search terms
        #[arg(required = true)]
        terms: Vec<String>,

        /// Field to search by
        /// (name/name-desc/maintainer/depends/makedepends/optdepends/checkdepends/provides)
        #[arg(long, value_name = "FIELD", default_value = "name-desc")]
        by: String,

        /// Query the local package snapshot instead of the RPC service
        #[arg(long)]
        local: bool,
    },

    /// Show package information
    #[command(visible_alias = "i")]
    Info {
        /// Package names
        #[arg(required = true)]
        names: Vec<String>,

        /// Query the local package snapshot instead of the RPC service
        #[arg(long)]
        local: bool,
    },

    /// Manage the local AUR package snapshot
    Cache {
        #[command(subcommand)]
        command: CacheCommand,
    },
}

fn load_config(cli: &Cli) -> Result<AurConfig> {
    let mut config = AurConfig::load(&aurum_home()?)?;
    if let Some(url) = &cli.url {
        config.aur_url = url.clone();
    }
    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger based on CLI flags and environment
    logging::setup_logger(cli.verbose);

    // Load configuration once at startup
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error_chain(&e));
            std::process::exit(get_exit_code(&e));
        }
    };

    let token = cancellation::global_token();
    let verbose = cli.verbose > 0;
    let json = cli.json;

    let result: Result<()> = (|| {
        match cli.command {
            Commands::Search { terms, by, local } => {
                let command = SearchCommand::new(&config)?;
                command.execute(&token, &terms, By::from_arg(&by), local, json)
            }
            Commands::Info { names, local } => {
                let command = InfoCommand::new(&config)?;
                command.execute(&token, &names, verbose, local, json)
            }
            Commands::Cache { command } => command.execute(&token, &config),
        }
    })();

    if let Err(e) = result {
        eprintln!("{}", format_error_chain(&e));
        std::process::exit(get_exit_code(&e));
    }
}
