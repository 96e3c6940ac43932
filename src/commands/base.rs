/*
 * SPDX-FileCopyrightText: 2026 Skill Matrix Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::config::*;
use crate::input::*;
use clap::{CommandFactory, Parser, Subcommand, arg};
use clap_complete::{Shell, generate};
use std::io;
use std::process::exit;

#[derive(Parser, Debug)]
#[command(name = "Skill Matrix", display_name = "Skill Matrix", bin_name = "skillmatrix", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<MainCommands>,
    #[arg(long, value_enum)]
    generate_completions: Option<Shell>,
}

#[derive(Subcommand, Debug)]
enum MainCommands {
    Config {
        key: String,
        value: Option<String>,
    },
    Status,
    Resource {
        #[command(subcommand)]
        cmd: resource::Commands,
    },
    Skill {
        #[command(subcommand)]
        cmd: skill::Commands,
    },
    Bu {
        #[command(subcommand)]
        cmd: business_unit::Commands,
    },
    Assign {
        #[command(subcommand)]
        cmd: assign::Commands,
    },
    Search {
        #[arg(short, long)]
        skill: Option<i64>,
        #[arg(short, long, default_value_t = 0)]
        min_level: i64,
        #[arg(short, long)]
        business_unit: Option<i64>,
    },
    Stats,
}

pub async fn run_cli() -> std::io::Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.generate_completions {
        let mut app = Cli::command();
        let bin_name = app.get_name().to_string();
        generate(shell, &mut app, bin_name, &mut io::stdout());
        return Ok(());
    }

    if let Some(cmd) = cli.cmd {
        match cmd {
            MainCommands::Config { key, value } => {
                set_get_value_from_string(key, value, false)
                    .map_err(|_| {
                        exit(1);
                    })
                    .unwrap();
            }

            MainCommands::Status => {
                if set_get_value(ConfigKey::Server, None, true).is_none() {
                    eprintln!(
                        "Server URL is not set. Use `skillmatrix config server <url>` to set it."
                    );
                    exit(1);
                }

                let res = connector::health(request_config())
                    .await
                    .map_err(|e| {
                        eprintln!("{}", e);
                        exit(1);
                    })
                    .unwrap();

                if res.status == "ok" {
                    println!("Server Online.");
                } else {
                    eprintln!("Unexpected health status: {}", res.status);
                    exit(1);
                }
            }

            MainCommands::Resource { cmd } => resource::handle(cmd).await,
            MainCommands::Skill { cmd } => skill::handle(cmd).await,
            MainCommands::Bu { cmd } => business_unit::handle(cmd).await,
            MainCommands::Assign { cmd } => assign::handle(cmd).await,
            MainCommands::Search {
                skill,
                min_level,
                business_unit,
            } => search::handle_search(skill, min_level, business_unit).await,
            MainCommands::Stats => stats::handle_stats().await,
        }
    } else {
        eprintln!("No subcommand provided");
        exit(1);
    }

    Ok(())
}
