/*
 * SPDX-FileCopyrightText: 2026 Skill Matrix Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::engine;
use crate::input::*;
use crate::notify::{Severity, notify};
use clap::{Subcommand, arg};
use connector::business_units::DeleteAction;
use connector::*;
use std::process::exit;

#[derive(Subcommand, Debug)]
pub enum Commands {
    List,
    Add {
        #[arg(short, long)]
        name: Option<String>,
    },
    Delete {
        business_unit: i64,
        #[arg(short, long)]
        action: Option<String>,
        #[arg(short, long)]
        target: Option<i64>,
    },
}

fn parse_action(raw: &str) -> DeleteAction {
    match raw {
        "delete" => DeleteAction::Delete,
        "migrate" => DeleteAction::Migrate,
        _ => {
            notify(
                Severity::Warning,
                "Action must be either 'delete' or 'migrate'.",
            );
            exit(1);
        }
    }
}

pub async fn handle(cmd: Commands) {
    match cmd {
        Commands::List => {
            let res = business_units::get(request_config())
                .await
                .map_err(|e| {
                    notify(Severity::Error, &e);
                    exit(1);
                })
                .unwrap();

            if res.is_empty() {
                println!("No business units registered.");
            } else {
                for unit in res {
                    println!("{}: {}", unit.id, unit.name);
                }
            }
        }

        Commands::Add { name } => {
            let name = match name {
                Some(name) => name,
                None => ask_for_input("Name"),
            };

            let res = business_units::post(request_config(), name)
                .await
                .map_err(|e| {
                    notify(Severity::Error, &e);
                    exit(1);
                })
                .unwrap();

            notify(
                Severity::Success,
                &format!("Business Unit \"{}\" added.", res.name),
            );
        }

        Commands::Delete {
            business_unit,
            action,
            target,
        } => {
            let mut action = action.map(|raw| parse_action(&raw));

            let resources = resources::get(request_config())
                .await
                .map_err(|e| {
                    notify(Severity::Error, &e);
                    exit(1);
                })
                .unwrap();

            let units = business_units::get(request_config())
                .await
                .map_err(|e| {
                    notify(Severity::Error, &e);
                    exit(1);
                })
                .unwrap();

            let dependents = engine::dependent_resources(&resources, business_unit);

            let mut target = target;
            if dependents > 0 && action.is_none() {
                println!(
                    "{} resources still belong to this business unit.",
                    dependents
                );

                let targets = engine::migration_targets(&units, business_unit);
                if targets.is_empty() {
                    println!("No other business unit is available as a migration target.");
                } else {
                    println!("Available migration targets:");
                    for unit in &targets {
                        println!("{}: {}", unit.id, unit.name);
                    }
                }

                let chosen = parse_action(&ask_for_input("Action [delete/migrate]"));

                if chosen == DeleteAction::Migrate && target.is_none() && !targets.is_empty() {
                    let raw = ask_for_input("Target Business Unit Id");
                    target = match raw.parse::<i64>() {
                        Ok(id) => Some(id),
                        Err(_) => {
                            notify(Severity::Warning, "Target Business Unit Id must be an integer.");
                            exit(1);
                        }
                    };
                }

                action = Some(chosen);
            }

            let options = engine::plan_business_unit_delete(
                business_unit,
                dependents,
                action,
                target,
                &units,
            )
            .unwrap_or_else(|e| {
                notify(Severity::Warning, &e);
                exit(1);
            });

            business_units::delete_business_unit(request_config(), business_unit, options)
                .await
                .map_err(|e| {
                    notify(Severity::Error, &e);
                    exit(1);
                })
                .unwrap();

            notify(Severity::Success, "Business Unit deleted.");
        }
    }
}
