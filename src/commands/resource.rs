/*
 * SPDX-FileCopyrightText: 2026 Skill Matrix Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::engine;
use crate::input::*;
use crate::notify::{Severity, notify};
use clap::{Subcommand, arg};
use connector::*;
use std::process::exit;

#[derive(Subcommand, Debug)]
pub enum Commands {
    List,
    Add {
        #[arg(short, long)]
        nome: Option<String>,
        #[arg(short, long)]
        cognome: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(long)]
        numero: Option<String>,
        #[arg(short, long)]
        business_unit: Option<i64>,
    },
    Show {
        resource: i64,
    },
    Delete {
        resource: i64,
    },
}

pub async fn handle(cmd: Commands) {
    match cmd {
        Commands::List => {
            let res = resources::get(request_config())
                .await
                .map_err(|e| {
                    notify(Severity::Error, &e);
                    exit(1);
                })
                .unwrap();

            if res.is_empty() {
                println!("No resources registered.");
            } else {
                for resource in res {
                    println!(
                        "{}: {} {} ({}) - {}",
                        resource.id,
                        resource.nome,
                        resource.cognome,
                        resource.business_unit.name,
                        resource.email
                    );
                }
            }
        }

        Commands::Add {
            nome,
            cognome,
            email,
            numero,
            business_unit,
        } => {
            let input_fields = [
                ("Nome", nome),
                ("Cognome", cognome),
                ("Email", email),
                ("Business Unit Id", business_unit.map(|id| id.to_string())),
            ]
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();

            let input = handle_input(input_fields, true);

            let business_unit_id = match input.get("Business Unit Id").unwrap().parse::<i64>() {
                Ok(id) => id,
                Err(_) => {
                    notify(Severity::Warning, "Business Unit Id must be an integer.");
                    exit(1);
                }
            };

            let res = resources::post(
                request_config(),
                input.get("Nome").unwrap().clone(),
                input.get("Cognome").unwrap().clone(),
                input.get("Email").unwrap().clone(),
                numero,
                business_unit_id,
            )
            .await
            .map_err(|e| {
                notify(Severity::Error, &e);
                exit(1);
            })
            .unwrap();

            notify(
                Severity::Success,
                &format!("Resource {} {} added.", res.nome, res.cognome),
            );
        }

        Commands::Show { resource } => {
            let res = resources::get_resource(request_config(), resource)
                .await
                .map_err(|e| {
                    notify(Severity::Error, &e);
                    exit(1);
                })
                .unwrap();

            println!("ID: {}", res.id);
            println!("Nome: {}", res.nome);
            println!("Cognome: {}", res.cognome);
            println!("Email: {}", res.email);
            println!("Numero: {}", res.numero.unwrap_or_else(|| "-".to_string()));
            println!(
                "Business Unit: {} ({})",
                res.business_unit.name, res.business_unit.id
            );

            if res.skills.is_empty() {
                println!("No skills assigned.");
            } else {
                println!("Skills:");
                for assignment in &res.skills {
                    let name = engine::resolve_skill_name(assignment, &[]);
                    if assignment.labels.is_empty() {
                        println!("  {} ({}): {}", name, assignment.skill_id, assignment.level);
                    } else {
                        println!(
                            "  {} ({}): {} [{}]",
                            name,
                            assignment.skill_id,
                            assignment.level,
                            assignment.labels.join(", ")
                        );
                    }
                }
            }
        }

        Commands::Delete { resource } => {
            resources::delete_resource(request_config(), resource)
                .await
                .map_err(|e| {
                    notify(Severity::Error, &e);
                    exit(1);
                })
                .unwrap();

            notify(Severity::Success, "Resource deleted.");
        }
    }
}
