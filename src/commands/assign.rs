/*
 * SPDX-FileCopyrightText: 2026 Skill Matrix Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::config::*;
use crate::engine;
use crate::input::*;
use crate::notify::{Severity, notify};
use clap::{Subcommand, arg};
use connector::*;
use std::process::exit;

#[derive(Subcommand, Debug)]
pub enum Commands {
    Select {
        resource: i64,
    },
    Show,
    Set {
        skill: i64,
        #[arg(short, long)]
        level: i64,
        #[arg(long)]
        labels: Option<String>,
    },
    Clear {
        skill: i64,
    },
}

fn selected_resource() -> i64 {
    match set_get_value(ConfigKey::SelectedResource, None, true) {
        Some(id) => id.parse::<i64>().unwrap_or_else(|_| {
            eprintln!("Selected resource is not a valid id.");
            exit(1);
        }),
        None => {
            eprintln!("Resource is required for command. Use `skillmatrix assign select <id>`.");
            exit(1);
        }
    }
}

pub async fn handle(cmd: Commands) {
    match cmd {
        Commands::Select { resource } => {
            // Validated against the API before storing, so a typo surfaces
            // here rather than on the next assignment command.
            let res = resources::get_resource(request_config(), resource)
                .await
                .map_err(|e| {
                    notify(Severity::Error, &e);
                    exit(1);
                })
                .unwrap();

            set_get_value(ConfigKey::SelectedResource, Some(res.id.to_string()), true);
            println!("Resource {} {} selected.", res.nome, res.cognome);
        }

        Commands::Show => {
            let resource = selected_resource();

            let (res, skills) = tokio::try_join!(
                resources::get_resource(request_config(), resource),
                skills::get(request_config())
            )
            .map_err(|e| {
                notify(Severity::Error, &e);
                exit(1);
            })
            .unwrap();

            println!("Skills for {} {}:", res.nome, res.cognome);

            if skills.is_empty() {
                println!("No skills registered.");
                return;
            }

            for skill in &skills {
                let assigned = res.skills.iter().find(|s| s.skill_id == skill.id);
                let level = assigned.map_or(0, |s| s.level);
                let labels = assigned.map(|s| s.labels.join(", ")).unwrap_or_default();

                if labels.is_empty() {
                    println!("{} ({}): {}", skill.name, skill.id, level);
                } else {
                    println!("{} ({}): {} [{}]", skill.name, skill.id, level, labels);
                }
            }
        }

        Commands::Set {
            skill,
            level,
            labels,
        } => {
            let resource = selected_resource();
            let labels = labels.map(|raw| parse_list(&raw)).unwrap_or_default();

            let (res, catalog) = tokio::try_join!(
                resources::get_resource(request_config(), resource),
                skills::get(request_config())
            )
            .map_err(|e| {
                notify(Severity::Error, &e);
                exit(1);
            })
            .unwrap();

            let catalog_skill = match catalog.iter().find(|s| s.id == skill) {
                Some(catalog_skill) => catalog_skill,
                None => {
                    notify(Severity::Warning, &format!("Skill {} not found.", skill));
                    exit(1);
                }
            };

            if let Err(e) = engine::validate_assignment(catalog_skill, level, &labels) {
                notify(Severity::Warning, &e);
                exit(1);
            }

            let payload = engine::upsert_assignment(&res.skills, skill, level, labels);

            let updated = resources::put_resource_skills(request_config(), resource, payload)
                .await
                .map_err(|e| {
                    notify(Severity::Error, &e);
                    exit(1);
                })
                .unwrap();

            notify(
                Severity::Success,
                &format!("Skills for {} updated.", updated.nome),
            );
        }

        Commands::Clear { skill } => {
            let resource = selected_resource();

            let res = resources::get_resource(request_config(), resource)
                .await
                .map_err(|e| {
                    notify(Severity::Error, &e);
                    exit(1);
                })
                .unwrap();

            // Level 0 with no labels drops the entry from the saved set.
            let payload = engine::upsert_assignment(&res.skills, skill, 0, Vec::new());

            let updated = resources::put_resource_skills(request_config(), resource, payload)
                .await
                .map_err(|e| {
                    notify(Severity::Error, &e);
                    exit(1);
                })
                .unwrap();

            notify(
                Severity::Success,
                &format!("Skills for {} updated.", updated.nome),
            );
        }
    }
}
