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
    List {
        #[arg(short, long)]
        label: Option<String>,
    },
    Add {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        labels: Option<String>,
    },
    Delete {
        skill: i64,
    },
    Label {
        #[command(subcommand)]
        cmd: LabelCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum LabelCommands {
    Add { skill: i64, label: String },
    Remove { skill: i64, label: String },
    List,
}

fn print_skill(skill: &skills::SkillResponse) {
    if skill.labels.is_empty() {
        println!("{}: {}", skill.id, skill.name);
    } else {
        println!("{}: {} [{}]", skill.id, skill.name, skill.labels.join(", "));
    }
}

pub async fn handle(cmd: Commands) {
    match cmd {
        Commands::List { label } => {
            let res = skills::get(request_config())
                .await
                .map_err(|e| {
                    notify(Severity::Error, &e);
                    exit(1);
                })
                .unwrap();

            match label {
                Some(label) => {
                    let matching = engine::skills_with_label(&res, &label);
                    if matching.is_empty() {
                        println!("No skills carry the label \"{}\".", label);
                    } else {
                        for skill in matching {
                            print_skill(skill);
                        }
                    }
                }
                None => {
                    if res.is_empty() {
                        println!("No skills registered.");
                    } else {
                        for skill in &res {
                            print_skill(skill);
                        }
                    }
                }
            }
        }

        Commands::Add { name, labels } => {
            let name = match name {
                Some(name) => name,
                None => ask_for_input("Name"),
            };

            let labels = labels.map(|raw| parse_list(&raw)).unwrap_or_default();

            let res = skills::post(request_config(), name, labels)
                .await
                .map_err(|e| {
                    notify(Severity::Error, &e);
                    exit(1);
                })
                .unwrap();

            notify(Severity::Success, &format!("Skill \"{}\" added.", res.name));
        }

        Commands::Delete { skill } => {
            skills::delete_skill(request_config(), skill)
                .await
                .map_err(|e| {
                    notify(Severity::Error, &e);
                    exit(1);
                })
                .unwrap();

            notify(Severity::Success, "Skill deleted.");
        }

        Commands::Label { cmd } => match cmd {
            LabelCommands::Add { skill, label } => {
                // Duplicates are the server's concern; the client sends as-is.
                let res = skills::post_skill_label(request_config(), skill, label.clone())
                    .await
                    .map_err(|e| {
                        notify(Severity::Error, &e);
                        exit(1);
                    })
                    .unwrap();

                notify(
                    Severity::Success,
                    &format!("Label \"{}\" added to \"{}\".", label, res.name),
                );
            }

            LabelCommands::Remove { skill, label } => {
                // Removing an absent label is a no-op success on the server.
                let res = skills::delete_skill_label(request_config(), skill, label.clone())
                    .await
                    .map_err(|e| {
                        notify(Severity::Error, &e);
                        exit(1);
                    })
                    .unwrap();

                notify(
                    Severity::Success,
                    &format!("Label \"{}\" removed from \"{}\".", label, res.name),
                );
            }

            LabelCommands::List => {
                let res = skills::get(request_config())
                    .await
                    .map_err(|e| {
                        notify(Severity::Error, &e);
                        exit(1);
                    })
                    .unwrap();

                let labels = engine::all_labels(&res);
                if labels.is_empty() {
                    println!("No labels defined.");
                } else {
                    for label in labels {
                        println!("{}", label);
                    }
                }
            }
        },
    }
}
