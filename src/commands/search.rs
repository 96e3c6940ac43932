/*
 * SPDX-FileCopyrightText: 2026 Skill Matrix Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::engine;
use crate::input::*;
use crate::notify::{Severity, notify};
use connector::*;
use std::process::exit;

pub async fn handle_search(skill: Option<i64>, min_level: i64, business_unit: Option<i64>) {
    if !(0..=engine::MAX_LEVEL).contains(&min_level) {
        notify(
            Severity::Warning,
            &format!("Minimum level must be between 0 and {}.", engine::MAX_LEVEL),
        );
        exit(1);
    }

    // Independent reads fail as a unit; any one failure aborts the search.
    let (resources, skills) = tokio::try_join!(
        resources::get(request_config()),
        skills::get(request_config())
    )
    .map_err(|e| {
        notify(Severity::Error, &e);
        exit(1);
    })
    .unwrap();

    let filter = engine::SearchFilter {
        skill_id: skill,
        min_level,
        business_unit_id: business_unit,
    };

    let matches = engine::filter_resources(&resources, &filter);

    if matches.is_empty() {
        println!("No matching resources.");
        return;
    }

    for resource in matches {
        println!(
            "{} {} ({}) - {}",
            resource.nome, resource.cognome, resource.business_unit.name, resource.email
        );

        if resource.skills.is_empty() {
            println!("  No skills assigned.");
            continue;
        }

        for assignment in &resource.skills {
            let name = engine::resolve_skill_name(assignment, &skills);
            if assignment.labels.is_empty() {
                println!("  {}: {}", name, assignment.level);
            } else {
                println!(
                    "  {}: {} [{}]",
                    name,
                    assignment.level,
                    assignment.labels.join(", ")
                );
            }
        }
    }
}
