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

pub async fn handle_stats() {
    let (resources, skills, units) = tokio::try_join!(
        resources::get(request_config()),
        skills::get(request_config()),
        business_units::get(request_config())
    )
    .map_err(|e| {
        notify(Severity::Error, &e);
        exit(1);
    })
    .unwrap();

    println!("Total Resources: {}", resources.len());
    println!("Total Skills: {}", skills.len());
    println!("Total Business Units: {}", units.len());
    println!("Average Skill Level: {}", engine::average_level(&resources));
    println!();

    println!("Top {} Skills:", engine::TOP_SKILLS_LIMIT);
    let top = engine::top_skills(&resources, &skills, engine::TOP_SKILLS_LIMIT);
    if top.is_empty() {
        println!("  No skills assigned.");
    } else {
        for (name, count) in top {
            println!("  {}: {}", name, count);
        }
    }
    println!();

    println!("Resources per Business Unit:");
    let distribution = engine::business_unit_distribution(&resources);
    if distribution.is_empty() {
        println!("  No resources registered.");
    } else {
        for (name, count) in distribution {
            println!("  {}: {}", name, count);
        }
    }
}
