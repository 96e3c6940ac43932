/*
 * SPDX-FileCopyrightText: 2026 Skill Matrix Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Client-side filtering, aggregation and payload shaping over collections
//! already fetched from the API. Everything here is pure and synchronous.

use connector::business_units::{BuDeleteOptions, BusinessUnitResponse, DeleteAction};
use connector::resources::{ResourceResponse, SkillAssignment, SkillAssignmentUpdate};
use connector::skills::SkillResponse;
use std::collections::BTreeSet;

pub const MAX_LEVEL: i64 = 10;
pub const TOP_SKILLS_LIMIT: usize = 5;

/// Shown when an assignment references a skill that no longer exists in the
/// catalog, e.g. one deleted after being assigned.
pub const UNKNOWN_SKILL_NAME: &str = "N/D";

#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    pub skill_id: Option<i64>,
    pub min_level: i64,
    pub business_unit_id: Option<i64>,
}

/// Applies the search filter: an unset selector passes everything, both
/// selectors are ANDed, and input order is preserved.
pub fn filter_resources<'a>(
    resources: &'a [ResourceResponse],
    filter: &SearchFilter,
) -> Vec<&'a ResourceResponse> {
    resources
        .iter()
        .filter(|resource| {
            let bu_match = filter
                .business_unit_id
                .is_none_or(|id| resource.business_unit.id == id);
            let skill_match = filter.skill_id.is_none_or(|id| {
                resource
                    .skills
                    .iter()
                    .any(|s| s.skill_id == id && s.level >= filter.min_level)
            });

            bu_match && skill_match
        })
        .collect()
}

/// Mean of all assignment levels across all resources, one decimal. Zero
/// assignments yield "0.0" rather than a division by zero.
pub fn average_level(resources: &[ResourceResponse]) -> String {
    let levels: Vec<i64> = resources
        .iter()
        .flat_map(|r| r.skills.iter().map(|s| s.level))
        .collect();

    if levels.is_empty() {
        return "0.0".to_string();
    }

    format!(
        "{:.1}",
        levels.iter().sum::<i64>() as f64 / levels.len() as f64
    )
}

/// Occurrence count per skill across all assignments, descending. The sort is
/// stable, so equal counts keep the order of first appearance. Ids missing
/// from the catalog resolve to [`UNKNOWN_SKILL_NAME`].
pub fn top_skills(
    resources: &[ResourceResponse],
    skills: &[SkillResponse],
    limit: usize,
) -> Vec<(String, usize)> {
    let mut counts: Vec<(i64, usize)> = Vec::new();
    for resource in resources {
        for assignment in &resource.skills {
            match counts.iter_mut().find(|(id, _)| *id == assignment.skill_id) {
                Some((_, count)) => *count += 1,
                None => counts.push((assignment.skill_id, 1)),
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);

    counts
        .into_iter()
        .map(|(skill_id, count)| {
            let name = skills
                .iter()
                .find(|s| s.id == skill_id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| UNKNOWN_SKILL_NAME.to_string());
            (name, count)
        })
        .collect()
}

/// Resources grouped by business-unit name, category order matching the
/// first occurrence of each name.
pub fn business_unit_distribution(resources: &[ResourceResponse]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for resource in resources {
        match counts
            .iter_mut()
            .find(|(name, _)| *name == resource.business_unit.name)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((resource.business_unit.name.clone(), 1)),
        }
    }

    counts
}

pub fn dependent_resources(resources: &[ResourceResponse], business_unit: i64) -> usize {
    resources
        .iter()
        .filter(|r| r.business_unit.id == business_unit)
        .count()
}

pub fn migration_targets(
    units: &[BusinessUnitResponse],
    excluded: i64,
) -> Vec<&BusinessUnitResponse> {
    units.iter().filter(|bu| bu.id != excluded).collect()
}

/// Decides the body of a business-unit DELETE request before any network
/// call. With no dependent resources the deletion proceeds directly; with
/// dependents the operator must pick an action, and a migration needs a
/// target that exists and differs from the unit being deleted.
pub fn plan_business_unit_delete(
    business_unit: i64,
    dependents: usize,
    action: Option<DeleteAction>,
    target: Option<i64>,
    all_units: &[BusinessUnitResponse],
) -> Result<BuDeleteOptions, String> {
    if dependents == 0 {
        return Ok(BuDeleteOptions {
            action: DeleteAction::Delete,
            target_bu_id: None,
        });
    }

    match action {
        None => Err(format!(
            "{} resources still belong to this business unit. Choose an action ('delete' or 'migrate').",
            dependents
        )),
        Some(DeleteAction::Delete) => Ok(BuDeleteOptions {
            action: DeleteAction::Delete,
            target_bu_id: None,
        }),
        Some(DeleteAction::Migrate) => {
            let target = target
                .ok_or_else(|| "A target business unit is required for migration.".to_string())?;

            if target == business_unit {
                return Err(
                    "Cannot migrate resources to the business unit being deleted.".to_string()
                );
            }

            if !all_units.iter().any(|bu| bu.id == target) {
                return Err(format!("Business unit {} does not exist.", target));
            }

            Ok(BuDeleteOptions {
                action: DeleteAction::Migrate,
                target_bu_id: Some(target),
            })
        }
    }
}

/// Rebuilds the full update-skills payload with one assignment replaced or
/// inserted. Entries at level 0 without labels are considered absent and are
/// dropped from the saved set.
pub fn upsert_assignment(
    current: &[SkillAssignment],
    skill_id: i64,
    level: i64,
    labels: Vec<String>,
) -> Vec<SkillAssignmentUpdate> {
    let mut updates: Vec<SkillAssignmentUpdate> = current
        .iter()
        .map(|s| SkillAssignmentUpdate {
            skill_id: s.skill_id,
            level: s.level,
            labels: s.labels.clone(),
        })
        .collect();

    match updates.iter_mut().find(|u| u.skill_id == skill_id) {
        Some(update) => {
            update.level = level;
            update.labels = labels;
        }
        None => updates.push(SkillAssignmentUpdate {
            skill_id,
            level,
            labels,
        }),
    }

    updates.retain(|u| u.level > 0 || !u.labels.is_empty());
    updates
}

/// Checks an assignment against the catalog entry before it is sent: the
/// level must stay in range and every label must belong to the skill.
pub fn validate_assignment(
    skill: &SkillResponse,
    level: i64,
    labels: &[String],
) -> Result<(), String> {
    if !(0..=MAX_LEVEL).contains(&level) {
        return Err(format!("Level must be between 0 and {}.", MAX_LEVEL));
    }

    for label in labels {
        if !skill.labels.contains(label) {
            return Err(format!(
                "Skill \"{}\" has no label \"{}\".",
                skill.name, label
            ));
        }
    }

    Ok(())
}

/// Unique labels across the whole catalog, sorted.
pub fn all_labels(skills: &[SkillResponse]) -> Vec<String> {
    skills
        .iter()
        .flat_map(|s| s.labels.iter().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

pub fn skills_with_label<'a>(skills: &'a [SkillResponse], label: &str) -> Vec<&'a SkillResponse> {
    skills
        .iter()
        .filter(|s| s.labels.iter().any(|l| l == label))
        .collect()
}

/// Display name for an assignment: the embedded name when the backend sent
/// one, otherwise a catalog lookup, otherwise [`UNKNOWN_SKILL_NAME`].
pub fn resolve_skill_name(assignment: &SkillAssignment, skills: &[SkillResponse]) -> String {
    if !assignment.name.is_empty() {
        return assignment.name.clone();
    }

    skills
        .iter()
        .find(|s| s.id == assignment.skill_id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| UNKNOWN_SKILL_NAME.to_string())
}
