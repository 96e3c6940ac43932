/*
 * SPDX-FileCopyrightText: 2026 Skill Matrix Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#[cfg(test)]
mod tests {
    use crate::engine::*;
    use connector::business_units::{BuDeleteOptions, BusinessUnitResponse, DeleteAction};
    use connector::resources::{ResourceResponse, SkillAssignment};
    use connector::skills::SkillResponse;

    fn unit(id: i64, name: &str) -> BusinessUnitResponse {
        BusinessUnitResponse {
            id,
            name: name.to_string(),
        }
    }

    fn skill(id: i64, name: &str, labels: &[&str]) -> SkillResponse {
        SkillResponse {
            id,
            name: name.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    fn assignment(skill_id: i64, level: i64) -> SkillAssignment {
        SkillAssignment {
            skill_id,
            level,
            name: String::new(),
            labels: Vec::new(),
        }
    }

    fn labeled_assignment(skill_id: i64, level: i64, labels: &[&str]) -> SkillAssignment {
        SkillAssignment {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            ..assignment(skill_id, level)
        }
    }

    fn resource(
        id: i64,
        business_unit: BusinessUnitResponse,
        skills: Vec<SkillAssignment>,
    ) -> ResourceResponse {
        ResourceResponse {
            id,
            nome: format!("Nome{}", id),
            cognome: format!("Cognome{}", id),
            email: format!("persona{}@example.com", id),
            numero: None,
            business_unit,
            skills,
        }
    }

    fn sample_resources() -> Vec<ResourceResponse> {
        vec![
            resource(1, unit(1, "Cloud"), vec![assignment(10, 7)]),
            resource(2, unit(2, "Data"), vec![assignment(10, 3), assignment(20, 9)]),
            resource(3, unit(1, "Cloud"), vec![]),
        ]
    }

    #[test]
    fn test_unset_filter_returns_everything() {
        let resources = sample_resources();
        let matches = filter_resources(&resources, &SearchFilter::default());

        let ids: Vec<i64> = matches.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_business_unit_filter_exact_subset() {
        let resources = sample_resources();
        let filter = SearchFilter {
            business_unit_id: Some(1),
            ..SearchFilter::default()
        };

        let matches = filter_resources(&resources, &filter);
        assert!(matches.iter().all(|r| r.business_unit.id == 1));
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_skill_filter_respects_minimum_level() {
        let resources = sample_resources();
        let filter = SearchFilter {
            skill_id: Some(10),
            min_level: 5,
            ..SearchFilter::default()
        };

        let ids: Vec<i64> = filter_resources(&resources, &filter)
            .iter()
            .map(|r| r.id)
            .collect();

        // Resource 2 holds skill 10 only at level 3; resource 3 has no skills.
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_decreasing_minimum_never_shrinks_result() {
        let resources = sample_resources();

        let mut previous = 0;
        for min_level in (0..=MAX_LEVEL).rev() {
            let filter = SearchFilter {
                skill_id: Some(10),
                min_level,
                ..SearchFilter::default()
            };
            let count = filter_resources(&resources, &filter).len();
            assert!(count >= previous);
            previous = count;
        }
    }

    #[test]
    fn test_filters_are_anded() {
        let resources = sample_resources();
        let filter = SearchFilter {
            skill_id: Some(10),
            min_level: 0,
            business_unit_id: Some(2),
        };

        let ids: Vec<i64> = filter_resources(&resources, &filter)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_empty_skill_list_fails_skill_filter() {
        let resources = vec![resource(1, unit(1, "Cloud"), vec![])];
        let filter = SearchFilter {
            skill_id: Some(10),
            ..SearchFilter::default()
        };

        assert!(filter_resources(&resources, &filter).is_empty());
        assert_eq!(filter_resources(&resources, &SearchFilter::default()).len(), 1);
    }

    #[test]
    fn test_average_level_of_nothing_is_zero() {
        assert_eq!(average_level(&[]), "0.0");
        assert_eq!(
            average_level(&[resource(1, unit(1, "Cloud"), vec![])]),
            "0.0"
        );
    }

    #[test]
    fn test_average_level_one_decimal() {
        let resources = vec![resource(
            1,
            unit(1, "Cloud"),
            vec![assignment(1, 10), assignment(2, 0), assignment(3, 5)],
        )];

        assert_eq!(average_level(&resources), "5.0");
    }

    #[test]
    fn test_top_skills_stable_tie_break() {
        // Skill 1 and 2 both appear three times, skill 3 once; skill 1 is
        // seen first and must stay ahead of skill 2.
        let resources = vec![
            resource(1, unit(1, "Cloud"), vec![assignment(1, 5), assignment(2, 5)]),
            resource(2, unit(1, "Cloud"), vec![assignment(1, 5), assignment(2, 5)]),
            resource(
                3,
                unit(1, "Cloud"),
                vec![assignment(1, 5), assignment(2, 5), assignment(3, 5)],
            ),
        ];
        let skills = vec![skill(1, "A", &[]), skill(2, "B", &[]), skill(3, "C", &[])];

        let top = top_skills(&resources, &skills, TOP_SKILLS_LIMIT);
        assert_eq!(
            top,
            vec![
                ("A".to_string(), 3),
                ("B".to_string(), 3),
                ("C".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_top_skills_truncates_and_falls_back() {
        let resources = vec![resource(
            1,
            unit(1, "Cloud"),
            vec![
                assignment(1, 5),
                assignment(2, 5),
                assignment(3, 5),
                assignment(4, 5),
                assignment(5, 5),
                assignment(6, 5),
            ],
        )];
        // Skill 1 has been deleted from the catalog after assignment.
        let skills = vec![
            skill(2, "B", &[]),
            skill(3, "C", &[]),
            skill(4, "D", &[]),
            skill(5, "E", &[]),
            skill(6, "F", &[]),
        ];

        let top = top_skills(&resources, &skills, 5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0], (UNKNOWN_SKILL_NAME.to_string(), 1));
    }

    #[test]
    fn test_distribution_keeps_first_occurrence_order() {
        let resources = vec![
            resource(1, unit(2, "Data"), vec![]),
            resource(2, unit(1, "Cloud"), vec![]),
            resource(3, unit(2, "Data"), vec![]),
        ];

        assert_eq!(
            business_unit_distribution(&resources),
            vec![("Data".to_string(), 2), ("Cloud".to_string(), 1)]
        );
    }

    #[test]
    fn test_delete_without_dependents_needs_no_action() {
        let units = vec![unit(1, "Cloud"), unit(2, "Data")];
        let options = plan_business_unit_delete(1, 0, None, None, &units).unwrap();

        assert_eq!(
            options,
            BuDeleteOptions {
                action: DeleteAction::Delete,
                target_bu_id: None
            }
        );
    }

    #[test]
    fn test_delete_with_dependents_requires_action() {
        let units = vec![unit(1, "Cloud"), unit(2, "Data")];
        assert!(plan_business_unit_delete(1, 3, None, None, &units).is_err());
    }

    #[test]
    fn test_migrate_without_target_is_rejected() {
        let units = vec![unit(1, "Cloud"), unit(2, "Data")];
        let plan =
            plan_business_unit_delete(1, 3, Some(DeleteAction::Migrate), None, &units);
        assert!(plan.is_err());
    }

    #[test]
    fn test_migrate_target_must_differ_and_exist() {
        let units = vec![unit(1, "Cloud"), unit(2, "Data")];

        assert!(
            plan_business_unit_delete(1, 3, Some(DeleteAction::Migrate), Some(1), &units).is_err()
        );
        assert!(
            plan_business_unit_delete(1, 3, Some(DeleteAction::Migrate), Some(99), &units).is_err()
        );

        let options =
            plan_business_unit_delete(1, 3, Some(DeleteAction::Migrate), Some(2), &units).unwrap();
        assert_eq!(
            options,
            BuDeleteOptions {
                action: DeleteAction::Migrate,
                target_bu_id: Some(2)
            }
        );
    }

    #[test]
    fn test_explicit_delete_with_dependents() {
        let units = vec![unit(1, "Cloud")];
        let options =
            plan_business_unit_delete(1, 3, Some(DeleteAction::Delete), None, &units).unwrap();
        assert_eq!(options.action, DeleteAction::Delete);
        assert_eq!(options.target_bu_id, None);
    }

    #[test]
    fn test_migration_targets_exclude_deleted_unit() {
        let units = vec![unit(1, "Cloud"), unit(2, "Data"), unit(3, "Apps")];
        let targets = migration_targets(&units, 2);

        let ids: Vec<i64> = targets.iter().map(|bu| bu.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_upsert_drops_empty_assignments() {
        let current = vec![assignment(1, 4), assignment(2, 6)];

        let updates = upsert_assignment(&current, 1, 0, Vec::new());
        let ids: Vec<i64> = updates.iter().map(|u| u.skill_id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_upsert_keeps_level_zero_with_labels() {
        let current = vec![assignment(1, 4)];

        let updates = upsert_assignment(&current, 1, 0, vec!["frontend".to_string()]);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].level, 0);
        assert_eq!(updates[0].labels, vec!["frontend".to_string()]);
    }

    #[test]
    fn test_upsert_replaces_and_inserts() {
        let current = vec![
            labeled_assignment(1, 4, &["backend"]),
            assignment(2, 6),
        ];

        let updates = upsert_assignment(&current, 1, 8, Vec::new());
        assert_eq!(updates[0].level, 8);
        assert!(updates[0].labels.is_empty());
        assert_eq!(updates[1].level, 6);

        let updates = upsert_assignment(&current, 3, 5, Vec::new());
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[2].skill_id, 3);
    }

    #[test]
    fn test_validate_assignment_level_range() {
        let catalog_skill = skill(1, "Rust", &[]);

        assert!(validate_assignment(&catalog_skill, 0, &[]).is_ok());
        assert!(validate_assignment(&catalog_skill, 10, &[]).is_ok());
        assert!(validate_assignment(&catalog_skill, 11, &[]).is_err());
        assert!(validate_assignment(&catalog_skill, -1, &[]).is_err());
    }

    #[test]
    fn test_validate_assignment_label_subset() {
        let catalog_skill = skill(1, "Rust", &["backend", "systems"]);

        assert!(validate_assignment(&catalog_skill, 5, &["systems".to_string()]).is_ok());
        assert!(validate_assignment(&catalog_skill, 5, &["frontend".to_string()]).is_err());
    }

    #[test]
    fn test_all_labels_unique_and_sorted() {
        let skills = vec![
            skill(1, "Rust", &["systems", "backend"]),
            skill(2, "React.js", &["frontend", "backend"]),
        ];

        assert_eq!(
            all_labels(&skills),
            vec![
                "backend".to_string(),
                "frontend".to_string(),
                "systems".to_string()
            ]
        );
    }

    #[test]
    fn test_skills_with_label() {
        let skills = vec![
            skill(1, "Rust", &["backend"]),
            skill(2, "React.js", &["frontend"]),
        ];

        let matching = skills_with_label(&skills, "backend");
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].name, "Rust");
        assert!(skills_with_label(&skills, "devops").is_empty());
    }

    #[test]
    fn test_resolve_skill_name() {
        let skills = vec![skill(7, "SQL", &[])];

        let mut named = assignment(7, 5);
        named.name = "SQL Server".to_string();
        assert_eq!(resolve_skill_name(&named, &skills), "SQL Server");

        assert_eq!(resolve_skill_name(&assignment(7, 5), &skills), "SQL");
        assert_eq!(
            resolve_skill_name(&assignment(9, 5), &skills),
            UNKNOWN_SKILL_NAME
        );
    }

    #[test]
    fn test_dependent_resources_count() {
        let resources = sample_resources();
        assert_eq!(dependent_resources(&resources, 1), 2);
        assert_eq!(dependent_resources(&resources, 2), 1);
        assert_eq!(dependent_resources(&resources, 9), 0);
    }
}
