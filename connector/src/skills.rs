/*
 * SPDX-FileCopyrightText: 2026 Skill Matrix Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SkillResponse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
struct MakeSkillRequest {
    pub name: String,
    pub labels: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
struct LabelRequest {
    pub label: String,
}

pub async fn get(config: RequestConfig) -> Result<Vec<SkillResponse>, String> {
    let res = send(get_client(config, "skills".to_string(), RequestType::GET)).await?;

    parse_response(res).await
}

pub async fn post(
    config: RequestConfig,
    name: String,
    labels: Vec<String>,
) -> Result<SkillResponse, String> {
    let req = MakeSkillRequest { name, labels };

    let res = send(get_client(config, "skills".to_string(), RequestType::POST).json(&req)).await?;

    parse_response(res).await
}

pub async fn delete_skill(config: RequestConfig, skill: i64) -> Result<(), String> {
    let res = send(get_client(
        config,
        format!("skills/{}", skill),
        RequestType::DELETE,
    ))
    .await?;

    parse_empty_response(res).await
}

pub async fn post_skill_label(
    config: RequestConfig,
    skill: i64,
    label: String,
) -> Result<SkillResponse, String> {
    let req = LabelRequest { label };

    let res = send(
        get_client(
            config,
            format!("skills/{}/labels/add", skill),
            RequestType::POST,
        )
        .json(&req),
    )
    .await?;

    parse_response(res).await
}

// Removing a label the skill does not carry is a no-op on the server side.
pub async fn delete_skill_label(
    config: RequestConfig,
    skill: i64,
    label: String,
) -> Result<SkillResponse, String> {
    let req = LabelRequest { label };

    let res = send(
        get_client(
            config,
            format!("skills/{}/labels/remove", skill),
            RequestType::DELETE,
        )
        .json(&req),
    )
    .await?;

    parse_response(res).await
}
