/*
 * SPDX-FileCopyrightText: 2026 Skill Matrix Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use crate::business_units::BusinessUnitResponse;
use serde::{Deserialize, Serialize};

/// One skill held by a resource, as the API reports it. `name` is the
/// resolved skill name the backend embeds for convenience.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SkillAssignment {
    pub skill_id: i64,
    pub level: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Element of the PUT body for the update-skills endpoint. Unlike
/// [`SkillAssignment`] it carries no resolved name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SkillAssignmentUpdate {
    pub skill_id: i64,
    pub level: i64,
    pub labels: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ResourceResponse {
    pub id: i64,
    pub nome: String,
    pub cognome: String,
    pub email: String,
    pub numero: Option<String>,
    pub business_unit: BusinessUnitResponse,
    pub skills: Vec<SkillAssignment>,
}

#[derive(Serialize, Deserialize, Debug)]
struct MakeResourceRequest {
    pub nome: String,
    pub cognome: String,
    pub email: String,
    pub numero: Option<String>,
    pub business_unit_id: i64,
}

pub async fn get(config: RequestConfig) -> Result<Vec<ResourceResponse>, String> {
    let res = send(get_client(config, "resources".to_string(), RequestType::GET)).await?;

    parse_response(res).await
}

pub async fn get_resource(config: RequestConfig, resource: i64) -> Result<ResourceResponse, String> {
    let res = send(get_client(
        config,
        format!("resources/{}", resource),
        RequestType::GET,
    ))
    .await?;

    parse_response(res).await
}

pub async fn post(
    config: RequestConfig,
    nome: String,
    cognome: String,
    email: String,
    numero: Option<String>,
    business_unit_id: i64,
) -> Result<ResourceResponse, String> {
    let req = MakeResourceRequest {
        nome,
        cognome,
        email,
        numero,
        business_unit_id,
    };

    let res = send(get_client(config, "resources".to_string(), RequestType::POST).json(&req)).await?;

    parse_response(res).await
}

pub async fn put_resource_skills(
    config: RequestConfig,
    resource: i64,
    skills: Vec<SkillAssignmentUpdate>,
) -> Result<ResourceResponse, String> {
    let res = send(
        get_client(
            config,
            format!("resources/{}/skills", resource),
            RequestType::PUT,
        )
        .json(&skills),
    )
    .await?;

    parse_response(res).await
}

pub async fn delete_resource(config: RequestConfig, resource: i64) -> Result<(), String> {
    let res = send(get_client(
        config,
        format!("resources/{}", resource),
        RequestType::DELETE,
    ))
    .await?;

    parse_empty_response(res).await
}
