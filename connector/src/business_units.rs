/*
 * SPDX-FileCopyrightText: 2026 Skill Matrix Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BusinessUnitResponse {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct MakeBusinessUnitRequest {
    pub name: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeleteAction {
    Delete,
    Migrate,
}

/// Body of the business-unit DELETE request. `target_bu_id` is only sent
/// when migrating dependent resources to another unit.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct BuDeleteOptions {
    pub action: DeleteAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_bu_id: Option<i64>,
}

pub async fn get(config: RequestConfig) -> Result<Vec<BusinessUnitResponse>, String> {
    let res = send(get_client(
        config,
        "business_units".to_string(),
        RequestType::GET,
    ))
    .await?;

    parse_response(res).await
}

pub async fn post(config: RequestConfig, name: String) -> Result<BusinessUnitResponse, String> {
    let req = MakeBusinessUnitRequest { name };

    let res = send(
        get_client(config, "business_units".to_string(), RequestType::POST).json(&req),
    )
    .await?;

    parse_response(res).await
}

pub async fn delete_business_unit(
    config: RequestConfig,
    business_unit: i64,
    options: BuDeleteOptions,
) -> Result<(), String> {
    let res = send(
        get_client(
            config,
            format!("business_units/{}", business_unit),
            RequestType::DELETE,
        )
        .json(&options),
    )
    .await?;

    parse_empty_response(res).await
}
