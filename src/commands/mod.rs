/*
 * SPDX-FileCopyrightText: 2026 Skill Matrix Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod assign;
pub mod base;
pub mod business_unit;
pub mod resource;
pub mod search;
pub mod skill;
pub mod stats;
