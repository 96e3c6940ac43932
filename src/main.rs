/*
 * SPDX-FileCopyrightText: 2026 Skill Matrix Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod commands;
mod config;
mod engine;
mod input;
mod notify;

mod tests;

#[tokio::main]
pub async fn main() -> std::io::Result<()> {
    commands::base::run_cli().await
}
