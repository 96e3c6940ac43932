/*
 * SPDX-FileCopyrightText: 2026 Skill Matrix Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

/// Outcome severity shown to the operator. Transport failures, server-side
/// errors and client-side validation failures all surface through the same
/// channel; none of them are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

pub fn notify(severity: Severity, message: &str) {
    match severity {
        Severity::Success => println!("{}", message),
        Severity::Warning => eprintln!("warning: {}", message),
        Severity::Error => eprintln!("error: {}", message),
    }
}
