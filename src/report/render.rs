// check-env: Environment Configuration Checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text and JSON rendering of transformed tabs.
//!
//! ```text
//! Backend (backend)
//!   Auth Svc (auth-svc), 1 incomplete
//!     Key      Development  Staging  Production
//!     API_KEY  abc          -        xyz
//!     TIMEOUT  -            -        ""
//! ```
//!
//! `-` marks a key that is not configured, `""` one configured empty.

use std::fmt::Write as _;

use super::view::{Environment, Service, Tab, Variable};

/// Marker for a key with no value in an environment.
pub const NOT_CONFIGURED: &str = "-";

/// Marker for a key configured with an empty string.
pub const EMPTY_VALUE: &str = "\"\"";

/// Cell text for one value.
#[must_use]
pub fn cell(value: Option<&str>) -> &str {
    match value {
        None => NOT_CONFIGURED,
        Some("") => EMPTY_VALUE,
        Some(v) => v,
    }
}

/// Render tabs as an indented, column-aligned table.
#[must_use]
pub fn render_text(tabs: &[Tab]) -> String {
    if tabs.is_empty() {
        return "No variables found\n".to_string();
    }

    let mut out = String::new();
    for (i, tab) in tabs.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{} ({})", tab.name, tab.id);
        for service in &tab.services {
            render_service(&mut out, service);
        }
    }
    out
}

fn render_service(out: &mut String, service: &Service) {
    let missing = service.missing_count();
    if missing == 0 {
        let _ = writeln!(out, "  {} ({})", service.name, service.id);
    } else {
        let _ = writeln!(
            out,
            "  {} ({}), {missing} incomplete",
            service.name, service.id
        );
    }

    let header: Vec<&str> = std::iter::once("Key")
        .chain(Environment::ALL.into_iter().map(Environment::label))
        .collect();
    let rows: Vec<Vec<&str>> = service.variables.iter().map(row).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, text) in widths.iter_mut().zip(row) {
            *width = (*width).max(text.chars().count());
        }
    }

    write_row(out, &header, &widths);
    for row in &rows {
        write_row(out, row, &widths);
    }
}

fn row(variable: &Variable) -> Vec<&str> {
    std::iter::once(variable.key.as_str())
        .chain(Environment::ALL.into_iter().map(|env| cell(variable.value(env))))
        .collect()
}

fn write_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    let mut line = String::from("    ");
    for (i, (text, width)) in cells.iter().zip(widths.iter().copied()).enumerate() {
        if i + 1 == cells.len() {
            line.push_str(text);
        } else {
            let _ = write!(line, "{text:<width$}  ");
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render tabs as pretty-printed JSON, absent values as `null`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(tabs: &[Tab]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tabs)
}
