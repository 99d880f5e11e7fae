//! Output formatting: table, JSON, plain.
//!
//! Renders the view models produced by the core in the format selected
//! by `--output`. Table uses `tabled`, JSON serializes the domain
//! types via serde, plain emits one identifier per line for scripting.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use rackview_core::{LogRow, ServerRow, Tone};

use crate::cli::ColorMode;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Apply a tone's color to a cell value.
fn paint(value: &str, tone: Tone, color: bool) -> String {
    if !color {
        return value.to_owned();
    }
    match tone {
        Tone::Success => value.green().to_string(),
        Tone::Danger => value.red().to_string(),
        Tone::Info => value.cyan().to_string(),
        Tone::Warning => value.yellow().to_string(),
        Tone::Neutral => value.to_owned(),
    }
}

// ── Table rows ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ServerTableRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "HOSTNAME")]
    hostname: String,
    #[tabled(rename = "OS")]
    os: String,
    #[tabled(rename = "TYPE")]
    server_type: String,
    #[tabled(rename = "PRIVATE IP")]
    private_ip: String,
    #[tabled(rename = "PUBLIC IP")]
    public_ip: String,
    #[tabled(rename = "OWNER")]
    primary_owner: String,
    #[tabled(rename = "DATACENTER")]
    datacenter: String,
    #[tabled(rename = "ENVIRONMENT")]
    environment: String,
}

#[derive(Tabled)]
struct LogTableRow {
    #[tabled(rename = "TIMESTAMP")]
    timestamp: String,
    #[tabled(rename = "USER")]
    user: String,
    #[tabled(rename = "ACTION")]
    action: String,
    #[tabled(rename = "RESOURCE")]
    resource: String,
    #[tabled(rename = "IP")]
    ip_address: String,
}

// ── Renderers ────────────────────────────────────────────────────────

pub fn servers_table(rows: &[ServerRow], color: bool) -> String {
    let table_rows: Vec<ServerTableRow> = rows
        .iter()
        .map(|row| ServerTableRow {
            id: row.id,
            hostname: row.hostname.clone(),
            os: row.os.clone(),
            server_type: row.server_type.clone(),
            private_ip: row.private_ip.clone(),
            public_ip: row.public_ip.clone(),
            primary_owner: row.primary_owner.clone(),
            datacenter: row.datacenter.clone(),
            environment: paint(&row.environment, row.environment_tone, color),
        })
        .collect();
    Table::new(table_rows).with(Style::rounded()).to_string()
}

pub fn logs_table(rows: &[LogRow], color: bool) -> String {
    let table_rows: Vec<LogTableRow> = rows
        .iter()
        .map(|row| LogTableRow {
            timestamp: row.timestamp.clone(),
            user: row.user.clone(),
            action: paint(&row.action, row.action_tone, color),
            resource: row.resource.clone(),
            ip_address: row.ip_address.clone(),
        })
        .collect();
    Table::new(table_rows).with(Style::rounded()).to_string()
}

/// Pretty-printed JSON of any serializable payload.
pub fn render_json<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "null".into())
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_is_identity_without_color() {
        assert_eq!(paint("production", Tone::Danger, false), "production");
    }

    #[test]
    fn paint_wraps_value_with_color() {
        let painted = paint("SERVER_CREATED", Tone::Success, true);
        assert!(painted.contains("SERVER_CREATED"));
        assert_ne!(painted, "SERVER_CREATED");
    }
}
