//! Formatting helpers for CLI output.

use comfy_table::{ContentArrangement, Table};
use dockerfile_core::Command;

/// Create a styled table with the given headers.
pub fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::NOTHING);
    table.set_header(headers);
    table
}

/// Render a command's value the way it was written: a JSON array for exec
/// form, space-separated otherwise.
pub fn format_value(command: &Command) -> String {
    if command.is_json() {
        serde_json::to_string(command.value()).unwrap_or_else(|_| command.value().join(" "))
    } else {
        command.value().join(" ")
    }
}

/// Apply a format template, replacing `{{.Field}}` placeholders.
pub fn apply_format(command: &Command, fmt: &str) -> String {
    fmt.replace("{{.Cmd}}", command.cmd())
        .replace("{{.SubCmd}}", command.sub_cmd().unwrap_or(""))
        .replace("{{.Json}}", &command.is_json().to_string())
        .replace("{{.Flags}}", &command.flags().join(" "))
        .replace("{{.Value}}", &format_value(command))
        .replace("{{.StartLine}}", &command.start_line().to_string())
        .replace("{{.Original}}", command.original())
}
