use crate::entry::CustomerEntry;

/// Column order of the CSV export. Spreadsheet imports downstream rely on
/// this exact header row.
pub const CSV_HEADERS: [&str; 5] = ["name", "email", "notes", "tags", "next_steps"];

/// Render entries as CSV: a header row plus one row per entry, rows joined
/// by `\n` with no trailing newline. Every field is quoted, whether or not
/// it needs to be, so embedded commas and newlines survive round trips.
/// Entries without generated fields export those columns as empty strings.
pub fn entries_to_csv(entries: &[CustomerEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    for entry in entries {
        let fields = [
            entry.name.as_str(),
            entry.email.as_str(),
            entry.notes.as_str(),
            entry.tags.as_deref().unwrap_or(""),
            entry.next_steps.as_deref().unwrap_or(""),
        ];
        lines.push(
            fields
                .iter()
                .map(|field| quote(field))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// Quote one field, doubling embedded quotes per RFC 4180.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
