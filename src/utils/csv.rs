//! Minimal CSV reading and writing
//!
//! Only what the repository list and the result file need: comma separated
//! fields, optional double quotes with `""` escapes, one record per line.

use crate::config::RepositorySpec;
use anyhow::{Context, Result};
use std::path::Path;

/// Split one line into fields
pub fn parse_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(field.trim().to_string());
                field.clear();
            }
            _ => field.push(c),
        }
    }
    fields.push(field.trim().to_string());

    fields
}

/// Quote a field when it contains a separator, a quote or a line break
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Join fields into one CSV line (without the line terminator)
pub fn format_record<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Read repository URLs from the first column, skipping the header row
pub fn read_repository_urls(path: &Path) -> Result<Vec<RepositorySpec>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read repository list {}", path.display()))?;

    Ok(content
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_record(line).into_iter().next())
        .filter(|url| !url.is_empty())
        .map(RepositorySpec::new)
        .collect())
}
