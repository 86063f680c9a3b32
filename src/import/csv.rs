//! Minimal comma-separated text parsing
//!
//! Quotes only toggle whether a comma splits the cell; they are never kept,
//! and a doubled quote is not an escape. Line breaks always end a row.

/// Split `text` into rows of trimmed cells, skipping blank lines.
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

/// Split a single line into trimmed cells.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    cells.push(current.trim().to_string());

    cells
}
