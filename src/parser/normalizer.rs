//! Clean-up of the raw header block into a list of header lines.
//!
//! Each step is a pure transformation over the line list. Apart from the two
//! repairs of known rendering defects (a "File number:"/"Citation:" pair glued
//! onto one line, and a "File number:" line emitted before "Other
//! citation(s):"), line order is preserved. Applying [`normalize`] to its own
//! output changes nothing.

/// Substrings marking navigation or widget lines that carry no metadata.
const BOILERPLATE: &[&str] = &["Expanded Collapsed", "[PDF]"];

/// Prefix of image-only lines.
const IMAGE_PREFIX: &str = "![]";

const FILE_NUMBER: &str = "File number:";
const OTHER_CITATIONS: &[&str] = &["Other citations:", "Other citation:"];

/// Runs every normalization step over a raw header block.
#[must_use]
pub fn normalize(header: &str) -> Vec<String> {
    let mut lines = split_lines(header);
    drop_boilerplate(&mut lines);
    strip_decorations(&mut lines);
    split_file_number_and_citation(&mut lines);
    reorder_file_number(&mut lines);
    drop_trailing_heading(&mut lines);
    lines
}

/// Splits into trimmed, non-empty lines.
fn split_lines(header: &str) -> Vec<String> {
    header
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn drop_boilerplate(lines: &mut Vec<String>) {
    lines.retain(|line| {
        !BOILERPLATE.iter().any(|junk| line.contains(junk)) && !line.starts_with(IMAGE_PREFIX)
    });
}

fn strip_decorations(lines: &mut Vec<String>) {
    for line in &mut *lines {
        if line.contains('*') {
            *line = line.replace('*', "").trim().to_string();
        }
    }
    lines.retain(|line| !line.is_empty());
}

/// Repairs `File number: X Citation: Y` (or `number: X Citation: Y` when the
/// renderer dropped "File") into two lines.
fn split_file_number_and_citation(lines: &mut Vec<String>) {
    let mut index = 0;
    while index < lines.len() {
        let line = &lines[index];
        if line.contains("number:") {
            if let Some((file_number, citation)) = line.split_once("Citation:") {
                let mut file_number = file_number.trim().to_string();
                if !file_number.contains(FILE_NUMBER) {
                    file_number = file_number.replacen("number:", FILE_NUMBER, 1);
                }
                let citation = format!("Citation: {}", citation.trim());
                lines[index] = file_number;
                lines.insert(index + 1, citation);
                index += 1;
            }
        }
        index += 1;
    }
}

/// Moves a standalone "File number:" line to directly after the standalone
/// "Other citation(s):" line, where its value lines follow.
fn reorder_file_number(lines: &mut Vec<String>) {
    let Some(file_index) = lines.iter().position(|line| line == FILE_NUMBER) else {
        return;
    };
    if !lines.iter().any(|line| OTHER_CITATIONS.contains(&line.as_str())) {
        return;
    }

    let file_line = lines.remove(file_index);
    let other_index = lines
        .iter()
        .position(|line| OTHER_CITATIONS.contains(&line.as_str()))
        .unwrap_or(lines.len() - 1);
    lines.insert(other_index + 1, file_line);
}

/// Drops a trailing heading (a redundant title echo) together with the
/// author byline that precedes it.
///
/// Nothing is dropped unless the line left at the end afterwards is not a
/// heading itself, so a second pass never finds another heading to drop.
fn drop_trailing_heading(lines: &mut Vec<String>) {
    let Some(survivor) = lines.len().checked_sub(3) else {
        return;
    };
    if is_heading(&lines[lines.len() - 1]) && !is_heading(&lines[survivor]) {
        lines.truncate(survivor + 1);
    }
}

fn is_heading(line: &str) -> bool {
    line.starts_with('#')
}
