use crate::domain::MetadataRecord;

/// Field whose continuation lines keep their own identity.
const COUNSEL: &str = "counsel";

/// Walks header lines and groups them into `key: value` fields.
///
/// A line containing a colon starts a new field: the key is the text before
/// the first colon (lower-cased), the value the remainder. Lines without a
/// colon continue the current field and are joined with a space, except for
/// `counsel` whose continuation lines are joined with `counsel_joiner` so each
/// line stays a separate entry. Lines before the first key are ignored.
///
/// A `<<url>>` fragment is lifted out of whichever line carries it and stored
/// as `url`.
#[must_use]
pub fn segment(lines: &[String], counsel_joiner: &str) -> MetadataRecord {
    let mut record = MetadataRecord::new();
    let mut current: Option<(String, Vec<String>)> = None;

    for line in lines {
        let line = lift_url(line, &mut record);

        if let Some((key, value)) = line.split_once(':') {
            if let Some((key, parts)) = current.take() {
                flush(&mut record, &key, &parts, counsel_joiner);
            }
            current = Some((key.trim().to_lowercase(), vec![value.trim().to_string()]));
        } else if let Some((_, parts)) = current.as_mut() {
            parts.push(line.trim().to_string());
        }
    }

    if let Some((key, parts)) = current {
        flush(&mut record, &key, &parts, counsel_joiner);
    }

    record
}

fn flush(record: &mut MetadataRecord, key: &str, parts: &[String], counsel_joiner: &str) {
    let joiner = if key == COUNSEL { counsel_joiner } else { " " };
    let value = parts
        .iter()
        .map(String::as_str)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(joiner);
    record.insert(key, value.trim().to_string());
}

fn lift_url(line: &str, record: &mut MetadataRecord) -> String {
    let (Some(open), Some(close)) = (line.find("<<"), line.find(">>")) else {
        return line.to_string();
    };
    if close < open + 2 {
        return line.to_string();
    }
    record.insert("url", line[open + 2..close].trim());
    format!("{}{}", &line[..open], &line[close + 2..])
}
