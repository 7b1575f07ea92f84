use canlii_metadata::{MetadataRecord, OutputFormat, Value};

use crate::cli::terminal::Colorize;

/// Renders a record in the requested format.
pub fn render(record: &MetadataRecord, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(record)?,
        OutputFormat::Yaml => serde_yaml::to_string(record)?,
        OutputFormat::Pretty => pretty(record),
    })
}

/// One field per line; list-shaped values get one indented line per item.
fn pretty(record: &MetadataRecord) -> String {
    let mut lines = Vec::new();
    for (key, value) in record {
        let key = format!("{key}:").info();
        match value {
            Value::Flag(flag) => lines.push(format!("{key} {flag}")),
            Value::Text(text) => lines.push(format!("{key} {text}")),
            Value::List(items) => {
                lines.push(key);
                lines.extend(items.iter().map(|item| format!("  • {item}")));
            }
            Value::Roles(pairs) => {
                lines.push(key);
                lines.extend(
                    pairs
                        .iter()
                        .map(|(name, role)| format!("  • {name} {}", format!("({role})").dim())),
                );
            }
            Value::Counsel(pairs) => {
                lines.push(key);
                lines.extend(pairs.iter().map(|(lawyer, parties)| {
                    format!("  • {lawyer} {}", format!("→ {}", parties.join(", ")).dim())
                }));
            }
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MetadataRecord {
        let mut record = MetadataRecord::new();
        record.insert("citation", "2020 SKCA 1");
        record.insert("before", vec!["Smith".to_string(), "Jones".to_string()]);
        record
    }

    #[test]
    fn json_output_is_a_flat_object() {
        let json = render(&record(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["citation"], "2020 SKCA 1");
        assert_eq!(value["before"][1], "Jones");
    }

    #[test]
    fn yaml_output_lists_items() {
        let yaml = render(&record(), OutputFormat::Yaml).unwrap();

        assert!(yaml.contains("citation: 2020 SKCA 1"));
        assert!(yaml.contains("- Smith"));
    }

    #[test]
    fn pretty_output_has_one_line_per_item() {
        let pretty = render(&record(), OutputFormat::Pretty).unwrap();

        assert!(pretty.contains("2020 SKCA 1"));
        assert!(pretty.contains("  • Smith"));
        assert_eq!(pretty.lines().count(), 4);
    }
}
