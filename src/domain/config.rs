use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Output encodings for an extracted record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, coloured when the terminal supports it.
    #[default]
    Pretty,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

/// Configuration for metadata extraction.
///
/// Controls how documents are split into header and body, how cross-reference
/// links are rendered, and where (if anywhere) source documents are archived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct ExtractorConfig {
    /// Delimiter separating the header block from the decision body in the
    /// converted Markdown.
    pub delimiter: String,

    /// Boilerplate marker preceding the real start of the header block.
    pub header_marker: String,

    /// Base URL prepended to relative cross-reference paths.
    pub link_base_url: String,

    /// Root directory for archiving source documents.
    ///
    /// When `None`, nothing is written to disk.
    pub archive_root: Option<PathBuf>,

    /// Default output encoding for the command line.
    pub output: OutputFormat,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            header_marker: default_header_marker(),
            link_base_url: default_link_base_url(),
            archive_root: None,
            output: OutputFormat::default(),
        }
    }
}

impl ExtractorConfig {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        toml::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Write)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Write)
    }

    /// Loads the configuration at `path` if the file exists, otherwise returns
    /// the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Errors raised while reading or writing an [`ExtractorConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    /// The configuration file is not valid TOML for this schema.
    #[error("Failed to parse config file: {0}")]
    Parse(#[source] toml::de::Error),

    /// The configuration could not be encoded as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] toml::ser::Error),

    /// The configuration file could not be written.
    #[error("Failed to write config file: {0}")]
    Write(#[source] std::io::Error),
}

fn default_delimiter() -> String {
    "\n__\n".to_string()
}

fn default_header_marker() -> String {
    "[Home]".to_string()
}

fn default_link_base_url() -> String {
    "https://www.canlii.org".to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_delimiter")]
        delimiter: String,

        #[serde(default = "default_header_marker")]
        header_marker: String,

        #[serde(default = "default_link_base_url")]
        link_base_url: String,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        archive_root: Option<PathBuf>,

        #[serde(default)]
        output: OutputFormat,
    },
}

impl From<Versions> for ExtractorConfig {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                delimiter,
                header_marker,
                link_base_url,
                archive_root,
                output,
            } => Self {
                delimiter,
                header_marker,
                link_base_url,
                archive_root,
                output,
            },
        }
    }
}

impl From<ExtractorConfig> for Versions {
    fn from(config: ExtractorConfig) -> Self {
        Self::V1 {
            delimiter: config.delimiter,
            header_marker: config.header_marker,
            link_base_url: config.link_base_url,
            archive_root: config.archive_root,
            output: config.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\nheader_marker = \"[Accueil]\"\narchive_root = \"/data/canlii\"\noutput = \"json\"\n",
        )
        .unwrap();

        let config = ExtractorConfig::load(file.path()).unwrap();

        assert_eq!(config.header_marker, "[Accueil]");
        assert_eq!(config.archive_root, Some(PathBuf::from("/data/canlii")));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.delimiter, "\n__\n");
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = ExtractorConfig::load(&missing).unwrap_err();
        assert!(matches!(error, ConfigError::Read(_)));
        assert!(error.to_string().starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\noutput = \"xml\"\n").unwrap();

        let error = ExtractorConfig::load(file.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn empty_file_returns_default() {
        let expected = ExtractorConfig::default();
        let actual: ExtractorConfig = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested/config.toml");
        let config = ExtractorConfig {
            archive_root: Some(tmp.path().join("archive")),
            ..ExtractorConfig::default()
        };

        config.save(&path).unwrap();

        assert_eq!(ExtractorConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn load_or_default_without_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ExtractorConfig::load_or_default(&tmp.path().join("none.toml")).unwrap();
        assert_eq!(config, ExtractorConfig::default());
    }
}
