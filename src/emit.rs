use crate::Error;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_yaml::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// Output formats, in the order they are written.
    pub const ALL: [FileFormat; 2] = [FileFormat::Yaml, FileFormat::Json];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Yaml => "config.yaml",
            Self::Json => "config.json",
        }
    }

    /// Renders the whole document in memory. Nothing touches disk on failure.
    fn render(self, config: &Value) -> Result<Vec<u8>, Error> {
        match self {
            Self::Yaml => serde_yaml::to_string(config)
                .map(String::into_bytes)
                .map_err(|e| Error::Serialization(format!("Failed YAML serialization: {}", e))),
            Self::Json => {
                let mut out = Vec::new();
                let mut serializer = serde_json::Serializer::with_formatter(
                    &mut out,
                    PrettyFormatter::with_indent(b"    "),
                );
                config.serialize(&mut serializer).map_err(|e| {
                    Error::Serialization(format!("Failed JSON serialization: {}", e))
                })?;
                Ok(out)
            }
        }
    }
}

/// Writes `config` into `out_dir` in the given format, replacing any existing file.
/// The directory is not created.
pub fn write(config: &Value, format: FileFormat, out_dir: &Path) -> Result<PathBuf, Error> {
    let contents = format.render(config)?;
    let path = out_dir.join(format.file_name());
    std::fs::write(&path, contents).map_err(|e| {
        Error::Write(format!("Failed to write file '{}': {}", path.display(), e))
    })?;
    Ok(path)
}
