//! Finding and reading the fleet data files in RON, TOML, or JSON, and the
//! errors every loading step reports.

use axlemap_core::topology::TopologyError;
use axlemap_layout::LayoutConfigError;
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur during data loading.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// A required data file was not found in the given directory.
    #[error("required file {file} not found in {}", dir.display())]
    MissingRequired { file: FleetFile, dir: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {}", file.display())]
    UnsupportedFormat { file: PathBuf },

    /// Two files with the same base name but different formats exist.
    #[error("conflicting formats: {} and {}", a.display(), b.display())]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {}: {detail}", file.display())]
    Parse { file: PathBuf, detail: String },

    /// Two vehicles share an ID.
    #[error("duplicate vehicle '{id}' in {}", file.display())]
    DuplicateVehicle { file: PathBuf, id: String },

    /// A vehicle record carries a tire count the engine cannot accept.
    #[error("vehicle '{id}' in {}: {source}", file.display())]
    InvalidTireCount {
        file: PathBuf,
        id: String,
        #[source]
        source: TopologyError,
    },

    /// Layout constants failed validation.
    #[error("invalid layout config in {}: {source}", file.display())]
    InvalidLayout {
        file: PathBuf,
        #[source]
        source: LayoutConfigError,
    },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Fleet files
// ===========================================================================

/// The files a fleet data directory may hold, each in any supported format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetFile {
    /// The vehicle catalog. Required.
    Vehicles,
    /// Projector constants. Optional; absent fields keep their defaults.
    Layout,
}

impl FleetFile {
    pub fn base_name(self) -> &'static str {
        match self {
            FleetFile::Vehicles => "vehicles",
            FleetFile::Layout => "layout",
        }
    }
}

impl fmt::Display for FleetFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{{ron,toml,json}}", self.base_name())
    }
}

/// Find `file` in `dir` under any supported extension.
///
/// Returns `Ok(None)` when absent, or `ConflictingFormats` when more than one
/// extension is present.
pub(crate) fn locate(dir: &Path, file: FleetFile) -> Result<Option<PathBuf>, DataLoadError> {
    let mut found: Option<PathBuf> = None;

    for format in Format::ALL {
        let candidate = dir.join(format!("{}.{}", file.base_name(), format.extension()));
        if candidate.exists() {
            if let Some(existing) = found {
                return Err(DataLoadError::ConflictingFormats {
                    a: existing,
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }

    Ok(found)
}

/// Like [`locate`], but a missing file is an error.
pub(crate) fn locate_required(dir: &Path, file: FleetFile) -> Result<PathBuf, DataLoadError> {
    locate(dir, file)?.ok_or_else(|| DataLoadError::MissingRequired {
        file,
        dir: dir.to_path_buf(),
    })
}

// ===========================================================================
// Formats
// ===========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Ron,
    Toml,
    Json,
}

impl Format {
    /// Lookup order when scanning a directory.
    const ALL: [Format; 3] = [Format::Ron, Format::Toml, Format::Json];

    fn extension(self) -> &'static str {
        match self {
            Format::Ron => "ron",
            Format::Toml => "toml",
            Format::Json => "json",
        }
    }

    fn of(path: &Path) -> Result<Self, DataLoadError> {
        let ext = path.extension().and_then(|e| e.to_str());
        Self::ALL
            .into_iter()
            .find(|f| Some(f.extension()) == ext)
            .ok_or_else(|| DataLoadError::UnsupportedFormat {
                file: path.to_path_buf(),
            })
    }

    fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T, String> {
        match self {
            Format::Ron => ron::from_str(content).map_err(|e| e.to_string()),
            Format::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Read `path` and deserialize it in the format its extension names.
pub(crate) fn read_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = Format::of(path)?;
    let content = std::fs::read_to_string(path)?;
    format.parse(&content).map_err(|detail| DataLoadError::Parse {
        file: path.to_path_buf(),
        detail,
    })
}

// ===========================================================================
// Tests
// ===========================================================================
