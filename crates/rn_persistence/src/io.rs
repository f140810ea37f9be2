use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Error type for content I/O operations.
#[derive(Debug)]
pub enum PersistenceError {
    Io(std::io::Error),
    Ron(ron::Error),
    RonSpanned(ron::error::SpannedError),
}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ron::Error> for PersistenceError {
    fn from(err: ron::Error) -> Self {
        Self::Ron(err)
    }
}

impl From<ron::error::SpannedError> for PersistenceError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::RonSpanned(err)
    }
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Ron(e) => write!(f, "RON serialization error: {}", e),
            Self::RonSpanned(e) => write!(f, "RON parse error: {}", e),
        }
    }
}

impl std::error::Error for PersistenceError {}

/// Serialize `value` as pretty RON and write it to `path`, creating parent directories.
pub fn write_ron<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistenceError> {
    let pretty_config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .separate_tuple_members(true);

    let ron_string = ron::ser::to_string_pretty(value, pretty_config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, ron_string)?;
    Ok(())
}

/// Read and deserialize a RON file.
pub fn read_ron<T: DeserializeOwned>(path: &Path) -> Result<T, PersistenceError> {
    let contents = fs::read_to_string(path)?;
    let value = ron::from_str(&contents)?;
    Ok(value)
}
