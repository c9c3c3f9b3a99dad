use anyhow::{bail, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

const APP_DATA_DIR_NAME: &str = "produce-list";

/// Owns the directory the app keeps its config and log file in.
pub struct FileManager {
    data_dir: PathBuf,
}

impl FileManager {
    /// # Errors
    ///
    /// Returns an error if the local data directory cannot be found or created.
    pub fn init(data_dir_override: Option<&Path>) -> Result<Self> {
        let data_dir = if let Some(dir) = data_dir_override {
            dir.to_path_buf()
        } else if let Some(dir) = dirs::data_local_dir() {
            dir.join(APP_DATA_DIR_NAME)
        } else {
            bail!("Could not find local data directory.");
        };

        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).with_context(|| {
                format!("Could not create data directory '{}'", data_dir.display())
            })?;
        }

        Ok(Self { data_dir })
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn path_to(&self, path_from_data_dir: impl AsRef<Path>) -> PathBuf {
        self.data_dir.join(path_from_data_dir)
    }

    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be opened, or if
    /// an error occurs while reading.
    pub fn read_data(&self, path_from_data_dir: impl AsRef<Path>) -> Result<String> {
        let file = fs::read_to_string(self.path_to(path_from_data_dir))?;
        Ok(file)
    }

    #[must_use]
    pub fn has_data_file(&self, path_from_data_dir: impl AsRef<Path>) -> bool {
        self.path_to(path_from_data_dir).exists()
    }
}
