//! Device-list persistence with atomic writes and backup support.
//!
//! The storage seam is the `DeviceListStore` trait so the screen logic
//! never depends on a concrete file layout; tests inject `MemoryStore`.
//! `FileStore` is the real thing: a versioned JSON file written with
//! temp-file-then-rename, with a timestamped backup of the previous
//! contents taken before every save.

use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use atomic_write_file::AtomicWriteFile;
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::core::types::DeviceConfig;
use crate::devices::DeviceError;

/// Current on-disk schema version.
const FILE_VERSION: u32 = 1;

/// Loads and saves the full set of device configs.
///
/// `load` on a store that has never been written returns an empty list,
/// not an error; first launch has no devices file yet.
pub trait DeviceListStore {
    fn load(&self) -> Result<Vec<DeviceConfig>, DeviceError>;
    fn save(&self, configs: &[DeviceConfig]) -> Result<(), DeviceError>;
}

/// On-disk shape of the devices file.
#[derive(Deserialize, Serialize)]
struct DeviceListFile {
    version: u32,
    devices: Vec<DeviceConfig>,
}

/// JSON file storage with atomic writes and timestamped backups.
#[derive(Debug)]
pub struct FileStore {
    /// Path to the devices file.
    path: PathBuf,
    /// Backup directory next to the devices file.
    backup_dir: PathBuf,
}

impl FileStore {
    /// Creates a store for the given devices file.
    ///
    /// The file itself may not exist yet; the backup directory is
    /// created next to it on demand.
    pub fn new(path: PathBuf) -> Self {
        let backup_dir = path
            .parent()
            .map(|p| p.join("backups"))
            .unwrap_or_else(|| PathBuf::from("backups"));
        Self { path, backup_dir }
    }

    /// Copies the current devices file into the backup directory.
    fn create_backup(&self) -> Result<(), DeviceError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            // Nothing to back up on first save
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(DeviceError::BackupFailed(e.to_string())),
        };

        fs::create_dir_all(&self.backup_dir)
            .map_err(|e| DeviceError::BackupFailed(e.to_string()))?;

        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");
        let original_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("devices.json");
        let backup_path = self
            .backup_dir
            .join(format!("{}.{}", original_name, timestamp));

        fs::write(&backup_path, &content).map_err(|e| DeviceError::BackupFailed(e.to_string()))?;
        Ok(())
    }
}

impl DeviceListStore for FileStore {
    fn load(&self) -> Result<Vec<DeviceConfig>, DeviceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(DeviceError::Io(e)),
        };

        let file: DeviceListFile = serde_json::from_str(&content)
            .map_err(|e| DeviceError::InvalidDeviceFile(e.to_string()))?;

        if file.version != FILE_VERSION {
            return Err(DeviceError::InvalidDeviceFile(format!(
                "unsupported file version {}",
                file.version
            )));
        }

        Ok(file.devices)
    }

    fn save(&self, configs: &[DeviceConfig]) -> Result<(), DeviceError> {
        self.create_backup()?;

        let file = DeviceListFile {
            version: FILE_VERSION,
            devices: configs.to_vec(),
        };
        let content = serde_json::to_string_pretty(&file)
            .map_err(|e| DeviceError::WriteFailed(e.to_string()))?;

        let mut out = AtomicWriteFile::options()
            .open(&self.path)
            .map_err(|e| {
                DeviceError::WriteFailed(format!("Failed to open for atomic write: {}", e))
            })?;
        out.write_all(content.as_bytes())
            .map_err(|e| DeviceError::WriteFailed(format!("Failed to write content: {}", e)))?;
        out.commit()
            .map_err(|e| DeviceError::WriteFailed(format!("Failed to commit: {}", e)))?;

        Ok(())
    }
}

/// In-memory store for tests and examples.
///
/// Records every save so tests can assert that persistence was
/// triggered at the right moments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    configs: RefCell<Vec<DeviceConfig>>,
    save_count: RefCell<usize>,
}

impl MemoryStore {
    /// Creates a store pre-seeded with configs.
    pub fn with_configs(configs: Vec<DeviceConfig>) -> Self {
        Self {
            configs: RefCell::new(configs),
            save_count: RefCell::new(0),
        }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        *self.save_count.borrow()
    }
}

// Lets tests keep a handle on a shared store while the DeviceList owns
// another one.
impl<S: DeviceListStore + ?Sized> DeviceListStore for std::rc::Rc<S> {
    fn load(&self) -> Result<Vec<DeviceConfig>, DeviceError> {
        (**self).load()
    }

    fn save(&self, configs: &[DeviceConfig]) -> Result<(), DeviceError> {
        (**self).save(configs)
    }
}

impl DeviceListStore for MemoryStore {
    fn load(&self) -> Result<Vec<DeviceConfig>, DeviceError> {
        Ok(self.configs.borrow().clone())
    }

    fn save(&self, configs: &[DeviceConfig]) -> Result<(), DeviceError> {
        *self.configs.borrow_mut() = configs.to_vec();
        *self.save_count.borrow_mut() += 1;
        Ok(())
    }
}
