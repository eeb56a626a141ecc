use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::CourierError;
use crate::state::user::User;

/// Key-value persistence for the signed-in user: written on login, register
/// and profile update, deleted on logout, read once on startup. Durability
/// beyond that contract is not the engine's concern.
pub trait UserStore {
    fn save(&self, user: &User) -> Result<(), CourierError>;
    fn load(&self) -> Result<Option<User>, CourierError>;
    fn clear(&self) -> Result<(), CourierError>;
}

/// TOML file under the platform data directory.
pub struct FileUserStore {
    path: PathBuf,
}

impl FileUserStore {
    pub fn new() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join("courier").join("user.toml"),
        }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for FileUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for FileUserStore {
    fn save(&self, user: &User) -> Result<(), CourierError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(user)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<User>, CourierError> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Ok(None);
        };
        // A corrupt file reads as "nobody signed in"
        Ok(toml::from_str(&content).ok())
    }

    fn clear(&self) -> Result<(), CourierError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    slot: Mutex<Option<User>>,
}

impl MemoryUserStore {
    fn lock(&self) -> std::sync::MutexGuard<'_, Option<User>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl UserStore for MemoryUserStore {
    fn save(&self, user: &User) -> Result<(), CourierError> {
        *self.lock() = Some(user.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<User>, CourierError> {
        Ok(self.lock().clone())
    }

    fn clear(&self) -> Result<(), CourierError> {
        *self.lock() = None;
        Ok(())
    }
}
