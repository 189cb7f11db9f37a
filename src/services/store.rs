//! Persistence of the timer state between invocations
//!
//! There is no locking: two invocations racing on the same file resolve as
//! last writer wins. Clicks on a status bar are rare enough that this is
//! accepted.

use std::{
    cell::RefCell,
    env, fs,
    path::{Path, PathBuf},
};

use chrono::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::state::TimerState;

/// State file name under the user's home directory
pub const STATE_FILE_NAME: &str = ".i3-timer.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unable to determine the home directory (HOME is not set)")]
    HomeNotFound,
    #[error("unable to read timer state {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid timer state {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to write timer state {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to encode timer state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Load/save port for the timer state
pub trait TimerStore {
    /// `Ok(None)` when nothing has been stored yet
    fn load(&self) -> Result<Option<TimerState>, StoreError>;
    fn save(&self, state: &TimerState) -> Result<(), StoreError>;
}

/// Load the stored state, or build an idle one with `default_duration`.
///
/// The flag is true when the default was used, so the caller knows the state
/// must be written back. Unparsable content counts as missing.
pub fn load_or_default<S: TimerStore + ?Sized>(
    store: &S,
    default_duration: Duration,
) -> Result<(TimerState, bool), StoreError> {
    match store.load() {
        Ok(Some(state)) => Ok((state, false)),
        Ok(None) => {
            debug!("No stored timer state, using default duration");
            Ok((TimerState::new(default_duration), true))
        }
        Err(StoreError::Parse { path, source }) => {
            warn!("Ignoring invalid timer state {}: {}", path.display(), source);
            Ok((TimerState::new(default_duration), true))
        }
        Err(e) => Err(e),
    }
}

/// JSON file backed store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$HOME/.i3-timer.json`
    pub fn in_home() -> Result<Self, StoreError> {
        let home = env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .ok_or(StoreError::HomeNotFound)?;
        Ok(Self::new(PathBuf::from(home).join(STATE_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TimerStore for FileStore {
    fn load(&self) -> Result<Option<TimerState>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    fn save(&self, state: &TimerState) -> Result<(), StoreError> {
        let json = serde_json::to_string(state)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!("Timer state saved to {}", self.path.display());
        Ok(())
    }
}

/// In-process store, used by tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RefCell<Option<TimerState>>,
    saves: RefCell<usize>,
}

impl MemoryStore {
    pub fn with_state(state: TimerState) -> Self {
        Self {
            state: RefCell::new(Some(state)),
            saves: RefCell::new(0),
        }
    }

    pub fn state(&self) -> Option<TimerState> {
        self.state.borrow().clone()
    }

    /// Number of saves performed so far
    pub fn saves(&self) -> usize {
        *self.saves.borrow()
    }
}

impl TimerStore for MemoryStore {
    fn load(&self) -> Result<Option<TimerState>, StoreError> {
        Ok(self.state())
    }

    fn save(&self, state: &TimerState) -> Result<(), StoreError> {
        *self.state.borrow_mut() = Some(state.clone());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
