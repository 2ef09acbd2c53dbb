pub mod commands;
pub mod models;
pub mod util;

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Mutex;
use std::time::Duration;

use models::{ServerStatus, User};

pub use commands::{auth, projects, search, servers};
pub use util::storage::{Loaded, StorageError};

const DEFAULT_AUTH_DELAY: Duration = Duration::from_secs(1);

/// Process-wide handle constructed once at startup. Holds the data directory
/// and the in-memory half of the session; the persisted half lives in JSON
/// documents under `app_dir`.
pub struct AppState {
    pub app_dir: PathBuf,
    pub(crate) session: Mutex<Option<User>>,
    pub(crate) pending: AtomicBool,
    pub(crate) auth_delay: Duration,
    pub(crate) servers: Mutex<Vec<ServerStatus>>,
}

impl AppState {
    pub fn new(app_dir: PathBuf) -> Self {
        Self::with_auth_delay(app_dir, DEFAULT_AUTH_DELAY)
    }

    /// Same as `new` but with a caller-chosen simulated-latency delay for
    /// login/signup. Tests pass `Duration::ZERO`.
    pub fn with_auth_delay(app_dir: PathBuf, auth_delay: Duration) -> Self {
        AppState {
            app_dir,
            session: Mutex::new(None),
            pending: AtomicBool::new(false),
            auth_delay,
            servers: Mutex::new(servers::initial_fleet()),
        }
    }
}

pub fn default_app_dir() -> PathBuf {
    // Per-user data directory, falling back to the working directory
    dirs::data_dir().map(|d| d.join("folio")).unwrap_or_else(|| {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    })
}
