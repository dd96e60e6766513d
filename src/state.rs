use crate::community;
use crate::models::{CommunityMood, MoodEntry, User};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// The explicit session context: everything the handlers mutate lives here,
/// initialized from storage at startup and mirrored back on every change.
#[derive(Debug)]
pub struct AppData {
    pub entries: Vec<MoodEntry>,
    pub user: Option<User>,
    pub guest: bool,
    pub community: CommunityMood,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            user: None,
            guest: false,
            community: community::seed(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, data: AppData) -> Self {
        Self {
            data_dir,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
