use crate::config::SchoolConfig;
use std::path::PathBuf;

/// Context threaded through the handlers: where the cache lives and which
/// school the page is for. Built once at startup, no globals.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub school: SchoolConfig,
}

impl AppState {
    pub fn new(data_path: PathBuf, school: SchoolConfig) -> Self {
        Self { data_path, school }
    }
}
