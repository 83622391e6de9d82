use crate::abstract_trait::NavigatorTrait;
use parking_lot::Mutex;
use tracing::debug;

/// Navigator that records every pushed path, newest last.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    entries: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.entries.lock().last().cloned()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }
}

impl NavigatorTrait for HistoryNavigator {
    fn push(&self, path: &str) {
        debug!("navigate → {path}");
        self.entries.lock().push(path.to_string());
    }
}
