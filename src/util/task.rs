use std::collections::HashMap;
use tokio::task::JoinHandle;

/// Owns the background tasks the UI starts. Keyed tasks replace (and abort)
/// their predecessor; detached ones run to completion unless aborted.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
    detached: Vec<JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, key: &str, task: JoinHandle<()>) {
        if let Some(handle) = self.tasks.insert(key.to_string(), task) {
            handle.abort();
        }
    }

    pub fn detach(&mut self, task: JoinHandle<()>) {
        self.detached.retain(|handle| !handle.is_finished());
        self.detached.push(task);
    }

    pub fn is_running(&self, key: &str) -> bool {
        self.tasks.get(key).is_some_and(|handle| !handle.is_finished())
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.values().chain(self.detached.iter()) {
            handle.abort();
        }
        self.tasks.clear();
        self.detached.clear();
    }
}
