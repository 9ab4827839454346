use std::collections::HashMap;

use serde::Deserialize;
use toml::Value;

pub const MIN_WORKER_THREADS: usize = 1;
pub const MAX_WORKER_THREADS: usize = 64;

/// Size of the rayon pool that writes page files. Collection and layout
/// always run on the calling thread.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThreadPoolSettings {
    /// Page writers; 0 means one per available core.
    pub worker_threads: usize,
}

impl ThreadPoolSettings {
    /// Thread count handed to the pool builder, never 0.
    pub fn resolved_worker_threads(&self) -> usize {
        if self.worker_threads == 0 {
            return std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(MIN_WORKER_THREADS)
                .min(MAX_WORKER_THREADS);
        }
        self.worker_threads
    }

    pub(crate) fn apply_patch(
        &mut self,
        patch: ThreadPoolSettingsPatch,
    ) {
        if let Some(v) = patch.worker_threads {
            self.worker_threads = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        if self.worker_threads != 0 {
            self.worker_threads = self.worker_threads.clamp(MIN_WORKER_THREADS, MAX_WORKER_THREADS);
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub(crate) struct ThreadPoolSettingsPatch {
    pub(crate) worker_threads: Option<usize>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
