// Copyright 2026 aurum developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::warn;
use signal_hook::consts::signal::{SIGINT, SIGTERM};
use signal_hook::flag;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// Token used to observe cancellation signals triggered by the user.
///
/// Long-running operations (the snapshot download, the streaming scan over
/// the cached dataset) check the token at their per-step boundaries and bail
/// out with [`crate::error::AurError::Cancelled`] once it trips.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Marks the token as cancelled. Intended for internal use and tests.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_FLAG: OnceLock<Arc<AtomicBool>> = OnceLock::new();

/// Returns a cancellation token backed by global SIGINT/SIGTERM handlers.
pub fn global_token() -> CancellationToken {
    let flag = GLOBAL_FLAG.get_or_init(|| {
        let flag = Arc::new(AtomicBool::new(false));
        for signal in [SIGINT, SIGTERM] {
            if let Err(err) = flag::register(signal, flag.clone()) {
                warn!("Failed to register cancellation handler for signal {signal}: {err}");
            }
        }
        flag
    });

    CancellationToken { flag: flag.clone() }
}
