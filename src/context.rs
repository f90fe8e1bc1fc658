use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::Config;

/// Shared stop flag, set from the Ctrl-C handler and polled between units of work.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Everything one run needs besides the scraped novel.
#[derive(Debug, Clone)]
pub struct Context {
    pub working_dir: PathBuf,
    /// Prefix for the relative cover paths found on volume pages.
    pub base_url: String,
    /// Recognised file extensions, dot included, compared case-sensitively.
    pub extensions: Vec<String>,
    pub cancel: CancelToken,
}

impl Context {
    pub fn new(config: &Config, working_dir: PathBuf, cancel: CancelToken) -> Context {
        Context {
            working_dir,
            base_url: config.base_url.clone(),
            extensions: config.extensions.clone(),
            cancel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CancelToken;

    #[test]
    fn cancel_is_shared_between_clones() {
        let token = CancelToken::new();
        let handle = token.clone();

        assert!(!token.is_cancelled());

        handle.cancel();

        assert!(token.is_cancelled());
    }
}
