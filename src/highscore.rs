//! Persisted best score
//!
//! A single integer slot, stored in LocalStorage as a plain decimal string
//! so it survives across sessions. Missing or unparsable values fall back
//! to zero rather than failing.

/// The session-surviving best score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore(pub u32);

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "highScore";

    /// Record a finished run's score
    ///
    /// The slot only moves upward: returns true (and persists) iff `score`
    /// strictly beats the stored best.
    pub fn submit(&mut self, score: u32) -> bool {
        if score > self.0 {
            self.0 = score;
            self.save();
            log::info!("new high score: {}", score);
            true
        } else {
            false
        }
    }

    /// Load the stored best from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(raw)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(score) = raw.parse() {
                    log::info!("loaded high score: {}", score);
                    return Self(score);
                }
            }
        }

        log::info!("no stored high score, starting at 0");
        Self(0)
    }

    /// Write the current best to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.0.to_string());
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self(0)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_only_moves_upward() {
        let mut best = HighScore(100);
        assert!(!best.submit(100));
        assert_eq!(best.0, 100);
        assert!(!best.submit(40));
        assert_eq!(best.0, 100);
        assert!(best.submit(110));
        assert_eq!(best.0, 110);
    }

    #[test]
    fn test_monotonic_across_sessions() {
        let mut best = HighScore::default();
        let mut last = 0;
        for score in [30, 10, 90, 90, 200, 150] {
            best.submit(score);
            assert!(best.0 >= last);
            last = best.0;
        }
        assert_eq!(best.0, 200);
    }
}
