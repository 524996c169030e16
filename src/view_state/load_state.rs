//! Load lifecycle shared by every screen.

use tracing::debug;

/// Where a screen's data currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Nothing requested yet
    Idle,
    /// A fetch is in flight
    Loading,
    /// The latest fetch succeeded
    Loaded(T),
    /// The latest fetch failed; holds the message shown to the user
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// The loaded value, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short label for logs.
    pub fn phase(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }
}

/// A [`LoadState`] guarded by a generation token.
///
/// Each call to [`Loadable::begin`] supersedes every earlier fetch. Results
/// carrying an older token are ignored, so the state always reflects the
/// most recently started fetch.
#[derive(Debug, Clone)]
pub struct Loadable<T> {
    state: LoadState<T>,
    generation: u64,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            generation: 0,
        }
    }
}

impl<T> Loadable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Loading` and hand out the token for the new fetch.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.generation
    }

    /// Apply the result of the fetch started with `generation`.
    ///
    /// Returns `false` and leaves the state untouched when a newer fetch has
    /// been started since.
    pub fn resolve(&mut self, generation: u64, result: Result<T, String>) -> bool {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "Dropping stale load result"
            );
            return false;
        }

        self.state = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(message) => LoadState::Failed(message),
        };
        true
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// Token of the most recently started fetch (0 before the first).
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
