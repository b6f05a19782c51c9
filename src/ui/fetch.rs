//! Fetch lifecycle shared by every domain container.

/// Lifecycle of one upstream request.
///
/// `Success` and `Failure` are only reachable from `Loading`; a new request
/// may start from any state, superseding whatever was in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Failure(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Apply a completion if it belongs to the latest request.
    ///
    /// Completions carrying an older token, or arriving when nothing is
    /// loading, leave the state untouched.
    pub fn resolve(
        self,
        latest: RequestToken,
        token: RequestToken,
        outcome: Result<T, String>,
    ) -> Self {
        if token != latest || !self.is_loading() {
            return self;
        }
        match outcome {
            Ok(data) => Self::Success(data),
            Err(message) => Self::Failure(message),
        }
    }
}

/// Monotonic sequence number attached to each dispatched fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
