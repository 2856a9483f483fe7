//! Fetch state surfaced to the presentation layer.

use crate::error::{HttpError, SdkError};

/// Broad category of a failed fetch, for choosing what to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    RateLimited,
    NotFound,
    BadRequest,
    Network,
    Server,
    InvalidResponse,
    Storage,
    Other,
}

/// A displayable fetch failure with a retry affordance.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
    /// Whether offering a "try again" action makes sense.
    pub retryable: bool,
}

impl FetchFailure {
    /// Short user-facing headline for the failure kind.
    pub fn title(&self) -> &'static str {
        match self.kind {
            FailureKind::RateLimited => "Too many requests",
            FailureKind::NotFound => "Not found",
            FailureKind::BadRequest => "Invalid request",
            FailureKind::Network => "Network error",
            FailureKind::Server => "Service unavailable",
            FailureKind::InvalidResponse => "Unexpected response",
            FailureKind::Storage => "Storage error",
            FailureKind::Other => "Something went wrong",
        }
    }
}

fn http_kind(err: &HttpError) -> FailureKind {
    match err {
        HttpError::RateLimited { .. } => FailureKind::RateLimited,
        HttpError::NotFound(_) => FailureKind::NotFound,
        HttpError::BadRequest { .. } => FailureKind::BadRequest,
        HttpError::ServerError { .. } => FailureKind::Server,
        HttpError::Timeout | HttpError::MaxRetriesExceeded { .. } => FailureKind::Network,
        #[cfg(feature = "http")]
        HttpError::Reqwest(e) if e.is_decode() => FailureKind::InvalidResponse,
        #[cfg(feature = "http")]
        HttpError::Reqwest(_) => FailureKind::Network,
    }
}

impl From<&SdkError> for FetchFailure {
    fn from(err: &SdkError) -> Self {
        let kind = match err {
            SdkError::Http(e) => http_kind(e),
            SdkError::Serde(_) | SdkError::Validation(_) => FailureKind::InvalidResponse,
            SdkError::Storage(_) => FailureKind::Storage,
            SdkError::Other(_) => FailureKind::Other,
        };
        Self {
            kind,
            message: err.to_string(),
            retryable: !matches!(kind, FailureKind::NotFound | FailureKind::BadRequest),
        }
    }
}

/// Result of a data fetch as seen by a view.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(FetchFailure),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> FetchState<T> {
    pub fn from_result(result: Result<T, SdkError>) -> Self {
        match result {
            Ok(value) => FetchState::Ready(value),
            Err(err) => FetchState::Failed(FetchFailure::from(&err)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            FetchState::Failed(f) => Some(f),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Ready(v) => FetchState::Ready(f(v)),
            FetchState::Failed(e) => FetchState::Failed(e),
        }
    }
}

impl<T> From<Result<T, SdkError>> for FetchState<T> {
    fn from(result: Result<T, SdkError>) -> Self {
        Self::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_is_retryable() {
        let err = SdkError::Http(HttpError::RateLimited { retry_after_ms: Some(1000) });
        let state: FetchState<()> = Err(err).into();
        let failure = state.failure().unwrap();
        assert_eq!(failure.kind, FailureKind::RateLimited);
        assert!(failure.retryable);
        assert_eq!(failure.title(), "Too many requests");
    }

    #[test]
    fn test_not_found_is_not_retryable() {
        let err = SdkError::Http(HttpError::NotFound("coin not found".into()));
        let failure = FetchFailure::from(&err);
        assert_eq!(failure.kind, FailureKind::NotFound);
        assert!(!failure.retryable);
        assert!(failure.message.contains("coin not found"));
    }

    #[test]
    fn test_ready_maps() {
        let state = FetchState::<u32>::from_result(Ok(2)).map(|v| v * 10);
        assert_eq!(state.data(), Some(&20));
        assert!(!state.is_loading());
        assert!(FetchState::<u32>::default().is_loading());
    }
}
