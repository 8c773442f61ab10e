/// Lifecycle of a view's data load. Transitions happen only when an
/// operation resolves; an in-flight request never mutates state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Error(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Proof that a load was started against the current epoch. Stale tokens
/// belong to loads whose view has since been cancelled or reloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Monotonic counter scoping in-flight loads to the view's lifetime.
/// A completion may only be applied while its token is still current.
#[derive(Debug, Default)]
pub struct LoadEpoch(u64);

impl LoadEpoch {
    pub fn begin(&mut self) -> LoadToken {
        self.0 += 1;
        LoadToken(self.0)
    }

    /// Invalidate all outstanding tokens, e.g. when the view is torn down.
    pub fn cancel(&mut self) {
        self.0 += 1;
    }

    pub fn is_current(&self, token: LoadToken) -> bool {
        token.0 == self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_invalidates_outstanding_tokens() {
        let mut epoch = LoadEpoch::default();
        let token = epoch.begin();
        assert!(epoch.is_current(token));

        epoch.cancel();
        assert!(!epoch.is_current(token));
    }

    #[test]
    fn newer_load_supersedes_older() {
        let mut epoch = LoadEpoch::default();
        let first = epoch.begin();
        let second = epoch.begin();
        assert!(!epoch.is_current(first));
        assert!(epoch.is_current(second));
    }

    #[test]
    fn view_state_accessors() {
        let state: ViewState<Vec<i32>> = ViewState::Ready(vec![1]);
        assert_eq!(state.ready(), Some(&vec![1]));
        assert!(state.error().is_none());

        let state: ViewState<Vec<i32>> = ViewState::Error("boom".to_string());
        assert_eq!(state.error(), Some("boom"));
        assert!(state.ready().is_none());
    }
}
