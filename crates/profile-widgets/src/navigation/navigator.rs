use profile_widgets_types::NavigationRequest;
use std::sync::Mutex;

/// Capability that carries out a navigation on behalf of the widgets.
///
/// Fire-and-forget: a request is delivered once per activation and is never
/// retried, queued or cancelled.
pub trait Navigator {
    fn navigate(&self, request: &NavigationRequest);
}

impl<F> Navigator for F
where
    F: Fn(&NavigationRequest),
{
    fn navigate(&self, request: &NavigationRequest) {
        self(request)
    }
}

/// Remembers every request it receives.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    requests: Mutex<Vec<NavigationRequest>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<NavigationRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<NavigationRequest> {
        self.requests
            .lock()
            .ok()
            .and_then(|requests| requests.last().cloned())
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|request| request.path.to_string())
            .collect()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, request: &NavigationRequest) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
    }
}

/// Logs each request, then hands it to the inner navigator.
pub struct TracingNavigator<N> {
    inner: N,
}

impl<N: Navigator> TracingNavigator<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> N {
        self.inner
    }
}

impl<N: Navigator> Navigator for TracingNavigator<N> {
    fn navigate(&self, request: &NavigationRequest) {
        tracing::info!(path = %request.path, mode = %request.mode, "navigate");
        self.inner.navigate(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_widgets_types::ProfilePath;
    use std::cell::RefCell;

    #[test]
    fn test_closure_navigator() {
        let seen = RefCell::new(Vec::new());
        let navigator = |request: &NavigationRequest| {
            seen.borrow_mut().push(request.path.to_string());
        };

        navigator.navigate(&NavigationRequest::full_page(ProfilePath::for_username(
            "abc",
        )));
        assert_eq!(seen.into_inner(), vec!["/profile/abc"]);
    }

    #[test]
    fn test_tracing_navigator_forwards() {
        let navigator = TracingNavigator::new(RecordingNavigator::new());
        navigator.navigate(&NavigationRequest::full_page(ProfilePath::for_username(
            "zed",
        )));
        assert_eq!(navigator.into_inner().paths(), vec!["/profile/zed"]);
    }
}
