use dioxus::prelude::*;
use std::future::Future;

/// Count of in-flight requests, shared through context.
///
/// Wrap a request future with [`PendingRequests::track`] to have the
/// [`LoadingOverlay`] shown until it settles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingRequests {
    count: Signal<usize>,
}

impl PendingRequests {
    pub fn new() -> Self {
        Self {
            count: Signal::new(0),
        }
    }

    pub fn count(&self) -> usize {
        *self.count.read()
    }

    pub fn is_pending(&self) -> bool {
        self.count() > 0
    }

    pub async fn track<F: Future>(mut self, future: F) -> F::Output {
        *self.count.write() += 1;
        let output = future.await;
        let remaining = self.count.peek().saturating_sub(1);
        self.count.set(remaining);
        output
    }
}

impl Default for PendingRequests {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide a fresh tracker to this component's subtree.
pub fn use_pending_requests_provider() -> PendingRequests {
    use_context_provider(PendingRequests::new)
}

/// Spinner overlay shown while any tracked request is in flight.
/// Renders nothing when no tracker is in scope.
#[component]
pub fn LoadingOverlay() -> Element {
    let pending = try_use_context::<PendingRequests>();
    let active = pending.map(|p| p.is_pending()).unwrap_or(false);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if active {
            div { class: "loading-overlay", role: "status", aria_live: "polite",
                div { class: "loading-spinner" }
                span { class: "sr-only", "Loading…" }
            }
        }
    }
}
