//! Hash router service.
//!
//! Wraps the browser History API so all `window.history` access lives in
//! one place. Navigation follows a fixed pipeline: resolve the target,
//! run the auth guard, sync the hash, then update the route signal that
//! drives rendering. Back/forward replays arrive via `popstate` and go
//! through the same guard without pushing new entries.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, NavTarget};

/// Current `location.hash`, including the leading `#` (empty on `/`).
fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

fn push_history_state(hash: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(hash));
        }
    }
}

fn replace_history_state(hash: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(hash));
        }
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Scroll an element into view once the target route has rendered.
/// The short delay lets the view mount before we look up the id.
fn scroll_to_anchor(id: &'static str) {
    gloo_timers::callback::Timeout::new(100, move || {
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            element.scroll_into_view();
        }
    })
    .forget();
}

/// Router service shared through Context.
///
/// Holds the route signal and the injected auth signal; the session
/// store stays decoupled from history handling.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    /// Resolve the route from the URL present at application start, so a
    /// direct load of `#/browse` renders browse with no home flash.
    fn new(is_authenticated: Signal<bool>) -> Self {
        let hash = current_hash();
        let mut initial = AppRoute::from_hash(&hash);

        // Guard the entry URL itself: protected views bounce to home.
        if initial.requires_auth() && !is_authenticated.get_untracked() {
            initial = AppRoute::auth_failure_redirect();
        }
        // Normalize unknown or rejected fragments without growing the
        // history stack.
        if hash != initial.to_hash() {
            replace_history_state(initial.to_hash());
        }

        let (current_route, set_route) = signal(initial);
        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    /// Signal-free constructor for host tests; skips the DOM entirely.
    #[cfg(test)]
    fn with_route(route: AppRoute) -> Self {
        let (current_route, set_route) = signal(route);
        Self {
            current_route,
            set_route,
            is_authenticated: Signal::derive(|| false),
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Whether an async completion started from `view` arrived too late
    /// to apply. Every view that loads or submits over the network
    /// checks this, untracked, before touching its signals.
    pub fn is_stale(&self, view: AppRoute) -> bool {
        self.current_route.get_untracked() != view
    }

    /// Navigate to a view or an in-page anchor.
    ///
    /// Anchor targets never produce an anchor-only hash: the URL becomes
    /// the parent route's hash and the viewport scrolls to the section.
    /// When the parent is already the active route, no history entry is
    /// pushed at all.
    pub fn navigate(&self, target: impl Into<NavTarget>) {
        match target.into() {
            NavTarget::Route(route) => self.navigate_to_route(route, true),
            NavTarget::Anchor { id, parent } => {
                if self.current_route.get_untracked() != parent {
                    self.navigate_to_route(parent, true);
                }
                scroll_to_anchor(id);
            }
        }
    }

    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();

        if target_route.requires_auth() && !is_auth {
            web_sys::console::log_1(&"[Router] Access denied. Redirecting home.".into());
            let redirect = AppRoute::auth_failure_redirect();
            if use_push {
                push_history_state(redirect.to_hash());
            } else {
                replace_history_state(redirect.to_hash());
            }
            self.set_route.set(redirect);
            scroll_to_top();
            return;
        }

        if use_push {
            push_history_state(target_route.to_hash());
        } else {
            replace_history_state(target_route.to_hash());
        }
        self.set_route.set(target_route);
        scroll_to_top();
    }

    /// Back/forward handling. The browser already moved the history
    /// cursor, so this only resolves and guards the new hash.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_hash(&current_hash());

            if target_route.requires_auth() && !is_authenticated.get_untracked() {
                let redirect = AppRoute::auth_failure_redirect();
                replace_history_state(redirect.to_hash());
                set_route.set(redirect);
            } else {
                set_route.set(target_route);
            }
            scroll_to_top();
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // App-lifetime listener; leak the closure to keep it alive.
        closure.forget();
    }

    /// When the session disappears (logout or a 401 force-clear) while a
    /// protected view is active, return to home.
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if !is_auth && route.requires_auth() {
                web_sys::console::log_1(
                    &"[Router] Session ended on a protected view, redirecting home.".into(),
                );
                let redirect = AppRoute::auth_failure_redirect();
                push_history_state(redirect.to_hash());
                set_route.set(redirect);
                scroll_to_top();
            }
        });
    }
}

/// Provide the router service to Context and wire up its listeners.
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI components
// ============================================================================

/// Router root component; mount once at the top of the app.
#[component]
pub fn Router(
    /// Auth state signal, injected so the router never touches the
    /// session store directly.
    is_authenticated: Signal<bool>,
    /// Child components
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// Renders whatever view the matcher selects for the current route.
#[component]
pub fn RouterOutlet(
    /// Route matching function: current route in, view out.
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completions_for_a_left_view_are_stale() {
        let router = RouterService::with_route(AppRoute::Browse);
        assert!(!router.is_stale(AppRoute::Browse));
        assert!(router.is_stale(AppRoute::PostRequest));
        assert!(router.is_stale(AppRoute::Home));
    }

    #[test]
    fn staleness_follows_the_route_signal() {
        let router = RouterService::with_route(AppRoute::PostOffer);
        assert!(!router.is_stale(AppRoute::PostOffer));

        router.set_route.set(AppRoute::DashboardDonor);
        assert!(router.is_stale(AppRoute::PostOffer));
        assert!(!router.is_stale(AppRoute::DashboardDonor));
    }
}
