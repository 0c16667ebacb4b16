//! Session store.
//!
//! Single source of truth for "is a user authenticated, and as whom".
//! The token and profile are persisted together in LocalStorage and
//! cleared together; the state is only ever replaced wholesale. Token
//! validity is never checked client-side: the first 401 from the backend
//! is the signal that the session is gone.

use crate::api::{ApiClient, ApiError};
use crate::web::route::AppRoute;
use crate::web::router::RouterService;
use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use mealbridge_shared::UserProfile;

const TOKEN_KEY: &str = "authToken";
const USER_KEY: &str = "currentUser";

#[derive(Clone, Default, PartialEq)]
pub struct SessionState {
    token: Option<String>,
    user: Option<UserProfile>,
}

impl SessionState {
    /// Presence of a token only; says nothing about server-side validity.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// An API client carrying this session's bearer token (or none).
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.token.clone())
    }
}

/// Session context shared through Leptos Context. Read and write halves
/// are split so views can observe without being able to mutate; all
/// mutation goes through the functions below.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// Auth signal for injection into the router.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// Restore a persisted session at application start. Both keys must be
/// present; a half-written pair is treated as logged out and purged.
pub fn init_session(ctx: &SessionContext) {
    let token: Option<String> = LocalStorage::get(TOKEN_KEY).ok();
    let user: Option<UserProfile> = LocalStorage::get(USER_KEY).ok();

    match (token, user) {
        (Some(token), Some(user)) => {
            ctx.set_state.set(SessionState {
                token: Some(token),
                user: Some(user),
            });
        }
        (None, None) => {}
        _ => {
            LocalStorage::delete(TOKEN_KEY);
            LocalStorage::delete(USER_KEY);
        }
    }
}

/// Persist a freshly minted session (login or completed verification)
/// and publish it to every observer.
pub fn establish(ctx: &SessionContext, token: String, user: UserProfile) {
    let _ = LocalStorage::set(TOKEN_KEY, &token);
    let _ = LocalStorage::set(USER_KEY, &user);

    ctx.set_state.set(SessionState {
        token: Some(token),
        user: Some(user),
    });
}

/// Drop the session. Idempotent; the router reacts to the auth signal
/// and leaves any protected view on its own.
pub fn clear(ctx: &SessionContext) {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(USER_KEY);
    ctx.set_state.set(SessionState::default());
}

/// Persist and publish an updated profile without disturbing the token.
/// A no-op when logged out, so a late profile response can never create
/// a half-written storage pair.
pub fn refresh_user(ctx: &SessionContext, user: UserProfile) {
    ctx.set_state.update(|state| {
        if state.token.is_some() {
            let _ = LocalStorage::set(USER_KEY, &user);
            state.user = Some(user);
        }
    });
}

/// Decision half of [`intercept_unauthorized`], kept pure for tests:
/// only [`ApiError::Unauthorized`] is consumed by the funnel.
fn survives_interception(err: ApiError) -> Option<ApiError> {
    if err.is_unauthorized() { None } else { Some(err) }
}

/// Uniform 401 handling for every component that talks to the backend.
///
/// Consumes [`ApiError::Unauthorized`] by force-clearing the session and
/// navigating home; any other error is handed back for local handling.
pub fn intercept_unauthorized(
    ctx: &SessionContext,
    router: &RouterService,
    err: ApiError,
) -> Option<ApiError> {
    match survives_interception(err) {
        Some(err) => Some(err),
        None => {
            web_sys::console::log_1(&"[Session] 401 received, clearing session.".into());
            clear(ctx);
            router.navigate(AppRoute::Home);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealbridge_shared::{UserRole, VerificationStatus};

    fn profile() -> UserProfile {
        UserProfile {
            id: "u-1".into(),
            role: UserRole::Student,
            email: "student@university.edu".into(),
            display_name: "Studious Owl".into(),
            verification_status: VerificationStatus::Verified,
            email_verified: true,
            city: "San Jose".into(),
            state: "CA".into(),
            zip: "95112".into(),
            languages: vec!["English".into()],
        }
    }

    #[test]
    fn authenticated_iff_token_present() {
        let empty = SessionState::default();
        assert!(!empty.is_authenticated());
        assert!(empty.user().is_none());

        let live = SessionState {
            token: Some("tok".into()),
            user: Some(profile()),
        };
        assert!(live.is_authenticated());
        assert_eq!(live.user().unwrap().role, UserRole::Student);
    }

    #[test]
    fn only_unauthorized_is_consumed_by_the_funnel() {
        assert!(survives_interception(ApiError::Unauthorized).is_none());

        let network = ApiError::Network("failed to fetch".into());
        assert_eq!(survives_interception(network.clone()), Some(network));

        let rejected = ApiError::Api {
            status: 422,
            message: "Invalid email".into(),
        };
        assert_eq!(survives_interception(rejected.clone()), Some(rejected));
    }

    #[test]
    fn client_carries_the_session_token() {
        let live = SessionState {
            token: Some("tok-9".into()),
            user: Some(profile()),
        };
        assert_eq!(live.client(), ApiClient::new(Some("tok-9".into())));
        assert_eq!(SessionState::default().client(), ApiClient::new(None));
    }
}
