//! MealBridge client application.
//!
//! Context-driven architecture:
//! - `web::route`: route definitions (domain model)
//! - `web::router`: routing service (hash-based engine with auth guard)
//! - `session`: authentication state and persistence
//! - `api`: REST gateway client
//! - `components`: UI layer

mod api;
mod components {
    pub mod admin;
    pub mod auth_modal;
    pub mod browse;
    pub mod dashboard;
    pub mod donors;
    pub mod home;
    pub mod how_it_works;
    mod icons;
    pub mod navbar;
    pub mod post_form;
    mod profile;
}
mod session;

// Browser-facing plumbing, kept apart from the UI layer.
pub(crate) mod web {
    pub mod route;
    pub mod router;
}

use crate::components::admin::Admin;
use crate::components::auth_modal::{AuthModal, AuthPromptContext, init_escape_listener};
use crate::components::browse::Browse;
use crate::components::dashboard::{DonorDashboard, SeekerDashboard};
use crate::components::donors::Donors;
use crate::components::home::Home;
use crate::components::how_it_works::HowItWorks;
use crate::components::navbar::Navbar;
use crate::components::post_form::{PostOffer, PostRequest};
use crate::session::{SessionContext, init_session};
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

use leptos::prelude::*;

fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <Home /> }.into_any(),
        AppRoute::Browse => view! { <Browse /> }.into_any(),
        AppRoute::Donors => view! { <Donors /> }.into_any(),
        AppRoute::HowItWorks => view! { <HowItWorks /> }.into_any(),
        AppRoute::DashboardSeeker => view! { <SeekerDashboard /> }.into_any(),
        AppRoute::DashboardDonor => view! { <DonorDashboard /> }.into_any(),
        AppRoute::PostRequest => view! { <PostRequest /> }.into_any(),
        AppRoute::PostOffer => view! { <PostOffer /> }.into_any(),
        AppRoute::Admin => view! { <Admin /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Session context first; the router's guard depends on its signal.
    let session_ctx = SessionContext::new();
    provide_context(session_ctx);
    init_session(&session_ctx);

    let prompt = AuthPromptContext::new();
    provide_context(prompt);
    init_escape_listener(prompt);

    let is_authenticated = session_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <div class="min-h-screen bg-slate-50 text-slate-900">
                <Navbar />
                <main>
                    <RouterOutlet matcher=route_matcher />
                </main>
            </div>
            {move || {
                prompt
                    .0
                    .get()
                    .map(|p| view! { <AuthModal prompt=p /> })
            }}
        </Router>
    }
}
