//! Admin console. Role-gated beyond the router's token check: a
//! non-admin landing here is bounced home.

use crate::components::icons::ShieldCheck;
use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use mealbridge_shared::UserRole;
use web_sys::console;

#[component]
pub fn Admin() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let is_admin = move || {
        session
            .state
            .get()
            .user()
            .is_some_and(|u| u.role == UserRole::Admin)
    };

    Effect::new(move |_| {
        if !is_admin() {
            console::log_1(&"[Admin] Non-admin access attempt, redirecting home.".into());
            router.navigate(AppRoute::Home);
        }
    });

    view! {
        <Show when=is_admin>
            <div class="max-w-5xl mx-auto px-4 sm:px-6 py-16">
                <div class="flex items-center gap-3">
                    <div class="bg-slate-900 text-white p-2 rounded-xl">
                        <ShieldCheck attr:class="h-5 w-5" />
                    </div>
                    <h1 class="text-3xl font-extrabold text-slate-900">"Admin Console"</h1>
                </div>
                <p class="mt-4 text-slate-600">
                    "Moderation tooling for flagged posts and donor verification lives here."
                </p>
            </div>
        </Show>
    }
}
