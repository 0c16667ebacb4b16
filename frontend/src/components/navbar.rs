//! Top navigation bar.

use crate::components::auth_modal::use_auth_prompt;
use crate::components::icons::{LogOut, ShieldCheck};
use crate::components::profile::ProfileModal;
use crate::session::{self, use_session};
use crate::web::route::{AppRoute, NavTarget};
use crate::web::router::use_router;
use leptos::prelude::*;
use mealbridge_shared::UserRole;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let prompt = use_auth_prompt();
    let profile_open = RwSignal::new(false);

    let is_authenticated = session.is_authenticated_signal();
    let dashboard_route = move || {
        session
            .state
            .get()
            .user()
            .map(|u| AppRoute::dashboard_for(u.role))
            .unwrap_or(AppRoute::Home)
    };

    let on_logout = move |_| {
        session::clear(&session);
        router.navigate(AppRoute::Home);
    };

    view! {
        <nav class="sticky top-0 z-40 bg-white/90 backdrop-blur border-b border-slate-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-20 flex items-center justify-between">
                <div
                    class="flex items-center gap-2 cursor-pointer"
                    role="button"
                    aria-label="MealBridge Home"
                    on:click=move |_| router.navigate(AppRoute::Home)
                >
                    <div class="bg-brand-600 text-white p-2 rounded-xl">
                        <ShieldCheck attr:class="h-5 w-5" />
                    </div>
                    <h1 class="text-xl font-bold text-slate-900 tracking-tight">"MealBridge"</h1>
                </div>

                <div class="hidden md:flex items-center gap-1">
                    <button
                        on:click=move |_| router.navigate(AppRoute::Browse)
                        class="text-sm font-bold text-slate-600 hover:text-brand-700 rounded px-2 py-1"
                    >
                        "Browse"
                    </button>
                    <button
                        on:click=move |_| router.navigate(AppRoute::Donors)
                        class="text-sm font-bold text-slate-600 hover:text-brand-700 rounded px-2 py-1"
                    >
                        "Donors"
                    </button>
                    <button
                        on:click=move |_| router.navigate(AppRoute::HowItWorks)
                        class="text-sm font-bold text-slate-600 hover:text-brand-700 rounded px-2 py-1"
                    >
                        "How It Works"
                    </button>
                    <button
                        on:click=move |_| router.navigate(NavTarget::FAQ)
                        class="text-sm font-bold text-slate-600 hover:text-brand-700 rounded px-2 py-1"
                    >
                        "FAQ"
                    </button>
                </div>

                <div class="flex items-center gap-2">
                    <Show
                        when=move || is_authenticated.get()
                        fallback=move || {
                            view! {
                                <button
                                    on:click=move |_| prompt.open_entry(UserRole::Student)
                                    class="text-sm font-bold text-slate-600 hover:text-brand-700 rounded px-3 py-2"
                                >
                                    "Student Login"
                                </button>
                                <button
                                    on:click=move |_| prompt.open_entry(UserRole::Donor)
                                    class="text-sm font-bold text-white bg-brand-600 hover:bg-brand-700 rounded-xl px-4 py-2 shadow"
                                >
                                    "Donor Login"
                                </button>
                            }
                        }
                    >
                        <button
                            on:click=move |_| router.navigate(dashboard_route())
                            class="text-sm font-bold text-slate-600 hover:text-brand-700 rounded px-3 py-2"
                        >
                            "Dashboard"
                        </button>
                        <button
                            on:click=move |_| profile_open.set(true)
                            class="text-sm font-bold text-slate-600 hover:text-brand-700 rounded px-3 py-2"
                        >
                            "Profile"
                        </button>
                        <button
                            on:click=on_logout
                            aria-label="Logout"
                            class="flex items-center gap-1 text-sm font-bold text-slate-600 hover:text-red-600 rounded px-3 py-2"
                        >
                            <LogOut attr:class="h-4 w-4" />
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>

        <Show when=move || profile_open.get()>
            <ProfileModal on_close=Callback::new(move |_| profile_open.set(false)) />
        </Show>
    }
}
