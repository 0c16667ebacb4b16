//! Authenticated dashboards. The seeker and donor variants share the
//! stats strip and the active/history tab split; only the listing type
//! and the "new post" target differ.

use crate::components::icons::{RefreshCw, Utensils};
use crate::session::{self, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mealbridge_shared::{MealOffer, MealRequest, UserStats};
use web_sys::console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PostsTab {
    Active,
    History,
}

fn status_badge(active: bool, label: String) -> impl IntoView {
    let class = if active {
        "text-xs font-bold uppercase text-green-700 bg-green-50 rounded px-2 py-1"
    } else {
        "text-xs font-bold uppercase text-slate-500 bg-slate-100 rounded px-2 py-1"
    };
    view! { <span class=class>{label}</span> }
}

#[component]
fn StatsStrip(stats: ReadSignal<Option<UserStats>>) -> impl IntoView {
    view! {
        <Show when=move || stats.get().is_some()>
            {move || {
                stats
                    .get()
                    .map(|s| {
                        view! {
                            <div class="mt-8 grid grid-cols-1 sm:grid-cols-3 gap-4">
                                <div class="bg-white rounded-xl border border-slate-200 p-5 text-center">
                                    <p class="text-2xl font-extrabold text-brand-700">{s.meals_shared}</p>
                                    <p class="text-xs font-bold uppercase text-slate-500">"Meals Shared"</p>
                                </div>
                                <div class="bg-white rounded-xl border border-slate-200 p-5 text-center">
                                    <p class="text-2xl font-extrabold text-brand-700">{s.meals_received}</p>
                                    <p class="text-xs font-bold uppercase text-slate-500">"Meals Received"</p>
                                </div>
                                <div class="bg-white rounded-xl border border-slate-200 p-5 text-center">
                                    <p class="text-2xl font-extrabold text-brand-700">{s.active_posts}</p>
                                    <p class="text-xs font-bold uppercase text-slate-500">"Active Posts"</p>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}

#[component]
fn TabBar(tab: ReadSignal<PostsTab>, set_tab: WriteSignal<PostsTab>) -> impl IntoView {
    let tab_class = move |t: PostsTab| {
        if tab.get() == t {
            "px-4 py-2 text-sm font-bold rounded-lg bg-brand-600 text-white"
        } else {
            "px-4 py-2 text-sm font-bold rounded-lg text-slate-600 hover:bg-slate-100"
        }
    };
    view! {
        <div class="flex gap-2">
            <button class=move || tab_class(PostsTab::Active) on:click=move |_| set_tab.set(PostsTab::Active)>
                "Active"
            </button>
            <button class=move || tab_class(PostsTab::History) on:click=move |_| set_tab.set(PostsTab::History)>
                "History"
            </button>
        </div>
    }
}

#[component]
pub fn SeekerDashboard() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (requests, set_requests) = signal(Vec::<MealRequest>::new());
    let (stats, set_stats) = signal(Option::<UserStats>::None);
    let (tab, set_tab) = signal(PostsTab::Active);
    let (loading, set_loading) = signal(true);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        reload.track();
        let client = session.state.get_untracked().client();
        set_loading.set(true);
        spawn_local(async move {
            let fetched = client.get_my_requests().await;
            let fetched_stats = client.get_stats().await;
            if router.is_stale(AppRoute::DashboardSeeker) {
                console::log_1(&"[Dashboard] Discarding stale seeker response".into());
                return;
            }
            match fetched {
                Ok(list) => set_requests.set(list),
                Err(e) => {
                    if let Some(e) = session::intercept_unauthorized(&session, &router, e) {
                        console::log_1(&format!("[Dashboard] Request fetch failed: {e}").into());
                        set_loading.set(false);
                    }
                    return;
                }
            }
            match fetched_stats {
                Ok(s) => set_stats.set(Some(s)),
                Err(e) => {
                    if let Some(e) = session::intercept_unauthorized(&session, &router, e) {
                        console::log_1(&format!("[Dashboard] Stats fetch failed: {e}").into());
                    }
                }
            }
            set_loading.set(false);
        });
    });

    let visible = move || {
        let want_active = tab.get() == PostsTab::Active;
        requests
            .get()
            .into_iter()
            .filter(|r| r.status.is_active() == want_active)
            .collect::<Vec<_>>()
    };

    let display_name = move || {
        session
            .state
            .get()
            .user()
            .map(|u| u.display_name.clone())
            .unwrap_or_default()
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <div class="flex flex-col sm:flex-row sm:items-center justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-extrabold text-slate-900">"Active Requests"</h1>
                    <p class="mt-1 text-slate-600">{move || format!("Welcome back, {}.", display_name())}</p>
                </div>
                <div class="flex items-center gap-2">
                    <button
                        aria-label="Refresh"
                        on:click=move |_| set_reload.update(|n| *n = n.wrapping_add(1))
                        class="p-2 rounded-lg border border-slate-300 text-slate-600 hover:text-brand-700"
                    >
                        <RefreshCw attr:class="h-4 w-4" />
                    </button>
                    <button
                        on:click=move |_| router.navigate(AppRoute::PostRequest)
                        class="bg-brand-600 hover:bg-brand-700 text-white font-bold px-5 py-2 rounded-xl shadow"
                    >
                        "+ New Request"
                    </button>
                </div>
            </div>

            <StatsStrip stats=stats />

            <div class="mt-10">
                <TabBar tab=tab set_tab=set_tab />
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! { <p class="mt-12 text-center text-slate-500 font-bold">"Loading your posts..."</p> }
                }
            >
                <Show
                    when=move || !visible().is_empty()
                    fallback=move || {
                        view! {
                            <p class="mt-12 text-center text-slate-500">
                                {move || {
                                    if tab.get() == PostsTab::Active {
                                        "You have no active requests. Post one to get started."
                                    } else {
                                        "No past requests yet."
                                    }
                                }}
                            </p>
                        }
                    }
                >
                    <div class="mt-6 space-y-4">
                        <For each=visible key=|r| r.id.clone() let:request>
                            <div class="bg-white rounded-xl border border-slate-200 p-5 flex flex-col sm:flex-row sm:items-center justify-between gap-3">
                                <div>
                                    <p class="font-bold text-slate-900">{request.description.clone()}</p>
                                    <p class="mt-1 text-sm text-slate-500">
                                        {format!(
                                            "{}, {} | {} | {}",
                                            request.city,
                                            request.state,
                                            request.frequency.label(),
                                            request
                                                .logistics
                                                .iter()
                                                .map(|l| l.label())
                                                .collect::<Vec<_>>()
                                                .join(" / "),
                                        )}
                                    </p>
                                </div>
                                {status_badge(
                                    request.status.is_active(),
                                    format!("{:?}", request.status),
                                )}
                            </div>
                        </For>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
pub fn DonorDashboard() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (offers, set_offers) = signal(Vec::<MealOffer>::new());
    let (stats, set_stats) = signal(Option::<UserStats>::None);
    let (tab, set_tab) = signal(PostsTab::Active);
    let (loading, set_loading) = signal(true);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        reload.track();
        let client = session.state.get_untracked().client();
        set_loading.set(true);
        spawn_local(async move {
            let fetched = client.get_my_offers().await;
            let fetched_stats = client.get_stats().await;
            if router.is_stale(AppRoute::DashboardDonor) {
                console::log_1(&"[Dashboard] Discarding stale donor response".into());
                return;
            }
            match fetched {
                Ok(list) => set_offers.set(list),
                Err(e) => {
                    if let Some(e) = session::intercept_unauthorized(&session, &router, e) {
                        console::log_1(&format!("[Dashboard] Offer fetch failed: {e}").into());
                        set_loading.set(false);
                    }
                    return;
                }
            }
            match fetched_stats {
                Ok(s) => set_stats.set(Some(s)),
                Err(e) => {
                    if let Some(e) = session::intercept_unauthorized(&session, &router, e) {
                        console::log_1(&format!("[Dashboard] Stats fetch failed: {e}").into());
                    }
                }
            }
            set_loading.set(false);
        });
    });

    let visible = move || {
        let want_active = tab.get() == PostsTab::Active;
        offers
            .get()
            .into_iter()
            .filter(|o| o.status.is_active() == want_active)
            .collect::<Vec<_>>()
    };

    let display_name = move || {
        session
            .state
            .get()
            .user()
            .map(|u| u.display_name.clone())
            .unwrap_or_default()
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <div class="flex flex-col sm:flex-row sm:items-center justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-extrabold text-slate-900">"Active Offers"</h1>
                    <p class="mt-1 text-slate-600">{move || format!("Welcome back, {}.", display_name())}</p>
                </div>
                <div class="flex items-center gap-2">
                    <button
                        aria-label="Refresh"
                        on:click=move |_| set_reload.update(|n| *n = n.wrapping_add(1))
                        class="p-2 rounded-lg border border-slate-300 text-slate-600 hover:text-brand-700"
                    >
                        <RefreshCw attr:class="h-4 w-4" />
                    </button>
                    <button
                        on:click=move |_| router.navigate(AppRoute::PostOffer)
                        class="bg-amber-500 hover:bg-amber-600 text-white font-bold px-5 py-2 rounded-xl shadow"
                    >
                        "+ New Offer"
                    </button>
                </div>
            </div>

            <StatsStrip stats=stats />

            <div class="mt-10">
                <TabBar tab=tab set_tab=set_tab />
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! { <p class="mt-12 text-center text-slate-500 font-bold">"Loading your posts..."</p> }
                }
            >
                <Show
                    when=move || !visible().is_empty()
                    fallback=move || {
                        view! {
                            <p class="mt-12 text-center text-slate-500">
                                {move || {
                                    if tab.get() == PostsTab::Active {
                                        "You have no active offers. Post one to start sharing."
                                    } else {
                                        "No past offers yet."
                                    }
                                }}
                            </p>
                        }
                    }
                >
                    <div class="mt-6 space-y-4">
                        <For each=visible key=|o| o.id.clone() let:offer>
                            <div class="bg-white rounded-xl border border-amber-200 p-5 flex flex-col sm:flex-row sm:items-center justify-between gap-3">
                                <div>
                                    <p class="flex items-center gap-2 font-bold text-slate-900">
                                        <Utensils attr:class="h-4 w-4 text-amber-600" />
                                        {offer.description.clone()}
                                    </p>
                                    <p class="mt-1 text-sm text-slate-500">
                                        {format!(
                                            "{}, {} | {} | {}",
                                            offer.city,
                                            offer.state,
                                            offer.frequency.label(),
                                            offer
                                                .logistics
                                                .iter()
                                                .map(|l| l.label())
                                                .collect::<Vec<_>>()
                                                .join(" / "),
                                        )}
                                    </p>
                                </div>
                                {status_badge(offer.status.is_active(), format!("{:?}", offer.status))}
                            </div>
                        </For>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
