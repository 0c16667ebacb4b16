//! Donor wall: public list of contributors, filterable by category.

use crate::session::{self, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mealbridge_shared::{Donor, DonorCategory, DonorTier};
use web_sys::console;

fn tier_badge(tier: DonorTier) -> (&'static str, &'static str) {
    match tier {
        DonorTier::Platinum => ("Platinum", "bg-slate-200 text-slate-800"),
        DonorTier::Gold => ("Gold", "bg-amber-100 text-amber-800"),
        DonorTier::Silver => ("Silver", "bg-slate-100 text-slate-600"),
        DonorTier::Bronze => ("Bronze", "bg-orange-100 text-orange-800"),
    }
}

#[component]
pub fn Donors() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (category, set_category) = signal(Option::<DonorCategory>::None);
    let (donors, set_donors) = signal(Vec::<Donor>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let selected = category.get();
        let client = session.state.get_untracked().client();
        set_loading.set(true);
        spawn_local(async move {
            let fetched = client.get_donors(selected).await;
            if router.is_stale(AppRoute::Donors) {
                console::log_1(&"[Donors] Discarding stale donor response".into());
                return;
            }
            match fetched {
                Ok(list) => set_donors.set(list),
                Err(e) => {
                    let Some(e) = session::intercept_unauthorized(&session, &router, e) else {
                        return;
                    };
                    console::log_1(&format!("[Donors] Fetch failed: {e}").into());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <h1 class="text-3xl font-extrabold text-slate-900">"Our Donors"</h1>
            <p class="mt-2 text-slate-600">
                "The individuals, restaurants, and organizations keeping students fed."
            </p>

            <select
                class="mt-8 border border-slate-300 rounded-lg px-3 py-2 text-sm bg-white"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_category.set(
                        DonorCategory::ALL
                            .into_iter()
                            .find(|c| c.as_query() == value),
                    );
                }
            >
                <option value="">"All Categories"</option>
                {DonorCategory::ALL
                    .into_iter()
                    .map(|c| view! { <option value=c.as_query()>{c.label()}</option> })
                    .collect_view()}
            </select>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! { <p class="mt-12 text-center text-slate-500 font-bold">"Loading donors..."</p> }
                }
            >
                <Show
                    when=move || !donors.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="mt-12 text-center text-slate-500">"No donors in this category yet."</p>
                        }
                    }
                >
                    <div class="mt-8 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For each=move || donors.get() key=|d| d.id.clone() let:donor>
                            {
                                let (tier_label, tier_class) = tier_badge(donor.tier);
                                view! {
                                    <div class="bg-white rounded-2xl border border-slate-200 p-6 shadow-sm">
                                        <div class="flex items-center justify-between">
                                            <span class="font-bold text-slate-900">
                                                {donor.public_name().to_string()}
                                            </span>
                                            <span class=format!(
                                                "text-xs font-bold uppercase rounded-full px-2 py-1 {tier_class}",
                                            )>{tier_label}</span>
                                        </div>
                                        <p class="mt-1 text-sm text-slate-500">
                                            {format!("{} | {}", donor.category.label(), donor.location)}
                                        </p>
                                        <p class="mt-3 text-sm font-bold text-brand-700">
                                            {donor.total_contribution_display.clone()}
                                        </p>
                                        {donor
                                            .quote
                                            .clone()
                                            .map(|q| {
                                                view! {
                                                    <p class="mt-3 text-sm italic text-slate-600">
                                                        {format!("\u{201c}{q}\u{201d}")}
                                                    </p>
                                                }
                                            })}
                                        <p class="mt-3 text-xs text-slate-400">
                                            {format!("Supporting since {}", donor.since)}
                                        </p>
                                    </div>
                                }
                            }
                        </For>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
