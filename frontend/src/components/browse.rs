//! Public browse page: open meal requests and offers, filterable by
//! dietary preference and city.

use crate::api::ListingFilter;
use crate::components::icons::{MapPin, Utensils};
use crate::session::{self, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mealbridge_shared::{DietaryPreference, MealOffer, MealRequest};
use web_sys::console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrowseTab {
    Requests,
    Offers,
}

#[component]
pub fn Browse() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (tab, set_tab) = signal(BrowseTab::Requests);
    let (diet, set_diet) = signal(Option::<DietaryPreference>::None);
    let (city, set_city) = signal(String::new());
    let (requests, set_requests) = signal(Vec::<MealRequest>::new());
    let (offers, set_offers) = signal(Vec::<MealOffer>::new());
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal(Option::<String>::None);

    // Reload whenever a filter changes. Results are dropped if the user has
    // already navigated away by the time the response lands.
    Effect::new(move |_| {
        let filter = ListingFilter {
            diet: diet.get(),
            city: Some(city.get()),
        };
        let client = session.state.get_untracked().client();
        set_loading.set(true);
        set_load_error.set(None);
        spawn_local(async move {
            let fetched_requests = client.get_requests(&filter).await;
            let fetched_offers = client.get_offers(&filter).await;
            if router.is_stale(AppRoute::Browse) {
                console::log_1(&"[Browse] Discarding stale listing response".into());
                return;
            }
            match (fetched_requests, fetched_offers) {
                (Ok(reqs), Ok(offs)) => {
                    set_requests.set(reqs);
                    set_offers.set(offs);
                }
                (Err(e), _) | (_, Err(e)) => {
                    // An expired token ends the session even on the
                    // public listing view; the funnel navigates away.
                    let Some(e) = session::intercept_unauthorized(&session, &router, e) else {
                        return;
                    };
                    console::log_1(&format!("[Browse] Listing fetch failed: {e}").into());
                    set_load_error.set(Some(
                        "Could not load listings. Please try again in a moment.".to_string(),
                    ));
                }
            }
            set_loading.set(false);
        });
    });

    let tab_class = move |t: BrowseTab| {
        if tab.get() == t {
            "px-4 py-2 text-sm font-bold rounded-lg bg-brand-600 text-white"
        } else {
            "px-4 py-2 text-sm font-bold rounded-lg text-slate-600 hover:bg-slate-100"
        }
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <h1 class="text-3xl font-extrabold text-slate-900">"Browse Meals"</h1>
            <p class="mt-2 text-slate-600">
                "Open requests from verified students and active offers from donors near you."
            </p>

            <div class="mt-8 flex flex-col sm:flex-row gap-4 items-stretch sm:items-center">
                <div class="flex gap-2">
                    <button class=move || tab_class(BrowseTab::Requests) on:click=move |_| set_tab.set(BrowseTab::Requests)>
                        "Meal Requests"
                    </button>
                    <button class=move || tab_class(BrowseTab::Offers) on:click=move |_| set_tab.set(BrowseTab::Offers)>
                        "Meal Offers"
                    </button>
                </div>
                <select
                    class="border border-slate-300 rounded-lg px-3 py-2 text-sm bg-white"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_diet.set(
                            DietaryPreference::ALL
                                .into_iter()
                                .find(|d| d.as_query() == value),
                        );
                    }
                >
                    <option value="">"All Diets"</option>
                    {DietaryPreference::ALL
                        .into_iter()
                        .map(|d| view! { <option value=d.as_query()>{d.label()}</option> })
                        .collect_view()}
                </select>
                <input
                    type="text"
                    placeholder="Enter City or Zip..."
                    class="border border-slate-300 rounded-lg px-3 py-2 text-sm flex-1"
                    prop:value=city
                    on:input=move |ev| set_city.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || load_error.get().is_some()>
                <div class="mt-8 bg-red-50 border border-red-200 text-red-700 rounded-xl p-4 text-sm font-bold">
                    {move || load_error.get()}
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <p class="mt-12 text-center text-slate-500 font-bold">"Loading listings..."</p>
                    }
                }
            >
                <Show
                    when=move || tab.get() == BrowseTab::Requests
                    fallback=move || view! { <OfferGrid offers=offers /> }
                >
                    <RequestGrid requests=requests />
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn RequestGrid(requests: ReadSignal<Vec<MealRequest>>) -> impl IntoView {
    view! {
        <Show
            when=move || !requests.get().is_empty()
            fallback=|| {
                view! {
                    <p class="mt-12 text-center text-slate-500">"No open requests match your filters."</p>
                }
            }
        >
            <div class="mt-8 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <For each=move || requests.get() key=|r| r.id.clone() let:request>
                    <div class="bg-white rounded-2xl border border-slate-200 p-6 shadow-sm">
                        <div class="flex items-center justify-between">
                            <span class="font-bold text-slate-900">{request.seeker_name.clone()}</span>
                            <span class="text-xs font-bold uppercase text-brand-700 bg-brand-50 rounded px-2 py-1">
                                {request.frequency.label()}
                            </span>
                        </div>
                        <p class="mt-1 flex items-center gap-1 text-sm text-slate-500">
                            <MapPin attr:class="h-4 w-4" />
                            {format!("{}, {}", request.city, request.state)}
                        </p>
                        <p class="mt-3 text-sm text-slate-600">{request.description.clone()}</p>
                        <div class="mt-4 flex flex-wrap gap-2">
                            {request
                                .dietary_needs
                                .iter()
                                .map(|d| {
                                    view! {
                                        <span class="text-xs font-bold bg-slate-100 text-slate-600 rounded-full px-2 py-1">
                                            {d.label()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </For>
            </div>
        </Show>
    }
}

#[component]
fn OfferGrid(offers: ReadSignal<Vec<MealOffer>>) -> impl IntoView {
    view! {
        <Show
            when=move || !offers.get().is_empty()
            fallback=|| {
                view! {
                    <p class="mt-12 text-center text-slate-500">"No active offers match your filters."</p>
                }
            }
        >
            <div class="mt-8 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <For each=move || offers.get() key=|o| o.id.clone() let:offer>
                    <div class="bg-white rounded-2xl border border-amber-200 p-6 shadow-sm">
                        <div class="flex items-center justify-between">
                            <span class="flex items-center gap-2 font-bold text-slate-900">
                                <Utensils attr:class="h-4 w-4 text-amber-600" />
                                {offer.donor_name.clone()}
                            </span>
                            <span class="text-xs font-bold uppercase text-amber-700 bg-amber-50 rounded px-2 py-1">
                                {offer.frequency.label()}
                            </span>
                        </div>
                        <p class="mt-1 flex items-center gap-1 text-sm text-slate-500">
                            <MapPin attr:class="h-4 w-4" />
                            {format!("{}, {}", offer.city, offer.state)}
                        </p>
                        <p class="mt-3 text-sm text-slate-600">{offer.description.clone()}</p>
                        <div class="mt-4 flex flex-wrap gap-2">
                            {offer
                                .dietary_tags
                                .iter()
                                .map(|d| {
                                    view! {
                                        <span class="text-xs font-bold bg-slate-100 text-slate-600 rounded-full px-2 py-1">
                                            {d.label()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </For>
            </div>
        </Show>
    }
}
