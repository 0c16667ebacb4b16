//! Post-a-meal forms for both roles. The two variants share the field
//! state and validation; they differ in copy, payload type, and the
//! dashboard they return to.

use crate::session::{self, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mealbridge_shared::protocol::{CreateMealOffer, CreateMealRequest};
use mealbridge_shared::{DietaryPreference, Frequency, FulfillmentOption};
use web_sys::SubmitEvent;
use web_sys::console;

const FREQUENCIES: [Frequency; 3] = [Frequency::Once, Frequency::Weekly, Frequency::Daily];

/// Field signals for a meal post. `Copy` so event handlers can capture
/// it freely.
#[derive(Clone, Copy)]
struct MealFormState {
    description: RwSignal<String>,
    city: RwSignal<String>,
    state: RwSignal<String>,
    zip: RwSignal<String>,
    availability: RwSignal<String>,
    frequency: RwSignal<Frequency>,
    diets: RwSignal<Vec<DietaryPreference>>,
    logistics: RwSignal<Vec<FulfillmentOption>>,
}

impl MealFormState {
    fn new(city: String, state: String, zip: String) -> Self {
        Self {
            description: RwSignal::new(String::new()),
            city: RwSignal::new(city),
            state: RwSignal::new(state),
            zip: RwSignal::new(zip),
            availability: RwSignal::new(String::new()),
            frequency: RwSignal::new(Frequency::Once),
            diets: RwSignal::new(Vec::new()),
            logistics: RwSignal::new(Vec::new()),
        }
    }

    fn toggle_diet(&self, diet: DietaryPreference) {
        self.diets.update(|list| match list.iter().position(|d| *d == diet) {
            Some(i) => {
                list.remove(i);
            }
            None => list.push(diet),
        });
    }

    fn toggle_logistics(&self, option: FulfillmentOption) {
        self.logistics
            .update(|list| match list.iter().position(|l| *l == option) {
                Some(i) => {
                    list.remove(i);
                }
                None => list.push(option),
            });
    }
}

fn validate_post(
    description: &str,
    city: &str,
    logistics: &[FulfillmentOption],
) -> Option<&'static str> {
    if description.trim().is_empty() {
        return Some("Please describe the meal.");
    }
    if city.trim().is_empty() {
        return Some("City is required.");
    }
    if logistics.is_empty() {
        return Some("Select at least one of pickup or delivery.");
    }
    None
}

#[component]
fn MealForm(
    heading: &'static str,
    description_label: &'static str,
    submit_label: &'static str,
    form: MealFormState,
    error: ReadSignal<Option<String>>,
    processing: ReadSignal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let router = use_router();

    view! {
        <div class="max-w-2xl mx-auto px-4 sm:px-6 py-12">
            <h1 class="text-3xl font-extrabold text-slate-900">{heading}</h1>

            <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.run(ev)>
                <Show when=move || error.get().is_some()>
                    <div class="bg-red-50 border border-red-200 text-red-700 rounded-xl p-4 text-sm font-bold">
                        {move || error.get()}
                    </div>
                </Show>

                <div>
                    <label class="block text-sm font-bold text-slate-700" for="post-description">
                        {description_label}
                    </label>
                    <textarea
                        id="post-description"
                        rows="3"
                        class="mt-1 w-full border border-slate-300 rounded-lg px-3 py-2 text-sm"
                        prop:value=form.description
                        on:input=move |ev| form.description.set(event_target_value(&ev))
                    />
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                    <div>
                        <label class="block text-sm font-bold text-slate-700" for="post-city">"City"</label>
                        <input
                            id="post-city"
                            type="text"
                            class="mt-1 w-full border border-slate-300 rounded-lg px-3 py-2 text-sm"
                            prop:value=form.city
                            on:input=move |ev| form.city.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-bold text-slate-700" for="post-state">"State/Prov"</label>
                        <input
                            id="post-state"
                            type="text"
                            class="mt-1 w-full border border-slate-300 rounded-lg px-3 py-2 text-sm"
                            prop:value=form.state
                            on:input=move |ev| form.state.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-bold text-slate-700" for="post-zip">"Zip"</label>
                        <input
                            id="post-zip"
                            type="text"
                            class="mt-1 w-full border border-slate-300 rounded-lg px-3 py-2 text-sm"
                            prop:value=form.zip
                            on:input=move |ev| form.zip.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div>
                    <p class="text-sm font-bold text-slate-700">"Dietary Preferences"</p>
                    <div class="mt-2 flex flex-wrap gap-3">
                        {DietaryPreference::ALL
                            .into_iter()
                            .map(|diet| {
                                view! {
                                    <label class="flex items-center gap-2 text-sm text-slate-600">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || form.diets.get().contains(&diet)
                                            on:change=move |_| form.toggle_diet(diet)
                                        />
                                        {diet.label()}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div>
                    <p class="text-sm font-bold text-slate-700">"Logistics"</p>
                    <div class="mt-2 flex gap-6">
                        {[FulfillmentOption::Pickup, FulfillmentOption::Delivery]
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <label class="flex items-center gap-2 text-sm text-slate-600">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || form.logistics.get().contains(&option)
                                            on:change=move |_| form.toggle_logistics(option)
                                        />
                                        {option.label()}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm font-bold text-slate-700" for="post-frequency">
                            "Frequency"
                        </label>
                        <select
                            id="post-frequency"
                            class="mt-1 w-full border border-slate-300 rounded-lg px-3 py-2 text-sm bg-white"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                if let Some(f) = FREQUENCIES.into_iter().find(|f| f.label() == value) {
                                    form.frequency.set(f);
                                }
                            }
                        >
                            {FREQUENCIES
                                .into_iter()
                                .map(|f| {
                                    view! {
                                        <option value=f.label() selected=move || form.frequency.get() == f>
                                            {f.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm font-bold text-slate-700" for="post-availability">
                            "Availability"
                        </label>
                        <input
                            id="post-availability"
                            type="text"
                            placeholder="e.g. Weekday evenings"
                            class="mt-1 w-full border border-slate-300 rounded-lg px-3 py-2 text-sm"
                            prop:value=form.availability
                            on:input=move |ev| form.availability.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="flex justify-end gap-3">
                    <button
                        type="button"
                        on:click=move |_| router.navigate(AppRoute::Home)
                        class="text-sm font-bold text-slate-600 px-5 py-2 rounded-xl hover:bg-slate-100"
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        disabled=move || processing.get()
                        class="bg-brand-600 hover:bg-brand-700 disabled:opacity-50 text-white font-bold px-6 py-2 rounded-xl shadow"
                    >
                        {submit_label}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
pub fn PostRequest() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let profile = session.state.get_untracked();
    let form = MealFormState::new(
        profile.user().map(|u| u.city.clone()).unwrap_or_default(),
        profile.user().map(|u| u.state.clone()).unwrap_or_default(),
        profile.user().map(|u| u.zip.clone()).unwrap_or_default(),
    );

    let (error, set_error) = signal(Option::<String>::None);
    let (processing, set_processing) = signal(false);

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        let description = form.description.get_untracked();
        let city = form.city.get_untracked();
        let logistics = form.logistics.get_untracked();
        if let Some(msg) = validate_post(&description, &city, &logistics) {
            set_error.set(Some(msg.to_string()));
            return;
        }
        set_error.set(None);
        set_processing.set(true);

        let payload = CreateMealRequest {
            city: city.trim().to_string(),
            state: form.state.get_untracked().trim().to_string(),
            zip: form.zip.get_untracked().trim().to_string(),
            dietary_needs: form.diets.get_untracked(),
            logistics,
            description: description.trim().to_string(),
            availability: form.availability.get_untracked().trim().to_string(),
            frequency: form.frequency.get_untracked(),
        };
        let client = session.state.get_untracked().client();
        spawn_local(async move {
            let result = client.send(&payload).await;
            if router.is_stale(AppRoute::PostRequest) {
                console::log_1(&"[PostForm] Discarding stale request submit".into());
                return;
            }
            match result {
                Ok(_) => {
                    set_processing.set(false);
                    router.navigate(AppRoute::DashboardSeeker);
                }
                Err(e) => {
                    set_processing.set(false);
                    if let Some(e) = session::intercept_unauthorized(&session, &router, e) {
                        console::log_1(&format!("[PostForm] Request submit failed: {e}").into());
                        set_error.set(Some("Could not post your request. Please try again.".into()));
                    }
                }
            }
        });
    });

    view! {
        <MealForm
            heading="Post a Meal Request"
            description_label="What do you need?"
            submit_label="Post Request"
            form=form
            error=error
            processing=processing
            on_submit=on_submit
        />
    }
}

#[component]
pub fn PostOffer() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let profile = session.state.get_untracked();
    let form = MealFormState::new(
        profile.user().map(|u| u.city.clone()).unwrap_or_default(),
        profile.user().map(|u| u.state.clone()).unwrap_or_default(),
        profile.user().map(|u| u.zip.clone()).unwrap_or_default(),
    );

    let (error, set_error) = signal(Option::<String>::None);
    let (processing, set_processing) = signal(false);

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        let description = form.description.get_untracked();
        let city = form.city.get_untracked();
        let logistics = form.logistics.get_untracked();
        if let Some(msg) = validate_post(&description, &city, &logistics) {
            set_error.set(Some(msg.to_string()));
            return;
        }
        set_error.set(None);
        set_processing.set(true);

        let payload = CreateMealOffer {
            city: city.trim().to_string(),
            state: form.state.get_untracked().trim().to_string(),
            zip: form.zip.get_untracked().trim().to_string(),
            dietary_tags: form.diets.get_untracked(),
            logistics,
            description: description.trim().to_string(),
            availability: form.availability.get_untracked().trim().to_string(),
            frequency: form.frequency.get_untracked(),
        };
        let client = session.state.get_untracked().client();
        spawn_local(async move {
            let result = client.send(&payload).await;
            if router.is_stale(AppRoute::PostOffer) {
                console::log_1(&"[PostForm] Discarding stale offer submit".into());
                return;
            }
            match result {
                Ok(_) => {
                    set_processing.set(false);
                    router.navigate(AppRoute::DashboardDonor);
                }
                Err(e) => {
                    set_processing.set(false);
                    if let Some(e) = session::intercept_unauthorized(&session, &router, e) {
                        console::log_1(&format!("[PostForm] Offer submit failed: {e}").into());
                        set_error.set(Some("Could not post your offer. Please try again.".into()));
                    }
                }
            }
        });
    });

    view! {
        <MealForm
            heading="Share a Meal Offer"
            description_label="What can you share?"
            submit_label="Post Offer"
            form=form
            error=error
            processing=processing
            on_submit=on_submit
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_description() {
        assert_eq!(
            validate_post("  ", "San Jose", &[FulfillmentOption::Pickup]),
            Some("Please describe the meal."),
        );
    }

    #[test]
    fn rejects_missing_city_and_logistics() {
        assert_eq!(
            validate_post("Warm dinner", "", &[FulfillmentOption::Pickup]),
            Some("City is required."),
        );
        assert_eq!(
            validate_post("Warm dinner", "San Jose", &[]),
            Some("Select at least one of pickup or delivery."),
        );
    }

    #[test]
    fn accepts_complete_post() {
        assert_eq!(
            validate_post("Warm dinner", "San Jose", &[FulfillmentOption::Delivery]),
            None,
        );
    }
}
