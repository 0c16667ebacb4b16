//! Profile overlay: view and edit the signed-in account.
//!
//! Like the auth modal, this is app-shell state rather than a route.
//! A saved edit is pushed back into the session store so the navbar and
//! dashboards pick up the new display name without a reload.

use crate::session::{self, use_session};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mealbridge_shared::UserProfile;
use mealbridge_shared::protocol::UpdateProfileRequest;
use web_sys::console;

/// Comma-separated input to the wire list, dropping blanks.
fn parse_languages(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_languages(languages: &[String]) -> String {
    languages.join(", ")
}

fn validate_profile(display_name: &str) -> Option<&'static str> {
    if display_name.trim().is_empty() {
        Some("Display name is required.")
    } else {
        None
    }
}

#[component]
pub fn ProfileModal(on_close: Callback<()>) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let email = RwSignal::new(String::new());
    let display_name = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());
    let zip = RwSignal::new(String::new());
    let languages = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let processing = RwSignal::new(false);

    let fill = move |profile: &UserProfile| {
        email.set(profile.email.clone());
        display_name.set(profile.display_name.clone());
        city.set(profile.city.clone());
        state.set(profile.state.clone());
        zip.set(profile.zip.clone());
        languages.set(join_languages(&profile.languages));
    };

    // Seed from the session copy, then reconcile with the backend.
    if let Some(user) = session.state.get_untracked().user() {
        fill(user);
    }
    spawn_local(async move {
        let client = session.state.get_untracked().client();
        match client.get_profile().await {
            Ok(profile) => fill(&profile),
            Err(e) => {
                if let Some(e) = session::intercept_unauthorized(&session, &router, e) {
                    console::log_1(&format!("[Profile] Fetch failed: {e}").into());
                } else {
                    on_close.run(());
                }
            }
        }
    });

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = display_name.get_untracked();
        if let Some(msg) = validate_profile(&name) {
            error.set(Some(msg.to_string()));
            return;
        }
        error.set(None);
        processing.set(true);

        let payload = UpdateProfileRequest {
            display_name: name.trim().to_string(),
            city: city.get_untracked().trim().to_string(),
            state: state.get_untracked().trim().to_string(),
            zip: zip.get_untracked().trim().to_string(),
            languages: parse_languages(&languages.get_untracked()),
        };
        spawn_local(async move {
            let client = session.state.get_untracked().client();
            match client.send(&payload).await {
                Ok(profile) => {
                    processing.set(false);
                    session::refresh_user(&session, profile);
                    on_close.run(());
                }
                Err(e) => {
                    processing.set(false);
                    if let Some(e) = session::intercept_unauthorized(&session, &router, e) {
                        console::log_1(&format!("[Profile] Save failed: {e}").into());
                        error.set(Some("Could not save your profile. Please try again.".into()));
                    } else {
                        on_close.run(());
                    }
                }
            }
        });
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm p-4">
            <div class="bg-white rounded-2xl shadow-2xl max-w-lg w-full p-6 md:p-8 max-h-[90vh] overflow-y-auto">
                <h2 class="text-xl font-bold text-slate-900">"Your Profile"</h2>
                <p class="mt-1 text-sm text-slate-500">{move || email.get()}</p>

                <Show when=move || error.get().is_some()>
                    <div role="alert" class="mt-4 px-4 py-2 rounded-lg bg-red-50 text-red-700 text-sm">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_save class="mt-6 space-y-4">
                    <div>
                        <label for="profile-display-name" class="block text-xs font-bold text-slate-700 mb-1 uppercase">
                            "Display Name (Visible Publicly)"
                        </label>
                        <input
                            id="profile-display-name"
                            type="text"
                            prop:value=display_name
                            on:input=move |ev| display_name.set(event_target_value(&ev))
                            class="w-full bg-white px-3 py-2 border border-slate-400 rounded-lg text-sm"
                        />
                    </div>
                    <div class="grid grid-cols-3 gap-3">
                        <div>
                            <label for="profile-city" class="block text-xs font-bold text-slate-700 mb-1">"City"</label>
                            <input
                                id="profile-city"
                                type="text"
                                prop:value=city
                                on:input=move |ev| city.set(event_target_value(&ev))
                                class="w-full bg-white px-3 py-2 border border-slate-400 rounded-lg text-sm"
                            />
                        </div>
                        <div>
                            <label for="profile-state" class="block text-xs font-bold text-slate-700 mb-1">"State/Prov"</label>
                            <input
                                id="profile-state"
                                type="text"
                                prop:value=state
                                on:input=move |ev| state.set(event_target_value(&ev))
                                class="w-full bg-white px-3 py-2 border border-slate-400 rounded-lg text-sm"
                            />
                        </div>
                        <div>
                            <label for="profile-zip" class="block text-xs font-bold text-slate-700 mb-1">"Zip"</label>
                            <input
                                id="profile-zip"
                                type="text"
                                prop:value=zip
                                on:input=move |ev| zip.set(event_target_value(&ev))
                                class="w-full bg-white px-3 py-2 border border-slate-400 rounded-lg text-sm"
                            />
                        </div>
                    </div>
                    <div>
                        <label for="profile-languages" class="block text-xs font-bold text-slate-700 mb-1 uppercase">
                            "Languages (Comma Separated)"
                        </label>
                        <input
                            id="profile-languages"
                            type="text"
                            placeholder="English, Spanish"
                            prop:value=languages
                            on:input=move |ev| languages.set(event_target_value(&ev))
                            class="w-full bg-white px-3 py-2 border border-slate-400 rounded-lg text-sm"
                        />
                    </div>
                    <div class="flex space-x-3 pt-4 border-t border-slate-200">
                        <button
                            type="button"
                            on:click=move |_| on_close.run(())
                            class="flex-1 py-3 text-slate-700 font-medium hover:bg-slate-100 rounded-xl"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=move || processing.get()
                            class="flex-1 bg-brand-600 hover:bg-brand-700 text-white font-bold py-3 rounded-xl shadow-lg"
                        >
                            {move || if processing.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn languages_roundtrip_through_the_comma_form() {
        let parsed = parse_languages(" English,  Spanish ,,Hindi, ");
        assert_eq!(parsed, vec!["English", "Spanish", "Hindi"]);
        assert_eq!(join_languages(&parsed), "English, Spanish, Hindi");
        assert!(parse_languages("   ").is_empty());
    }

    #[test]
    fn display_name_is_required() {
        assert_eq!(validate_profile("  "), Some("Display name is required."));
        assert_eq!(validate_profile("Studious Owl"), None);
    }
}
