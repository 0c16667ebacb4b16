//! Landing page with hero, stats strip, and the FAQ anchor section.

use crate::components::auth_modal::use_auth_prompt;
use crate::components::icons::{GraduationCap, ShieldCheck, Utensils};
use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use mealbridge_shared::UserRole;

const FAQ_ENTRIES: [(&str, &str); 4] = [
    (
        "Is my identity kept private?",
        "Yes. Donors only ever see your public display name, never your legal name, address, or contact details.",
    ),
    (
        "Who can request a meal?",
        "Any student with a verified university (.edu) email address can post a meal request.",
    ),
    (
        "How are donors verified?",
        "Every donor account goes through email verification before a meal offer becomes visible to students.",
    ),
    (
        "Does MealBridge charge any fees?",
        "No. MealBridge is a 100% non-profit platform and never takes a cut of any donation.",
    ),
];

#[component]
pub fn Home() -> impl IntoView {
    let router = use_router();
    let prompt = use_auth_prompt();
    let session = use_session();

    // Entry buttons open the login tab; a signed-in user goes straight
    // to the dashboard for the role their account actually has.
    let enter = move |role: UserRole| {
        let state = session.state.get_untracked();
        match state.user() {
            Some(user) => router.navigate(AppRoute::dashboard_for(user.role)),
            None => prompt.open_entry(role),
        }
    };
    let on_student = move |_| enter(UserRole::Student);
    let on_donor = move |_| enter(UserRole::Donor);

    view! {
        <div>
            <section class="bg-gradient-to-b from-brand-50 to-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 text-center">
                    <h1 class="text-4xl md:text-6xl font-extrabold text-slate-900 tracking-tight">
                        "Share a Meal, Fuel a Future."
                    </h1>
                    <p class="mt-6 max-w-2xl mx-auto text-lg text-slate-600">
                        "MealBridge connects students in need with neighbors who want to help, \
                         anonymously and with zero fees."
                    </p>
                    <div class="mt-10 flex flex-col sm:flex-row items-center justify-center gap-4">
                        <button
                            on:click=on_student
                            class="w-full sm:w-auto bg-brand-600 hover:bg-brand-700 text-white font-bold px-8 py-4 rounded-xl shadow-lg"
                        >
                            "I'm a Student"
                        </button>
                        <button
                            on:click=on_donor
                            class="w-full sm:w-auto bg-amber-500 hover:bg-amber-600 text-white font-bold px-8 py-4 rounded-xl shadow-lg"
                        >
                            "I Want to Donate"
                        </button>
                        <button
                            on:click=move |_| router.navigate(AppRoute::Browse)
                            class="w-full sm:w-auto bg-white border border-slate-300 hover:border-brand-600 text-slate-700 font-bold px-8 py-4 rounded-xl"
                        >
                            "Browse Requests"
                        </button>
                    </div>
                </div>
            </section>

            <section class="border-y border-slate-200 bg-white">
                <div class="max-w-7xl mx-auto px-4 py-10 grid grid-cols-1 sm:grid-cols-3 gap-8 text-center">
                    <div>
                        <p class="text-3xl font-extrabold text-brand-700">"10k+"</p>
                        <p class="text-sm font-bold text-slate-500 uppercase tracking-wide">"Meals Shared"</p>
                    </div>
                    <div>
                        <p class="text-3xl font-extrabold text-brand-700">"50+"</p>
                        <p class="text-sm font-bold text-slate-500 uppercase tracking-wide">"Universities"</p>
                    </div>
                    <div>
                        <p class="text-3xl font-extrabold text-brand-700">"100%"</p>
                        <p class="text-sm font-bold text-slate-500 uppercase tracking-wide">"Non-Profit"</p>
                    </div>
                </div>
            </section>

            <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 grid grid-cols-1 md:grid-cols-3 gap-8">
                <div class="bg-white rounded-2xl border border-slate-200 p-8 shadow-sm">
                    <div class="bg-brand-100 text-brand-700 w-12 h-12 rounded-xl flex items-center justify-center mb-4">
                        <GraduationCap attr:class="h-6 w-6" />
                    </div>
                    <h3 class="text-lg font-bold text-slate-900">"Request a Meal"</h3>
                    <p class="mt-2 text-sm text-slate-600">
                        "Verify your .edu email, post what you need, and stay completely anonymous to donors."
                    </p>
                </div>
                <div class="bg-white rounded-2xl border border-slate-200 p-8 shadow-sm">
                    <div class="bg-amber-100 text-amber-700 w-12 h-12 rounded-xl flex items-center justify-center mb-4">
                        <Utensils attr:class="h-6 w-6" />
                    </div>
                    <h3 class="text-lg font-bold text-slate-900">"Share a Meal"</h3>
                    <p class="mt-2 text-sm text-slate-600">
                        "Offer a home-cooked dish, groceries, or a restaurant voucher to students nearby."
                    </p>
                </div>
                <div class="bg-white rounded-2xl border border-slate-200 p-8 shadow-sm">
                    <div class="bg-slate-100 text-slate-700 w-12 h-12 rounded-xl flex items-center justify-center mb-4">
                        <ShieldCheck attr:class="h-6 w-6" />
                    </div>
                    <h3 class="text-lg font-bold text-slate-900">"Verified and Safe"</h3>
                    <p class="mt-2 text-sm text-slate-600">
                        "Every account is email-verified and students' personal details are never shown publicly."
                    </p>
                </div>
            </section>

            <section id="faq" class="bg-slate-50 border-t border-slate-200">
                <div class="max-w-3xl mx-auto px-4 sm:px-6 py-16">
                    <h2 class="text-3xl font-extrabold text-slate-900 text-center">
                        "Frequently Asked Questions"
                    </h2>
                    <div class="mt-10 space-y-4">
                        {FAQ_ENTRIES
                            .into_iter()
                            .map(|(question, answer)| {
                                view! {
                                    <details class="bg-white rounded-xl border border-slate-200 p-5">
                                        <summary class="font-bold text-slate-900 cursor-pointer">
                                            {question}
                                        </summary>
                                        <p class="mt-3 text-sm text-slate-600">{answer}</p>
                                    </details>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
        </div>
    }
}
