//! Static "How It Works" explainer.

use crate::components::icons::{GraduationCap, ShieldCheck, Utensils};
use leptos::prelude::*;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <h1 class="text-3xl font-extrabold text-slate-900 text-center">"How It Works"</h1>
            <p class="mt-4 text-center text-slate-600 max-w-2xl mx-auto">
                "Three steps connect a hungry student with a neighbor who wants to help. \
                 No fees, no public identities, no strings attached."
            </p>

            <div class="mt-12 grid grid-cols-1 md:grid-cols-3 gap-8">
                <div class="bg-white rounded-2xl border border-slate-200 p-8 text-center shadow-sm">
                    <div class="mx-auto bg-brand-100 text-brand-700 w-14 h-14 rounded-full flex items-center justify-center">
                        <GraduationCap attr:class="h-7 w-7" />
                    </div>
                    <h3 class="mt-4 text-lg font-bold text-slate-900">"1. Verify"</h3>
                    <p class="mt-2 text-sm text-slate-600">
                        "Students sign up with a university (.edu) email and confirm it with a \
                         one-time code. Donors verify their email the same way."
                    </p>
                </div>
                <div class="bg-white rounded-2xl border border-slate-200 p-8 text-center shadow-sm">
                    <div class="mx-auto bg-amber-100 text-amber-700 w-14 h-14 rounded-full flex items-center justify-center">
                        <Utensils attr:class="h-7 w-7" />
                    </div>
                    <h3 class="mt-4 text-lg font-bold text-slate-900">"2. Post or Browse"</h3>
                    <p class="mt-2 text-sm text-slate-600">
                        "Students post what they need; donors post what they can share. Both sides \
                         browse by city and dietary preference."
                    </p>
                </div>
                <div class="bg-white rounded-2xl border border-slate-200 p-8 text-center shadow-sm">
                    <div class="mx-auto bg-slate-100 text-slate-700 w-14 h-14 rounded-full flex items-center justify-center">
                        <ShieldCheck attr:class="h-7 w-7" />
                    </div>
                    <h3 class="mt-4 text-lg font-bold text-slate-900">"3. Connect Safely"</h3>
                    <p class="mt-2 text-sm text-slate-600">
                        "Pickup, delivery, or a restaurant voucher. Students stay anonymous behind \
                         their public display name the whole time."
                    </p>
                </div>
            </div>
        </div>
    }
}
