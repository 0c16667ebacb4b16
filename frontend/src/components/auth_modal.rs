//! Login / registration overlay.
//!
//! Opening and closing the modal never touches the route: the overlay is
//! app-shell state, not a view. Dismissal from any sub-state unmounts
//! the component, which discards every in-progress field with no session
//! side effects. Only a successful login or a confirmed verification
//! code mints a session, and both immediately route to the dashboard
//! matching the authenticated account's actual role.

mod form_state;
mod stage;

pub use stage::AuthMode;

use crate::components::icons::ShieldCheck;
use crate::session::{self, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use form_state::{
    FieldErrors, LoginFormState, RegisterFormState, validate_login, validate_register,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use mealbridge_shared::UserRole;
use mealbridge_shared::protocol::{AuthResponse, ResendOtpRequest, VerifyEmailRequest};
use stage::AuthStage;
use wasm_bindgen::prelude::*;

/// Code submitted by the "(Simulate) Click Link from Email" shortcut.
/// Non-production backends accept it for any pending verification.
const SIMULATED_OTP: &str = "000000";

/// A pending request to show the modal: which entry button opened it and
/// on which tab. The role only pre-selects copy; it does not restrict
/// which account may log in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthPrompt {
    pub role: UserRole,
    pub mode: AuthMode,
}

impl AuthPrompt {
    /// Role-entry buttons always open on the login tab; registration is
    /// only reached through the "Join (Verification)" tab inside.
    pub fn entry(role: UserRole) -> Self {
        Self {
            role,
            mode: AuthMode::Login,
        }
    }
}

/// App-shell signal controlling modal visibility, shared via Context.
#[derive(Clone, Copy)]
pub struct AuthPromptContext(pub RwSignal<Option<AuthPrompt>>);

impl AuthPromptContext {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    pub fn open_entry(&self, role: UserRole) {
        self.0.set(Some(AuthPrompt::entry(role)));
    }

    pub fn close(&self) {
        self.0.set(None);
    }
}

impl Default for AuthPromptContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth_prompt() -> AuthPromptContext {
    use_context::<AuthPromptContext>().expect("AuthPromptContext should be provided")
}

/// Escape closes the modal from any sub-state. Registered once for the
/// app's lifetime, so the closure is deliberately leaked.
pub fn init_escape_listener(prompt: AuthPromptContext) {
    let closure = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && prompt.0.get_untracked().is_some() {
            prompt.close();
        }
    });

    if let Some(window) = web_sys::window() {
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[component]
pub fn AuthModal(prompt: AuthPrompt) -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let prompt_ctx = use_auth_prompt();

    let role = prompt.role;
    let stage = RwSignal::new(AuthStage::from_mode(prompt.mode));
    let processing = RwSignal::new(false);
    let form_error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);
    let errors = RwSignal::new(FieldErrors::default());
    let code = RwSignal::new(String::new());
    let registered_email = RwSignal::new(String::new());

    let register_form = RegisterFormState::new(role);
    let login_form = LoginFormState::new();

    let complete = move |resp: AuthResponse| {
        let dashboard = AppRoute::dashboard_for(resp.user.role);
        session::establish(&session, resp.access_token, resp.user);
        prompt_ctx.close();
        router.navigate(dashboard);
    };

    let switch_tab = move |mode: AuthMode| {
        let (next, switched) = stage.get_untracked().switch_to(mode);
        if switched {
            // Leaving a tab discards its field values.
            match next {
                AuthStage::LoginForm => register_form.reset(role),
                AuthStage::RegisterForm => login_form.reset(),
                AuthStage::AwaitingVerification => {}
            }
            errors.set(FieldErrors::default());
            form_error.set(None);
            stage.set(next);
        }
    };

    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let validation = validate_login(&login_form.email.get(), &login_form.password.get());
        if !validation.is_empty() {
            errors.set(validation);
            return;
        }
        errors.set(FieldErrors::default());
        form_error.set(None);
        processing.set(true);

        let payload = login_form.to_payload();
        spawn_local(async move {
            let client = session.state.get_untracked().client();
            match client.send(&payload).await {
                Ok(resp) => {
                    processing.set(false);
                    complete(resp);
                }
                Err(err) => {
                    let message = if err.is_retryable() {
                        err.to_string()
                    } else {
                        "Invalid email or password.".to_string()
                    };
                    form_error.set(Some(message));
                    // Email stays for the retry; the password never does.
                    login_form.password.set(String::new());
                    processing.set(false);
                }
            }
        });
    };

    let on_register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let validation = validate_register(&register_form.data(), role);
        if !validation.is_empty() {
            errors.set(validation);
            return;
        }
        errors.set(FieldErrors::default());
        form_error.set(None);
        processing.set(true);

        let payload = register_form.to_payload(role);
        spawn_local(async move {
            let client = session.state.get_untracked().client();
            match client.send(&payload).await {
                Ok(ack) => {
                    registered_email.set(ack.email.clone());
                    // Kick off the emailed code; failures are recoverable
                    // from the holding screen via "Resend Code".
                    if let Err(err) = client.send(&ResendOtpRequest::email_code(ack.email)).await {
                        notice.set(Some(err.to_string()));
                    }
                    processing.set(false);
                    stage.set(stage.get_untracked().registration_accepted());
                }
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    processing.set(false);
                }
            }
        });
    };

    let submit_code = move |code_value: String| {
        processing.set(true);
        form_error.set(None);
        spawn_local(async move {
            let client = session.state.get_untracked().client();
            let payload = VerifyEmailRequest {
                email: registered_email.get_untracked(),
                code: code_value,
            };
            match client.send(&payload).await {
                Ok(resp) => {
                    processing.set(false);
                    complete(resp);
                }
                Err(err) => {
                    let message = if err.is_retryable() {
                        err.to_string()
                    } else {
                        "Invalid or expired verification code.".to_string()
                    };
                    form_error.set(Some(message));
                    processing.set(false);
                }
            }
        });
    };

    let on_resend = move |_| {
        notice.set(None);
        let email = registered_email.get_untracked();
        spawn_local(async move {
            let client = session.state.get_untracked().client();
            match client.send(&ResendOtpRequest::email_code(email)).await {
                Ok(_) => notice.set(Some("Verification code re-sent.".to_string())),
                Err(err) => notice.set(Some(err.to_string())),
            }
        });
    };

    let field_error = move |field: &'static str| {
        errors
            .get()
            .get(field)
            .map(|msg| view! { <p class="text-xs text-red-600 mt-1">{msg}</p> })
    };

    let email_label = if role == UserRole::Student {
        "University Email"
    } else {
        "Email Address"
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm p-4">
            <div class="bg-white rounded-2xl shadow-2xl max-w-lg w-full p-6 md:p-8 relative flex flex-col max-h-[90vh]">
                <div class="mb-6">
                    <div class="flex items-center justify-center mb-4">
                        <div class="bg-brand-100 p-2 rounded-full">
                            <ShieldCheck attr:class="h-6 w-6 text-brand-700" />
                        </div>
                    </div>

                    <Show when=move || stage.get().tabs_enabled()>
                        <div class="flex border-b border-slate-200 mb-4">
                            <button
                                on:click=move |_| switch_tab(AuthMode::Login)
                                class=move || {
                                    if stage.get() == AuthStage::LoginForm {
                                        "flex-1 pb-2 text-sm font-bold text-brand-600 border-b-2 border-brand-600"
                                    } else {
                                        "flex-1 pb-2 text-sm font-bold text-slate-500 hover:text-slate-700"
                                    }
                                }
                            >
                                "Log In"
                            </button>
                            <button
                                on:click=move |_| switch_tab(AuthMode::Register)
                                class=move || {
                                    if stage.get() == AuthStage::RegisterForm {
                                        "flex-1 pb-2 text-sm font-bold text-brand-600 border-b-2 border-brand-600"
                                    } else {
                                        "flex-1 pb-2 text-sm font-bold text-slate-500 hover:text-slate-700"
                                    }
                                }
                            >
                                "Join (Verification)"
                            </button>
                        </div>
                    </Show>

                    <h2 class="text-xl font-bold text-center text-slate-900">
                        {move || stage.get().title()}
                    </h2>
                </div>

                <Show when=move || form_error.get().is_some()>
                    <div role="alert" class="mb-4 px-4 py-2 rounded-lg bg-red-50 text-red-700 text-sm">
                        {move || form_error.get().unwrap_or_default()}
                    </div>
                </Show>

                <div class="flex-grow overflow-y-auto pr-1">
                    <Show when=move || stage.get() == AuthStage::LoginForm>
                        <form on:submit=on_login class="space-y-5 py-2">
                            <div>
                                <label for="login-email" class="block text-xs font-bold text-slate-700 mb-1 uppercase">
                                    "Email Address"
                                </label>
                                <input
                                    id="login-email"
                                    type="email"
                                    placeholder="you@example.com"
                                    prop:value=login_form.email
                                    on:input=move |ev| login_form.email.set(event_target_value(&ev))
                                    class="w-full bg-white px-3 py-2 border border-slate-400 rounded-lg text-sm"
                                />
                                {move || field_error("email")}
                            </div>
                            <div>
                                <label for="login-password" class="block text-xs font-bold text-slate-700 mb-1 uppercase">
                                    "Password"
                                </label>
                                <input
                                    id="login-password"
                                    type="password"
                                    placeholder="••••••••"
                                    prop:value=login_form.password
                                    on:input=move |ev| login_form.password.set(event_target_value(&ev))
                                    class="w-full bg-white px-3 py-2 border border-slate-400 rounded-lg text-sm"
                                />
                                {move || field_error("password")}
                            </div>
                            <div class="flex space-x-3 pt-4 border-t border-slate-200">
                                <button
                                    type="button"
                                    on:click=move |_| prompt_ctx.close()
                                    class="flex-1 py-3 text-slate-700 font-medium hover:bg-slate-100 rounded-xl"
                                >
                                    "Cancel"
                                </button>
                                <button
                                    type="submit"
                                    disabled=move || processing.get()
                                    class="flex-1 bg-brand-600 hover:bg-brand-700 text-white font-bold py-3 rounded-xl shadow-lg"
                                >
                                    {move || if processing.get() { "Authenticating..." } else { "Log In" }}
                                </button>
                            </div>
                        </form>
                    </Show>

                    <Show when=move || stage.get() == AuthStage::RegisterForm>
                        <form on:submit=on_register class="space-y-4 py-2">
                            <div>
                                <label for="reg-email" class="block text-xs font-bold text-slate-700 mb-1 uppercase">
                                    {email_label}
                                </label>
                                <input
                                    id="reg-email"
                                    type="email"
                                    placeholder=move || {
                                        if role == UserRole::Student { "student@university.edu" } else { "you@example.com" }
                                    }
                                    prop:value=register_form.email
                                    on:input=move |ev| register_form.email.set(event_target_value(&ev))
                                    class="w-full bg-white px-3 py-2 border border-slate-400 rounded-lg text-sm"
                                />
                                {move || field_error("email")}
                            </div>
                            <div>
                                <label for="reg-phone" class="block text-xs font-bold text-slate-700 mb-1 uppercase">
                                    "Mobile Number (No VoIP)"
                                </label>
                                <input
                                    id="reg-phone"
                                    type="tel"
                                    placeholder="(555) 123-4567"
                                    prop:value=register_form.phone
                                    on:input=move |ev| register_form.phone.set(event_target_value(&ev))
                                    class="w-full bg-white px-3 py-2 border border-slate-400 rounded-lg text-sm"
                                />
                                {move || field_error("phone")}
                            </div>
                            <div>
                                <label for="reg-address" class="block text-xs font-bold text-slate-700 mb-1 uppercase">
                                    "Full Street Address"
                                </label>
                                <input
                                    id="reg-address"
                                    type="text"
                                    placeholder="123 Campus Dr, Apt 4B"
                                    prop:value=register_form.address
                                    on:input=move |ev| register_form.address.set(event_target_value(&ev))
                                    class="w-full bg-white px-3 py-2 border border-slate-400 rounded-lg text-sm"
                                />
                                {move || field_error("address")}
                            </div>
                            <div class="grid grid-cols-3 gap-3">
                                <div>
                                    <label for="reg-city" class="block text-xs font-bold text-slate-700 mb-1">
                                        "City"
                                    </label>
                                    <input
                                        id="reg-city"
                                        type="text"
                                        placeholder="San Jose"
                                        prop:value=register_form.city
                                        on:input=move |ev| register_form.city.set(event_target_value(&ev))
                                        class="w-full bg-white px-3 py-2 border border-slate-400 rounded-lg text-sm"
                                    />
                                    {move || field_error("city")}
                                </div>
                                <div>
                                    <label for="reg-state" class="block text-xs font-bold text-slate-700 mb-1">
                                        "State/Prov"
                                    </label>
                                    <input
                                        id="reg-state"
                                        type="text"
                                        placeholder="CA"
                                        prop:value=register_form.state
                                        on:input=move |ev| register_form.state.set(event_target_value(&ev))
                                        class="w-full bg-white px-3 py-2 border border-slate-400 rounded-lg text-sm"
                                    />
                                    {move || field_error("state")}
                                </div>
                                <div>
                                    <label for="reg-zip" class="block text-xs font-bold text-slate-700 mb-1">
                                        "Zip"
                                    </label>
                                    <input
                                        id="reg-zip"
                                        type="text"
                                        placeholder="95112"
                                        prop:value=register_form.zip
                                        on:input=move |ev| register_form.zip.set(event_target_value(&ev))
                                        class="w-full bg-white px-3 py-2 border border-slate-400 rounded-lg text-sm"
                                    />
                                    {move || field_error("zip")}
                                </div>
                            </div>
                            <div>
                                <label for="reg-display-name" class="block text-xs font-bold text-slate-700 mb-1 uppercase">
                                    "Display Name (Visible Publicly)"
                                </label>
                                <input
                                    id="reg-display-name"
                                    type="text"
                                    prop:value=register_form.display_name
                                    on:input=move |ev| register_form.display_name.set(event_target_value(&ev))
                                    class="w-full bg-white px-3 py-2 border border-slate-400 rounded-lg text-sm"
                                />
                            </div>
                            <div class="flex space-x-3 pt-4 border-t border-slate-200">
                                <button
                                    type="button"
                                    on:click=move |_| prompt_ctx.close()
                                    class="flex-1 py-3 text-slate-700 font-medium hover:bg-slate-100 rounded-xl"
                                >
                                    "Cancel"
                                </button>
                                <button
                                    type="submit"
                                    disabled=move || processing.get()
                                    class="flex-1 bg-brand-600 hover:bg-brand-700 text-white font-bold py-3 rounded-xl shadow-lg"
                                >
                                    {move || if processing.get() { "Verifying..." } else { "Verify Identity" }}
                                </button>
                            </div>
                        </form>
                    </Show>

                    <Show when=move || stage.get() == AuthStage::AwaitingVerification>
                        <div class="space-y-5 py-2 text-center">
                            <p class="text-sm text-slate-600">
                                "We sent a verification code to "
                                <span class="font-bold">{move || registered_email.get()}</span>
                                ". Enter it below, or use the link in the email."
                            </p>
                            <Show when=move || notice.get().is_some()>
                                <p class="text-xs text-slate-500">{move || notice.get().unwrap_or_default()}</p>
                            </Show>
                            <form
                                on:submit=move |ev: web_sys::SubmitEvent| {
                                    ev.prevent_default();
                                    submit_code(code.get());
                                }
                                class="space-y-4"
                            >
                                <div class="text-left">
                                    <label for="otp-code" class="block text-xs font-bold text-slate-700 mb-1 uppercase">
                                        "Verification Code"
                                    </label>
                                    <input
                                        id="otp-code"
                                        type="text"
                                        inputmode="numeric"
                                        placeholder="6-digit code"
                                        prop:value=code
                                        on:input=move |ev| code.set(event_target_value(&ev))
                                        class="w-full bg-white px-3 py-2 border border-slate-400 rounded-lg text-sm tracking-widest"
                                    />
                                </div>
                                <button
                                    type="submit"
                                    disabled=move || processing.get()
                                    class="w-full bg-brand-600 hover:bg-brand-700 text-white font-bold py-3 rounded-xl shadow-lg"
                                >
                                    {move || if processing.get() { "Verifying..." } else { "Verify Code" }}
                                </button>
                            </form>
                            <button
                                on:click=move |_| submit_code(SIMULATED_OTP.to_string())
                                disabled=move || processing.get()
                                class="w-full py-2 text-sm text-brand-600 font-medium hover:bg-brand-50 rounded-xl"
                            >
                                "(Simulate) Click Link from Email"
                            </button>
                            <div class="flex justify-between text-sm">
                                <button
                                    on:click=on_resend
                                    class="text-slate-500 hover:text-slate-700 font-medium"
                                >
                                    "Resend Code"
                                </button>
                                <button
                                    on:click=move |_| prompt_ctx.close()
                                    class="text-slate-500 hover:text-slate-700 font-medium"
                                >
                                    "Cancel"
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_buttons_open_the_login_tab() {
        for role in [UserRole::Student, UserRole::Donor] {
            let prompt = AuthPrompt::entry(role);
            assert_eq!(prompt.mode, AuthMode::Login);
            assert_eq!(prompt.role, role);
            assert_eq!(AuthStage::from_mode(prompt.mode).title(), "Welcome Back");
        }
    }
}
