//! Waitlist signup form
//!
//! Each [`SignupForm`] owns its own [`SubmissionState`]; the platform label
//! and the toast sink come from context.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::core::{ApiErrorBody, ErrorLog, INVALID_EMAIL_MESSAGE, SignupError, SubmissionState};
use crate::ui::notifications::use_notifications;
use crate::ui::platform::use_platform_context;

/// Waitlist endpoint served by the backend
pub const WAITLIST_ENDPOINT: &str = "/api/waitlist";

/// Map an API response onto the insert result.
///
/// Any 2xx is success. Error bodies carry a `{error, code}` pair; anything
/// unparsable is an unclassified failure.
pub fn interpret_response(status: u16, body: &str) -> Result<(), SignupError> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(body) => Err(body.into()),
        Err(_) => Err(SignupError::Unknown(format!(
            "Unexpected response from server (HTTP {})",
            status
        ))),
    }
}

/// `SignupStore` backed by the waitlist REST API.
///
/// Browser only: the server writes through `WaitlistStorage` directly.
#[cfg(not(feature = "ssr"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSignupStore;

#[cfg(not(feature = "ssr"))]
impl crate::core::SignupStore for HttpSignupStore {
    async fn insert_signup(
        &self,
        request: &crate::core::SignupRequest,
    ) -> Result<(), SignupError> {
        use gloo_net::http::Request;

        let response = Request::post(WAITLIST_ENDPOINT)
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| SignupError::Unknown(e.to_string()))?
            .send()
            .await
            .map_err(|e| SignupError::Unknown(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        interpret_response(status, &body)
    }
}

/// Writes unexpected failures to the browser console
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleErrorLog;

impl ErrorLog for ConsoleErrorLog {
    fn log_error(&self, context: &str, error: &dyn std::error::Error) {
        leptos::logging::error!("{}: {}", context, error);
    }
}

fn input_class(is_valid: bool) -> &'static str {
    if is_valid {
        "w-full h-12 px-4 rounded-md bg-white/10 border border-white/20 text-white placeholder-gray-400"
    } else {
        "w-full h-12 px-4 rounded-md bg-white/10 border border-red-500 text-white placeholder-gray-400"
    }
}

/// Email capture form
#[component]
pub fn SignupForm(
    /// Show the inline error text under the field, not just the red border
    #[prop(default = true)]
    show_validation_message: bool,
) -> impl IntoView {
    let platform = use_platform_context();
    let notifications = use_notifications();
    let state = RwSignal::new(SubmissionState::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let label = platform.label();
        let Some(Ok(request)) = state.try_update(|s| s.begin_submit(&label)) else {
            return;
        };

        #[cfg(not(feature = "ssr"))]
        leptos::task::spawn_local(async move {
            use crate::core::perform_signup;

            let outcome =
                perform_signup(&HttpSignupStore, &request, &notifications, &ConsoleErrorLog).await;
            // The form may have been unmounted while the request was in flight
            let _ = state.try_update(|s| s.finish(&outcome));
        });

        // Submit events only fire once hydrated
        #[cfg(feature = "ssr")]
        let _ = (request, notifications);
    };

    let is_valid = move || state.with(SubmissionState::is_valid);
    let is_submitting = move || state.with(SubmissionState::is_submitting);

    view! {
        <form on:submit=on_submit class="flex flex-col md:flex-row gap-3 max-w-md mx-auto">
            <div class="flex-grow">
                <input
                    type="email"
                    placeholder="Enter your email"
                    required
                    class=move || input_class(is_valid())
                    aria-invalid=move || (!is_valid()).to_string()
                    prop:value=move || state.with(|s| s.email().to_string())
                    on:input=move |ev| state.update(|s| s.set_email(event_target_value(&ev)))
                />
                <Show when=move || show_validation_message && !is_valid()>
                    <p class="text-red-500 text-sm mt-1 text-left">{INVALID_EMAIL_MESSAGE}</p>
                </Show>
            </div>
            <button
                type="submit"
                class="h-12 px-5 rounded-md font-medium text-white bg-gradient-to-r from-purple-500 to-blue-500 hover:from-purple-600 hover:to-blue-600 transition-all disabled:opacity-60"
                disabled=is_submitting
            >
                {move || {
                    if is_submitting() {
                        "Signing up..."
                    } else {
                        "Join Early Access - Limited Spots!"
                    }
                }}
            </button>
        </form>
    }
}
