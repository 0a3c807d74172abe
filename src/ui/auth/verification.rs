//! Email verification step
//!
//! Code entry plus a rate-limited resend button. The flow state lives in a
//! [`VerificationFlow`]; this component mirrors it into a signal and ties
//! its background tasks to the component lifetime.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{
    CancellationToken, HttpClinicApi, PlatformTimer, ResendOutcome, VerificationFlow, VerificationState,
};
use crate::ui::common::{Button, ButtonVariant, ErrorMessage, FormField, SuccessMessage};
use crate::ui::icon::{Icon, icons};

type ClinicVerification = VerificationFlow<HttpClinicApi, PlatformTimer>;

#[component]
pub fn EmailVerification(
    /// Address the code was sent to
    #[prop(into)]
    email: String,
    /// Runs once, shortly after the code was accepted
    on_verified: Callback<()>,
) -> impl IntoView {
    let flow = ClinicVerification::new(email.clone(), HttpClinicApi, PlatformTimer);
    let state = RwSignal::new(flow.state());
    let subscription = flow
        .store()
        .subscribe(move |snapshot: &VerificationState| state.set(snapshot.clone()));

    // Stops the countdown and a pending completion once the page is left
    let cancel = CancellationToken::new();
    let cancel_on_drop = cancel.clone().drop_guard();
    on_cleanup(move || {
        drop(subscription);
        drop(cancel_on_drop);
    });

    let flow = StoredValue::new(flow);

    let submit = {
        let cancel = cancel.clone();
        Callback::new(move |_: ()| {
            let flow = flow.get_value();
            let cancel = cancel.clone();
            spawn_local(async move {
                flow.submit_code(move || {
                    if !cancel.is_cancelled() {
                        on_verified.run(());
                    }
                })
                .await;
            });
        })
    };

    let resend = Callback::new(move |_: ()| {
        let flow = flow.get_value();
        let cancel = cancel.clone();
        spawn_local(async move {
            if flow.resend_code().await == ResendOutcome::Sent {
                flow.run_cooldown(&cancel).await;
            }
        });
    });

    let code = Signal::derive(move || state.with(|s| s.code.clone()));
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let resent = Signal::derive(move || {
        state
            .with(|s| s.code_resent)
            .then(|| "A new code is on its way.".to_string())
    });
    let resend_label = move || match state.with(|s| s.resend_cooldown_secs) {
        0 => "Resend code".to_string(),
        secs => format!("Resend code in {}s", secs),
    };

    let code_form = move || {
        let email = email.clone();
        view! {
            <form
                class="space-y-5"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <div class="text-center">
                    <Icon name=icons::MAIL class="w-10 h-10 mx-auto"/>
                    <h2 class="mt-3 text-2xl font-bold text-theme-primary">"Verify your email"</h2>
                    <p class="mt-2 text-sm text-theme-secondary">
                        "Enter the code we sent to "
                        <strong>{email}</strong>
                    </p>
                </div>

                <ErrorMessage error=error/>
                <SuccessMessage message=resent/>

                <FormField
                    name="code"
                    label="Verification code".to_string()
                    required=true
                    placeholder="123456".to_string()
                    value=code
                    on_input=Callback::new(move |value: String| {
                        flow.with_value(|flow| flow.set_code(&value))
                    })
                />

                <Button
                    button_type="submit"
                    class="w-full".to_string()
                    loading=Signal::derive(move || state.with(|s| s.submitting))
                    disabled=Signal::derive(move || !state.with(VerificationState::can_submit))
                >
                    "Verify"
                </Button>
                <Button
                    variant=ButtonVariant::Ghost
                    class="w-full".to_string()
                    on_click=resend
                    loading=Signal::derive(move || state.with(|s| s.resending))
                    disabled=Signal::derive(move || !state.with(VerificationState::can_resend))
                >
                    {resend_label}
                </Button>
            </form>
        }
    };

    view! {
        <div class="verification-card card">
            <Show when=move || state.with(|s| s.verified) fallback=code_form>
                <div class="text-center space-y-3" role="status">
                    <Icon name=icons::CHECK class="w-10 h-10 mx-auto"/>
                    <h2 class="text-2xl font-bold text-theme-primary">"Email verified"</h2>
                    <p class="text-sm text-theme-secondary">"Taking you to your account..."</p>
                </div>
            </Show>
        </div>
    }
}
