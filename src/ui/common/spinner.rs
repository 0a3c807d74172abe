use leptos::prelude::*;

/// Centered loading spinner with an optional message
#[component]
pub fn LoadingSpinner(
    #[prop(default = String::new())]
    message: String,
) -> impl IntoView {
    view! {
        <div class="spinner-container spinner-centered">
            <div class="spinner spinner-circle spinner-md" role="status" aria-live="polite">
                <div class="spinner-circle-inner"></div>
                <span class="sr-only">"Loading..."</span>
            </div>
            {(!message.is_empty()).then(|| view! {
                <div class="spinner-label">{message.clone()}</div>
            })}
        </div>
    }
}
