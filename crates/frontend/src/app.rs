use crate::usecases::u101_summarize_meeting::SummarizeMeetingPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SummarizeMeetingPage />
    }
}
