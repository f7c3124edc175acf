use leptos::prelude::*;

/// Titled block of verbatim text.
///
/// Whitespace and newlines in `content` are preserved as-is, the `<pre>`
/// wrapper renders the server text without any reflow or escaping games.
#[component]
pub fn SummaryCard(title: &'static str, #[prop(into)] content: String) -> impl IntoView {
    view! {
        <div class="card summary-card">
            <h2 class="section-title">{title}</h2>
            <pre class="summary-card__content">{content}</pre>
        </div>
    }
}
