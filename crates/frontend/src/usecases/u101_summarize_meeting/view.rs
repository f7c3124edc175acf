use super::api;
use super::state::{mode_banner, SubmitGate, UploadError, UploadState, ViewState};
use crate::shared::components::summary_card::SummaryCard;
use crate::shared::config::ApiConfig;
use contracts::usecases::u101_summarize_meeting::{SummarizeMode, SummarizeResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn SummarizeMeetingPage() -> impl IntoView {
    let state = RwSignal::new(UploadState::new());
    // Raw picker handle lives outside the reactive state; the machine only
    // tracks name and size.
    let picked_file = StoredValue::new_local(Option::<web_sys::File>::None);
    let config = StoredValue::new(ApiConfig::from_env());

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(files) = input.files() {
                if let Some(file) = files.get(0) {
                    state.update(|s| s.select_file(file.name(), file.size() as u64));
                    picked_file.set_value(Some(file));
                }
            }
        }
    };

    let on_submit = move |_| {
        if state.try_update(|s| s.begin_submit()) != Some(SubmitGate::Dispatch) {
            return;
        }
        let Some(file) = picked_file.get_value() else {
            // Picker handle and state row move in lockstep; a missing handle
            // here is a teardown race, settled locally without a request.
            state.update(|s| {
                s.settle(Err(UploadError::Transport(
                    "Selected file is no longer available".to_string(),
                )))
            });
            return;
        };
        let config = config.get_value();
        spawn_local(async move {
            let outcome = api::upload_audio(&config, &file).await;
            // The settlement may arrive after the page is gone; try_update
            // drops it instead of writing to disposed state.
            state.try_update(|s| s.settle(outcome));
        });
    };

    let submit_disabled =
        Signal::derive(move || state.with(|s| s.is_loading() || s.selected_file().is_none()));

    view! {
        <div class="page page--narrow">
            <div class="page__header">
                <h1 class="page__title">"🎯 Meeting Summarizer"</h1>
                <p class="page__subtitle">"Upload your meeting audio to get an AI-powered summary"</p>
            </div>

            <div class="card upload-card">
                <div class="card__body">
                    <div class="upload-card__dropzone">
                        <label class="upload-card__label" for="audio-file-input">
                            <div class="upload-card__icon">"📁"</div>
                            <p class="upload-card__filename">
                                {move || match state.with(|s| s.selected_file().cloned()) {
                                    Some(file) => format!("Selected: {}", file.name),
                                    None => "Click to select audio file".to_string(),
                                }}
                            </p>
                            <p class="upload-card__hint">"Supports: MP3, WAV, M4A, and other audio formats"</p>
                        </label>
                        <input
                            id="audio-file-input"
                            type="file"
                            accept="audio/*"
                            on:change=handle_file_select
                            class="hidden"
                        />
                    </div>

                    <div class="upload-card__actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_submit
                            disabled=submit_disabled
                        >
                            {move || if state.with(|s| s.is_loading()) {
                                "Processing..."
                            } else {
                                "Summarize Meeting"
                            }}
                        </Button>
                    </div>
                </div>
            </div>

            {move || match state.with(|s| s.view()) {
                ViewState::Loading => view! {
                    <div class="card loading-panel">
                        <Spinner />
                        <p class="loading-panel__text">"Processing your audio... This may take a minute."</p>
                    </div>
                }.into_any(),
                ViewState::Error(message) => view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{message}</span>
                    </div>
                }.into_any(),
                ViewState::Result(result) => view! { <ResultPanel result=result /> }.into_any(),
                ViewState::Idle => view! { <></> }.into_any(),
            }}
        </div>
    }
}

/// Mode banner plus the two verbatim text blocks, in response order.
#[component]
fn ResultPanel(result: SummarizeResponse) -> impl IntoView {
    let banner_class = match result.mode {
        SummarizeMode::Mock => "banner banner--mock",
        SummarizeMode::Real => "banner banner--real",
    };

    view! {
        <div class="result-panel">
            <div class=banner_class>
                <p class="banner__text">{mode_banner(result.mode)}</p>
            </div>
            <SummaryCard title="📄 Meeting Summary" content=result.summary />
            <SummaryCard title="🎧 Transcript" content=result.transcript />
        </div>
    }
}
