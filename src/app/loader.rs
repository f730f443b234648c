use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::PageState;
use crate::lifecycle::{LoaderTiming, LoadingGate};

/// Full-screen spinner shown until the page gate is revealed.
///
/// The reveal fires after `timing`, never longer than the gate's hard bound.
/// Unmounting first cancels it.
#[component]
pub fn Loader(#[prop(optional)] timing: Option<LoaderTiming>) -> impl IntoView {
    let PageState { gate } = expect_context::<PageState>();
    let timing = timing.unwrap_or_default().bounded();

    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |_: ()| {
            let revealed = gate.try_maybe_update(|g| {
                let changed = g.reveal();
                (changed, changed)
            });
            if revealed == Some(true) {
                log::debug!("loader revealed after {:?}", timing.delay());
            }
        },
        timing.delay_ms(),
    );

    // Effects only run in the browser, once the page has mounted
    Effect::new(move |_| start(()));

    on_cleanup(move || {
        stop();
        if gate.try_update_untracked(LoadingGate::cancel) == Some(true) {
            log::debug!("loader unmounted before reveal");
        }
    });

    view! {
        <Show when=move || gate.with(LoadingGate::is_visible)>
            <div
                class="page-loader fixed inset-0 z-50 flex flex-col items-center justify-center gap-4 bg-gray-900"
                role="status"
                aria-live="polite"
            >
                <div class="w-14 h-14 rounded-full border-4 border-gray-700 border-t-blue-500 animate-spin"></div>
                <span class="sr-only">"Loading"</span>
            </div>
        </Show>
    }
}
