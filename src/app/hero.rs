use leptos::{html, prelude::*};

use crate::content::{self, HERO_LINKS, NAME, TAGLINE};

#[component]
pub fn Hero() -> impl IntoView {
    let background = NodeRef::<html::Div>::new();

    #[cfg(feature = "hydrate")]
    bind_background(background);

    view! {
        <section class="relative flex flex-col md:flex-row items-center justify-center h-screen px-6 overflow-hidden">
            <div node_ref=background class="absolute inset-0" aria-hidden="true"></div>
            <div class="relative z-10 mb-8 md:mb-0 md:mr-12">
                <img
                    src=content::PROFILE_IMAGE
                    alt=NAME
                    class="rounded-full w-48 h-48 object-contain border-4 border-gray-700 bg-white transform transition-transform duration-500 hover:scale-110"
                />
            </div>
            <div class="relative z-10 text-center md:text-left">
                <h2 class="text-4xl font-bold flex items-center justify-center md:justify-start">
                    {format!("Hi, I'm {NAME}")}
                    <span class="ml-3 animate-wave">"👋"</span>
                </h2>
                <p class="text-lg mt-4">{TAGLINE}</p>
                <div class="mt-6 flex justify-center md:justify-start space-x-4">
                    {HERO_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-4 py-2 bg-gray-700 rounded hover:bg-gray-600"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Runs the animated background behind the hero for as long as it is mounted.
///
/// If the canvas can't be set up the hero simply renders without it.
#[cfg(feature = "hydrate")]
fn bind_background(container: NodeRef<html::Div>) {
    use crate::effect::{canvas::CanvasNet, EffectConfig};
    use crate::lifecycle::{EffectController, MountOutcome};

    let controller = StoredValue::new_local(EffectController::new(CanvasNet, EffectConfig::hero()));

    // Runs after mount; later runs hit the already-active guard
    Effect::new(move |_| {
        let Some(el) = container.get() else {
            return;
        };
        let el: web_sys::HtmlElement = el.into();
        match controller.try_update_value(|c| c.mount(&el)) {
            Some(MountOutcome::Created) => log::debug!("hero background mounted"),
            Some(MountOutcome::Degraded(e)) => log::warn!("hero background disabled: {e}"),
            Some(MountOutcome::AlreadyActive) | None => {}
        }
    });

    on_cleanup(move || {
        if controller.try_update_value(|c| c.unmount()) == Some(true) {
            log::debug!("hero background unmounted");
        }
    });
}
