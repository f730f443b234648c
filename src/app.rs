mod hero;
mod loader;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{self, HEAD};
use crate::lifecycle::{LoaderTiming, LoadingGate};
use hero::Hero;
use loader::Loader;
use sections::{About, Contact, Footer, Navbar, Projects, Skills};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                // without the wasm bundle nothing would ever lift the loader
                <noscript>
                    <style>
                        ".page-loader { display: none !important; } .page-content { opacity: 1 !important; }"
                    </style>
                </noscript>
                <MetaTags />
            </head>
            <body class="bg-gray-900 text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=HEAD.title />
        <Meta name="description" content=HEAD.description />
        <Meta name="keywords" content=content::keywords() />
        <Meta name="author" content=HEAD.author />
        <Link rel="icon" type_="image/svg+xml" href=content::FAVICON />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// UI state owned by the page root and shared with its sections.
#[derive(Debug, Clone, Copy)]
pub struct PageState {
    pub gate: RwSignal<LoadingGate>,
}

impl PageState {
    pub fn is_loading(&self) -> bool {
        self.gate.with(LoadingGate::is_visible)
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let state = PageState {
        gate: RwSignal::new(LoadingGate::new()),
    };
    provide_context(state);

    let loading = move || state.is_loading();

    view! {
        <Loader timing=LoaderTiming::default() />
        <div
            class=move || {
                if loading() {
                    "page-content min-h-screen transition-opacity duration-1000 opacity-0"
                } else {
                    "page-content min-h-screen transition-opacity duration-1000 opacity-100"
                }
            }
            inert=loading
            aria-busy=move || loading().to_string()
        >
            <Navbar />
            <Hero />
            <About />
            <Skills />
            <Projects />
            <Contact />
            <Footer />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::lifecycle::GatePhase;

    fn render<V: IntoView + 'static>(view: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.with(|| view().to_html())
    }

    #[test]
    fn test_page_starts_behind_loader() {
        let html = render(|| view! { <HomePage /> });

        assert!(html.contains("page-loader"));
        assert!(html.contains("role=\"status\""));
        assert!(html.contains("opacity-0"));
        assert!(html.contains("inert"));
        assert!(html.contains("aria-busy=\"true\""));
    }

    #[test]
    fn test_revealed_page_is_interactive() {
        let html = render(|| {
            let state = PageState {
                gate: RwSignal::new(LoadingGate::new()),
            };
            state.gate.update(|g| {
                g.reveal();
            });
            provide_context(state);
            view! {
                <Loader />
                <Navbar />
            }
        });

        assert!(!html.contains("page-loader"));
        assert!(html.contains("href=\"#about\""));
    }

    /// Renders a loader under its own owner, then disposes that owner the way
    /// navigating away from the page would. The returned page owner keeps the
    /// gate signal alive.
    fn mount_and_unmount_loader(gate: LoadingGate) -> (Owner, PageState) {
        let parent = Owner::new();
        let state = parent.with(|| {
            let state = PageState {
                gate: RwSignal::new(gate),
            };
            provide_context(state);

            let child = parent.child();
            let html = child.with(|| view! { <Loader /> }.to_html());
            assert_eq!(html.contains("page-loader"), state.gate.get_untracked().is_visible());
            child.cleanup();

            state
        });
        (parent, state)
    }

    #[test]
    fn test_loader_unmount_cancels_pending_reveal() {
        let (_page, state) = mount_and_unmount_loader(LoadingGate::new());
        assert_eq!(state.gate.get_untracked().phase(), GatePhase::Cancelled);

        // A timer callback that slipped through after unmount changes nothing
        assert_eq!(state.gate.try_update(LoadingGate::reveal), Some(false));
        assert_eq!(state.gate.get_untracked().phase(), GatePhase::Cancelled);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_loader_unmount_keeps_revealed_gate() {
        let mut gate = LoadingGate::new();
        gate.reveal();

        let (_page, state) = mount_and_unmount_loader(gate);
        assert_eq!(state.gate.get_untracked().phase(), GatePhase::Revealed);
    }

    #[test]
    fn test_hero_renders_without_background() {
        // No canvas is ever attached outside the browser
        let html = render(|| view! { <Hero /> });

        assert!(html.contains("src=\"/profile.svg\""));
        assert!(html.contains("Tanmay Paul"));
        assert!(html.contains("https://github.com/tanmayofficial"));
        assert!(html.contains("https://www.linkedin.com/in/tanmaypaul95/"));
        assert!(!html.contains("<canvas"));
    }

    #[test]
    fn test_sections_match_nav_anchors() {
        let html = render(|| view! { <HomePage /> });
        for section in content::SECTIONS {
            assert!(html.contains(&format!("id=\"{}\"", section.id)));
            assert!(html.contains(&format!("href=\"{}\"", section.href())));
        }
    }
}
