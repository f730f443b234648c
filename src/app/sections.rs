use leptos::prelude::*;

use crate::content::{
    self, ABOUT, CONTACT_BLURB, CONTACT_LINKS, NAME, PROJECTS, SECTIONS, SKILLS,
};

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="flex justify-between items-center p-5 bg-gray-800">
            <h1 class="text-xl font-bold">{NAME}</h1>
            <ul class="flex space-x-5">
                {SECTIONS
                    .iter()
                    .map(|s| {
                        view! {
                            <li>
                                <a href=s.href() class="hover:text-gray-400">
                                    {s.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="px-6 py-20 bg-gray-800">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-3xl font-bold mb-6">"About Me"</h2>
                <p class="text-lg leading-relaxed text-gray-300">{ABOUT}</p>
            </div>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="px-6 py-20 bg-gray-900">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-3xl font-bold mb-10">"Skills"</h2>
                <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-6">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="p-4 bg-gray-800 rounded shadow hover:shadow-lg transition">
                                    {*skill}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="px-6 py-20 bg-gray-800">
            <div class="max-w-6xl mx-auto text-center">
                <h2 class="text-3xl font-bold mb-10">"Projects"</h2>
                <div class="grid gap-8 md:grid-cols-2">
                    {PROJECTS
                        .iter()
                        .map(|p| {
                            view! {
                                <div class="bg-gray-900 p-6 rounded-lg shadow hover:shadow-lg transition text-left">
                                    <h3 class="text-2xl font-semibold mb-4">{p.title}</h3>
                                    <p class="text-gray-300 mb-4">{p.summary}</p>
                                    <span class="text-sm text-gray-400">{p.period}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="px-6 py-20 bg-gray-900">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-3xl font-bold mb-10">"Contact Me"</h2>
                <p class="text-lg text-gray-300 mb-6">{CONTACT_BLURB}</p>
                <div class="flex justify-center space-x-6">
                    {CONTACT_LINKS
                        .iter()
                        .map(|link| {
                            // mailto links stay in the current tab
                            let (target, rel) = if link.is_external() {
                                (Some("_blank"), Some("noopener noreferrer"))
                            } else {
                                (None, None)
                            };
                            view! {
                                <a
                                    href=link.href
                                    target=target
                                    rel=rel
                                    class="px-6 py-2 bg-gray-800 rounded hover:bg-gray-700 transition"
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

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-6 bg-gray-800 text-center text-sm text-gray-400">
            {format!("© {} {NAME}", content::copyright_year())}
        </footer>
    }
}
