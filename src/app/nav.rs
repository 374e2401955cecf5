use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls the section with the given id into view. A missing section
/// is a no-op.
pub fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[component]
pub fn NavBar() -> impl IntoView {
    let sections = [
        ("about", "About"),
        ("projects", "Projects"),
        ("experience", "Experience"),
        ("skills", "Skills"),
        ("contact", "Contact"),
    ];

    view! {
        <nav class="fixed top-0 left-0 w-full z-50 h-20 bg-slate-900/90 backdrop-blur-md shadow-md px-8">
            <div class="max-w-7xl mx-auto h-full flex items-center justify-between">
                <div class="text-xl font-bold text-orange-400 whitespace-nowrap">"Hethu Sri"</div>
                <div class="flex-1 flex justify-center space-x-10 ml-10">
                    {sections
                        .into_iter()
                        .map(|(id, label)| {
                            view! {
                                <button
                                    on:click=move |_| scroll_to_section(id)
                                    class="text-gray-300 hover:text-orange-400 transition-colors"
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href="https://github.com/hethusri"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="bg-orange-500 hover:bg-orange-600 text-white px-5 py-2 rounded-md text-sm font-medium transition duration-200"
                >
                    "GitHub"
                </a>
            </div>
        </nav>
    }
}
