use leptos::prelude::*;

use super::nav::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative z-10 flex items-center justify-center min-h-[80vh] px-6">
            <div class="text-center">
                <h1 class="text-6xl md:text-8xl lg:text-9xl font-bold leading-none">
                    <span class="bg-gradient-to-r from-orange-400 via-red-400 to-pink-400 bg-clip-text text-transparent block transform hover:scale-105 transition-transform duration-500">
                        "Hi, I'm"
                    </span>
                    <span class="bg-gradient-to-r from-orange-400 via-red-400 to-pink-400 bg-clip-text text-transparent block transform hover:scale-105 transition-transform duration-500 delay-100">
                        "Hethu Sri"
                    </span>
                </h1>
                <p class="mt-8 text-xl text-gray-300 max-w-2xl mx-auto">
                    "Software Developer passionate about building Full Stack, Cloud, and Data Visualization solutions."
                </p>
                <div class="mt-8 flex gap-4 justify-center">
                    <a
                        href="/HethuSriNadipudi_Resume.pdf"
                        class="bg-orange-500 hover:bg-orange-600 text-white px-6 py-3 font-medium transition-colors duration-200"
                    >
                        "Download Resume"
                    </a>
                    <button
                        on:click=move |_| scroll_to_section("projects")
                        class="border border-orange-400 text-orange-400 hover:bg-orange-400 hover:text-white px-6 py-3 font-medium transition-colors duration-200"
                    >
                        "View Projects"
                    </button>
                </div>
            </div>
        </section>
    }
}
