use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="relative z-10 py-20 px-6">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-4xl font-bold text-white mb-12">"Contact Me"</h2>
                <div class="space-y-4 text-lg">
                    <p class="text-gray-300">
                        "📧 "
                        <a
                            href="mailto:hethusrinadipudi@gmail.com"
                            class="text-orange-400 hover:text-orange-300 transition-colors"
                        >
                            "hethusrinadipudi@gmail.com"
                        </a>
                    </p>
                    <p class="text-gray-300">
                        "🔗 "
                        <a
                            href="https://www.linkedin.com/in/hethusri-nadipudi"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-orange-400 hover:text-orange-300 transition-colors"
                        >
                            "LinkedIn"
                        </a>
                    </p>
                </div>
            </div>
        </section>
    }
}
