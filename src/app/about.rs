use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="relative z-10 py-24 px-6">
            <div class="max-w-3xl mx-auto text-center">
                <h2 class="text-4xl font-extrabold text-white mb-10 tracking-tight">"About Me"</h2>
                <div class="text-gray-300 space-y-6 text-lg leading-relaxed text-justify">
                    <p>
                        "I am a passionate Software Developer with a strong foundation in Computer Science. Currently pursuing a Master of Engineering degree in Computer Science at the University of Cincinnati. My core experience lies in full stack development, particularly with JavaScript, SAP UI5, Azure Cloud, and frontend technologies like React and D3.js. I am constantly driven by curiosity and strive to grow into higher software engineering roles. When I'm not coding, I enjoy exploring new tech trends and building side projects."
                    </p>
                </div>
            </div>
        </section>
    }
}
