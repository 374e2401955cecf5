use leptos::prelude::*;

const SKILLS: [&str; 12] = [
    "Python", "Java", "C", "ReactJS", "Django", "Azure", "MongoDB", "Node.js", "D3.js", "HTML",
    "CSS", "TypeScript",
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="relative z-10 py-20 px-6">
            <div class="max-w-4xl mx-auto">
                <div class="bg-white/5 backdrop-blur-lg border border-white/20 rounded-2xl shadow-lg p-10 text-center">
                    <h2 class="text-4xl font-bold text-white mb-10">"Skills"</h2>
                    <div class="flex flex-wrap gap-3 justify-center">
                        {SKILLS
                            .iter()
                            .map(|skill| {
                                view! {
                                    <span class="bg-teal-500/20 border border-teal-400 text-teal-400 px-4 py-2 rounded-full text-sm font-medium">
                                        {*skill}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
