use leptos::prelude::*;

struct Project {
    title: &'static str,
    description: &'static str,
    tech: &'static str,
}

const PROJECTS: [Project; 6] = [
    Project {
        title: "Education & Health Awareness Dashboard",
        description: "D3.js-based dashboard exploring healthcare access by education.",
        tech: "D3.js, JavaScript, HTML/CSS, Vercel",
    },
    Project {
        title: "Earthquake Data Visualization",
        description: "Global seismic explorer with filtering and animations.",
        tech: "D3.js, Leaflet, JavaScript",
    },
    Project {
        title: "Phineas & Ferb Sentiment Analysis",
        description: "Character sentiment storytelling using data viz.",
        tech: "Visual Analytics, Narrative Storytelling",
    },
    Project {
        title: "Retail Analytics Platform",
        description: "Azure ML-powered insights dashboard for retail.",
        tech: "Azure, Python, HTML/CSS/JS",
    },
    Project {
        title: "Land Registration via Blockchain",
        description: "Secure registry with React & MongoDB backend.",
        tech: "ReactJS, MongoDB, Blockchain",
    },
    Project {
        title: "Health Care Portal",
        description: "Patient booking + health services platform in Django.",
        tech: "Python, Django, JavaScript",
    },
];

// two cards are visible per carousel page
const PAGE_SIZE: usize = 2;

#[component]
pub fn Projects() -> impl IntoView {
    let (index, set_index) = signal(0usize);

    let page = move |direction: isize| {
        let next = index.get_untracked() as isize + direction * PAGE_SIZE as isize;
        if next >= 0 && (next as usize) < PROJECTS.len() {
            set_index(next as usize);
        }
    };

    view! {
        <section id="projects" class="relative z-10 py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <div class="bg-white/5 backdrop-blur-lg border border-white/20 rounded-2xl shadow-lg p-10">
                    <h2 class="text-4xl font-bold text-white mb-10 text-center">"Projects"</h2>

                    <div class="relative">
                        <button
                            on:click=move |_| page(-1)
                            disabled=move || index() == 0
                            class="absolute -left-9 top-1/2 transform -translate-y-1/2 z-10 bg-orange-500 hover:bg-orange-600 text-white p-3 rounded-full shadow-lg"
                        >
                            "\u{276e}"
                        </button>

                        <div class="overflow-hidden">
                            <div
                                class="flex transition-transform duration-300 ease-in-out gap-6"
                                style:transform=move || {
                                    format!("translateX(-{}%)", index() / PAGE_SIZE * 100)
                                }
                            >
                                {PROJECTS
                                    .iter()
                                    .map(|project| {
                                        view! {
                                            <div class="min-w-[calc(50%-12px)] bg-white/10 backdrop-blur-md border border-white/20 rounded-xl p-6 shadow-md">
                                                <h3 class="text-xl font-semibold text-orange-400 mb-3">
                                                    {project.title}
                                                </h3>
                                                <p class="text-gray-300 mb-4">{project.description}</p>
                                                <p class="text-sm text-teal-400">"Tech: " {project.tech}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <button
                            on:click=move |_| page(1)
                            disabled=move || index() + PAGE_SIZE >= PROJECTS.len()
                            class="absolute -right-9 top-1/2 transform -translate-y-1/2 z-10 bg-orange-500 hover:bg-orange-600 text-white p-3 rounded-full shadow-lg"
                        >
                            "\u{276f}"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
