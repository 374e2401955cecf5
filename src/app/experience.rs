use leptos::prelude::*;

struct Role {
    title: &'static str,
    tenure: &'static str,
    highlights: [&'static str; 2],
}

const ROLES: [Role; 4] = [
    Role {
        title: "Software Engineer",
        tenure: "Agile Solutions, May 2022 - Aug 2024",
        highlights: ["Built full-stack SAP UI5 apps", "Managed CI/CD pipelines"],
    },
    Role {
        title: "Intern Developer",
        tenure: "Agile Solutions, May 2021 - Apr 2022",
        highlights: [
            "Resolved bugs & improved UX",
            "Contributed to frontend optimizations",
        ],
    },
    Role {
        title: "Pre-Education Program Trainee (PEP-2021)",
        tenure: "EPAM Systems, Sep 2020 - Jun 2021",
        highlights: [
            "Completed a 10-month apprenticeship focused on Java and Computer Science fundamentals",
            "Gained hands-on experience in OOP, algorithms, and software engineering principles",
        ],
    },
    Role {
        title: "Peer Mentor",
        tenure: "KL University, Dec 2019 - May 2021",
        highlights: [
            "Mentored students in Cybersecurity-related courses",
            "Co-authored a tutorial book for the Computer Networks and Security course",
        ],
    },
];

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="relative z-10 py-20 px-6">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-4xl font-bold text-white mb-12 text-center">"Experience"</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {ROLES
                        .iter()
                        .map(|role| {
                            view! {
                                <div class="bg-white/10 backdrop-blur-sm border border-white/20 rounded-lg p-6">
                                    <h3 class="text-xl font-semibold text-orange-400 mb-2">
                                        {role.title}
                                    </h3>
                                    <p class="text-gray-300 mb-4">{role.tenure}</p>
                                    <ul class="text-gray-300 space-y-2">
                                        {role
                                            .highlights
                                            .iter()
                                            .map(|h| view! { <li>"• " {*h}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
