mod about;
mod contact;
mod effects;
mod experience;
mod hero;
mod nav;
mod projects;
mod skills;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use contact::Contact;
use effects::{DotField, MouseTracker};
use experience::Experience;
use hero::Hero;
use nav::NavBar;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
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
        <Title formatter=|title| format!("Hethu Sri - {title}") />

        <Router>
            <MouseTracker />
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let container_ref = NodeRef::<html::Div>::new();

    view! {
        <Title text="Portfolio" />
        <div
            node_ref=container_ref
            class="min-h-screen pt-24 bg-gradient-to-br from-slate-900 via-teal-900 to-slate-800 relative overflow-hidden cursor-none"
        >
            <DotField container=container_ref />
            <NavBar />
            <Hero />
            <About />
            <Projects />
            <Experience />
            <Skills />
            <Contact />
            // positioned by the --mouse-x/--mouse-y variables the tracker writes
            <div class="cursor-dot fixed w-4 h-4 bg-orange-400 rounded-full pointer-events-none z-50 mix-blend-difference"></div>
        </div>
    }
}
