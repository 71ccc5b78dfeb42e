mod header;
mod homepage;
mod pointer_glow;
mod skills;
mod slider;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use header::Header;
use homepage::HomePage;
use pointer_glow::use_pointer_glow;

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
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (loaded, set_loaded) = signal(false);

    // Mirror the pointer into --mouse-x/--mouse-y for the ambient glow.
    use_pointer_glow();

    // Short delay before the fade-in transition kicks in.
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_loaded.set(true), 500.0);
    Effect::new(move |_| {
        start(());
    });

    view! {
        // sets the document title
        <Title formatter=|title| format!("Yusuf Kapukara - {title}") />

        <Router>
            <div class=move || {
                if loaded.get() { "app-wrapper loaded" } else { "app-wrapper" }
            }>
                <Header />
                <main class="flex flex-col flex-grow mx-auto w-full">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    // BUILD_TIME is RFC 3339, set by build.rs; the year is the first field.
    let year = &env!("BUILD_TIME")[..4];

    view! {
        <footer class="footer">
            <div class="footer-content">
                <p>"© " {year} " Yusuf. All rights reserved."</p>
                <p>"Built with ❤️ using Rust & Leptos"</p>
            </div>
        </footer>
    }
}
