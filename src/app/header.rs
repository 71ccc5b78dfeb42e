use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::data::SECTION_IDS;

/// How far down the page must be scrolled before the bar gets its
/// "scrolled" treatment.
const SCROLL_THRESHOLD: f64 = 50.0;

/// Distance of the section probe line from the viewport top, in px. The
/// first section whose bounding box spans this line is the active one.
const PROBE_OFFSET: f64 = 100.0;

struct NavItem {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
}

static NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        id: "hero",
        label: "About Me",
        icon: "👨‍💻",
    },
    NavItem {
        id: "skills",
        label: "Skills",
        icon: "⚡",
    },
    NavItem {
        id: "projects",
        label: "Projects",
        icon: "🚀",
    },
    NavItem {
        id: "contact",
        label: "Contact",
        icon: "✉️",
    },
];

/// First section, in declaration order, whose vertical span covers the
/// probe line. Ties go to the earlier section.
fn section_at_probe<'a, I>(rects: I, probe: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64, f64)>,
{
    rects
        .into_iter()
        .find(|&(_, top, bottom)| top <= probe && bottom >= probe)
        .map(|(id, _, _)| id)
}

/// Smooth-scrolls the viewport to a section anchor. A missing anchor is a
/// no-op.
fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        log::debug!("scroll target #{id} not found");
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[component]
pub fn Header() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (active_section, set_active_section) = signal("hero");
    let (menu_open, set_menu_open) = signal(false);

    // Recompute both scroll-derived states on every scroll event.
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        set_scrolled.set(offset > SCROLL_THRESHOLD);

        let doc = document();
        let rects = SECTION_IDS.iter().filter_map(|id| {
            doc.get_element_by_id(id).map(|el| {
                let rect = el.get_bounding_client_rect();
                (*id, rect.top(), rect.bottom())
            })
        });
        if let Some(current) = section_at_probe(rects, PROBE_OFFSET) {
            set_active_section.set(current);
        }
    });

    let navigate_to = move |id: &'static str| {
        scroll_to_section(id);
        set_menu_open.set(false);
    };

    let desktop_links = NAV_ITEMS
        .iter()
        .map(|item| {
            let id = item.id;
            view! {
                <li>
                    <button
                        on:click=move |_| navigate_to(id)
                        class=move || {
                            if active_section.get() == id { "nav-link active" } else { "nav-link" }
                        }
                    >
                        <span class="nav-icon">{item.icon}</span>
                        <span class="nav-text">{item.label}</span>
                        {move || {
                            (active_section.get() == id)
                                .then(|| view! { <div class="nav-indicator"></div> })
                        }}
                    </button>
                </li>
            }
        })
        .collect_view();

    let mobile_links = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let id = item.id;
            view! {
                <li style=("--delay", format!("{}s", index as f64 * 0.1))>
                    <button
                        on:click=move |_| navigate_to(id)
                        class=move || {
                            if active_section.get() == id {
                                "mobile-nav-link active"
                            } else {
                                "mobile-nav-link"
                            }
                        }
                    >
                        <span class="mobile-nav-icon">{item.icon}</span>
                        <span class="mobile-nav-text">{item.label}</span>
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class=move || {
            if scrolled.get() { "header scrolled" } else { "header" }
        }>
            <div class="header-container">
                <div class="logo" on:click=move |_| navigate_to("hero")>
                    <i class="devicon-rust-original logo-icon"></i>
                    <span class="logo-text">"Yusuf"<span class="logo-dot">"."</span></span>
                </div>

                <nav class="desktop-nav">
                    <ul class="nav-links">{desktop_links}</ul>
                </nav>

                <button
                    class="mobile-menu-btn"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>

                <nav class=move || {
                    if menu_open.get() { "mobile-nav open" } else { "mobile-nav" }
                }>
                    <div class="mobile-nav-content">
                        <div class="mobile-nav-header">
                            <div class="logo mobile-logo">
                                <i class="devicon-rust-original logo-icon"></i>
                                <span class="logo-text">
                                    "Yusuf"<span class="logo-dot">"."</span>
                                </span>
                            </div>
                        </div>

                        <ul class="mobile-nav-links">{mobile_links}</ul>

                        <div class="mobile-nav-footer">
                            <p>"Let's build amazing projects together!"</p>
                        </div>
                    </div>
                </nav>

                {move || {
                    menu_open
                        .get()
                        .then(|| {
                            view! {
                                <div
                                    class="mobile-nav-overlay"
                                    on:click=move |_| set_menu_open.set(false)
                                ></div>
                            }
                        })
                }}
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_picks_spanning_section() {
        let rects = [
            ("hero", -500.0, 80.0),
            ("skills", 80.0, 900.0),
            ("projects", 900.0, 1600.0),
        ];
        assert_eq!(section_at_probe(rects, 100.0), Some("skills"));
    }

    #[test]
    fn probe_prefers_first_match_on_overlap() {
        let rects = [("hero", 0.0, 400.0), ("skills", 50.0, 900.0)];
        assert_eq!(section_at_probe(rects, 100.0), Some("hero"));
    }

    #[test]
    fn probe_misses_when_no_section_spans_line() {
        let rects = [("hero", 200.0, 400.0)];
        assert_eq!(section_at_probe(rects, 100.0), None);
    }

    #[test]
    fn probe_includes_boundaries() {
        let rects = [("hero", 100.0, 100.0)];
        assert_eq!(section_at_probe(rects, 100.0), Some("hero"));
    }
}
