use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener, use_interval_fn, utils::Pausable};

use crate::data::{next_index, prev_index, Project, PROJECTS};

/// Autoplay advance period.
const AUTOPLAY_INTERVAL_MS: u64 = 4000;

#[component]
pub fn ProjectSlider() -> impl IntoView {
    let (current_index, set_current_index) = signal(0usize);
    let (selected, set_selected) = signal(None::<&'static Project>);

    // A single repeating timer drives autoplay. Pausing cancels the pending
    // tick; resuming starts a fresh cycle with no immediate advance.
    let Pausable {
        pause,
        resume,
        is_active,
    } = use_interval_fn(
        move || set_current_index.update(|i| *i = next_index(*i, PROJECTS.len())),
        AUTOPLAY_INTERVAL_MS,
    );

    let toggle_autoplay = move |_| {
        if is_active.get_untracked() {
            pause();
            log::debug!("slider autoplay paused");
        } else {
            resume();
        }
    };

    let go_next = move |_| set_current_index.update(|i| *i = next_index(*i, PROJECTS.len()));
    let go_prev = move |_| set_current_index.update(|i| *i = prev_index(*i, PROJECTS.len()));

    // Escape dismisses the detail modal.
    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            set_selected.set(None);
        }
    });

    let slides = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, project)| {
            view! {
                <div
                    class=move || if current_index.get() == i { "slide active" } else { "slide" }
                    style:background-image=format!("url({})", project.image)
                >
                    <div class="slide-overlay"></div>

                    <div class="status-badge" style:background-color=project.status.color()>
                        {project.status.label()}
                    </div>

                    {project
                        .featured
                        .then(|| view! { <div class="featured-badge">"★ Featured"</div> })}

                    <div class="slide-content">
                        <div class="project-header">
                            <h2>{project.name}</h2>
                            <div class="project-stats">
                                <div class="stat">"★ " {project.stats.stars}</div>
                                <div class="stat">"👁 " {project.stats.views}</div>
                                <div class="stat">"⌨ " {project.stats.commits}</div>
                            </div>
                        </div>

                        <div class="tech-stack">
                            {project
                                .tech
                                .iter()
                                .map(|tech| view! { <span class="tech-tag">{*tech}</span> })
                                .collect_view()}
                        </div>

                        <p class="project-description">{project.description}</p>

                        <div class="project-actions">
                            <button class="btn-detail" on:click=move |_| set_selected.set(Some(project))>
                                "👁 Details"
                            </button>

                            {project
                                .link
                                .map(|href| {
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="btn-github"
                                        >
                                            <i class="devicon-github-original"></i>
                                            " GitHub"
                                        </a>
                                    }
                                })}
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let indicators = (0..PROJECTS.len())
        .map(|i| {
            view! {
                <button
                    class=move || {
                        if current_index.get() == i { "indicator active" } else { "indicator" }
                    }
                    on:click=move |_| set_current_index.set(i)
                ></button>
            }
        })
        .collect_view();

    let thumbnails = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, project)| {
            view! {
                <div
                    class=move || {
                        if current_index.get() == i { "thumbnail active" } else { "thumbnail" }
                    }
                    style:background-image=format!("url({})", project.image)
                    on:click=move |_| set_current_index.set(i)
                >
                    <div class="thumbnail-overlay">
                        <h4>{project.name}</h4>
                        <span>{project.tech.first().copied()}</span>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="projects-container">
            <div class="slider-container">
                <div
                    class="slider-track"
                    style:transform=move || format!("translateX(-{}%)", current_index.get() * 100)
                >
                    {slides}
                </div>

                <div class="slider-controls">
                    <button class="slider-btn prev" on:click=go_prev>
                        "❮"
                    </button>
                    <button class="slider-btn next" on:click=go_next>
                        "❯"
                    </button>
                </div>

                <button class="play-pause-btn" on:click=toggle_autoplay>
                    {move || if is_active.get() { "⏸️" } else { "▶️" }}
                </button>
            </div>

            <div class="slide-indicators">{indicators}</div>

            <div class="project-thumbnails">{thumbnails}</div>

            {move || {
                selected
                    .get()
                    .map(|project| {
                        view! {
                            <div class="modal-overlay" on:click=move |_| set_selected.set(None)>
                                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                                    <button
                                        class="modal-close"
                                        on:click=move |_| set_selected.set(None)
                                    >
                                        "✕"
                                    </button>
                                    <h2>{project.name}</h2>
                                    <img src=project.image alt=project.name />
                                    <p>{project.long_description}</p>
                                    <div class="tech-list">
                                        {project
                                            .tech
                                            .iter()
                                            .map(|tech| {
                                                view! { <span class="tech-tag">{*tech}</span> }
                                            })
                                            .collect_view()}
                                    </div>
                                    {project
                                        .link
                                        .map(|href| {
                                            view! {
                                                <a href=href target="_blank" rel="noopener noreferrer">
                                                    <i class="devicon-github-original"></i>
                                                    " View on GitHub"
                                                </a>
                                            }
                                        })}
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoplay_cycle_visits_every_slide_in_order() {
        let len = PROJECTS.len();
        let mut i = 0;
        let visited: Vec<_> = (0..len)
            .map(|_| {
                i = next_index(i, len);
                i
            })
            .collect();
        let expected: Vec<_> = (1..len).chain(std::iter::once(0)).collect();
        assert_eq!(visited, expected);
    }

    #[test]
    fn every_status_maps_to_a_badge_color() {
        for project in PROJECTS {
            assert!(project.status.color().starts_with('#'));
            assert!(!project.status.label().is_empty());
        }
    }
}
