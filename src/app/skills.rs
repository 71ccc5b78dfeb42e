use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
};

use crate::data::{category_count, filtered_skills, Skill, SkillCategory};

/// Fraction of a card's height that must enter the viewport before it is
/// revealed.
const REVEAL_THRESHOLD: f64 = 0.2;

#[component]
pub fn SkillsPanel() -> impl IntoView {
    let (active_category, set_active_category) = signal(None::<SkillCategory>);

    let filter_buttons = std::iter::once(None)
        .chain(SkillCategory::ALL.into_iter().map(Some))
        .map(|filter| {
            let label = filter.map_or("All", |cat| cat.label());
            let icon = filter.map_or("🚀", |cat| cat.icon());
            let count = category_count(filter);
            view! {
                <button
                    on:click=move |_| set_active_category.set(filter)
                    class=move || {
                        if active_category.get() == filter {
                            "category-btn active"
                        } else {
                            "category-btn"
                        }
                    }
                >
                    <span>{icon}</span>
                    <span>{label}</span>
                    <span class="category-count">{count}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="skills-container">
            <div class="category-filter">{filter_buttons}</div>

            <div class="skills-grid">
                // Keyed by (name, filter) so card identity, and with it the
                // reveal state, resets whenever the filter changes.
                <For
                    each=move || {
                        let filter = active_category.get();
                        filtered_skills(filter)
                            .into_iter()
                            .enumerate()
                            .map(move |(index, skill)| (index, filter, skill))
                            .collect::<Vec<_>>()
                    }
                    key=|(_, filter, skill)| (skill.name, *filter)
                    children=move |(index, _, skill)| {
                        view! { <SkillCard skill index /> }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn SkillCard(skill: &'static Skill, index: usize) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(false);

    // Latch once the card has intersected the viewport by the threshold.
    let _ = use_intersection_observer_with_options(
        card_ref,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_visible.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    view! {
        <div
            node_ref=card_ref
            class=move || {
                if visible.get() { "skill-card visible" } else { "skill-card" }
            }
            style=("--level", format!("{}%", skill.level))
            style:animation-delay=format!("{}s", index as f64 * 0.1)
        >
            <div class="skill-icon-wrapper">
                <img src=skill.icon alt=skill.name class="skill-icon" />
            </div>

            <div class="skill-info">
                <h3 class="skill-name">{skill.name}</h3>
                <div class="skill-level-badge">{skill.level}"%"</div>
                <p class="skill-description">{skill.description}</p>

                <div class="skill-level-bar">
                    <div class="skill-level-fill"></div>
                </div>
            </div>
        </div>
    }
}
