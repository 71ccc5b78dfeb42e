use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Fixed set of skill categories shown in the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Tools,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::Tools => "Tools",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "🎨",
            SkillCategory::Backend => "⚙️",
            SkillCategory::Database => "🗄️",
            SkillCategory::Tools => "🛠️",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub category: SkillCategory,
    /// Proficiency, 0-100.
    pub level: u8,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn color(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "#10b981",
            ProjectStatus::InProgress => "#f59e0b",
            ProjectStatus::Planned => "#6b7280",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planned => "Planned",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseStatusError(String);

impl FromStr for ProjectStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(ProjectStatus::Completed),
            "in-progress" => Ok(ProjectStatus::InProgress),
            "planned" => Ok(ProjectStatus::Planned),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProjectStats {
    pub stars: u32,
    pub views: u32,
    pub commits: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub tech: &'static [&'static str],
    pub description: &'static str,
    pub long_description: &'static str,
    pub image: &'static str,
    pub link: Option<&'static str>,
    pub status: ProjectStatus,
    pub featured: bool,
    pub stats: ProjectStats,
}

/// Page sections, in nav-priority order. The first section whose bounding
/// box spans the scroll probe line wins the active highlight.
pub const SECTION_IDS: [&str; 4] = ["hero", "skills", "projects", "contact"];

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "JavaScript",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/javascript/javascript-original.svg",
        category: SkillCategory::Frontend,
        level: 80,
        description: "ES6+, DOM manipulation, Async programming",
    },
    Skill {
        name: "TypeScript",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/typescript/typescript-original.svg",
        category: SkillCategory::Frontend,
        level: 50,
        description: "Type safety, interfaces, generics",
    },
    Skill {
        name: "Node.js",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-original.svg",
        category: SkillCategory::Backend,
        level: 50,
        description: "Server-side JavaScript, API development",
    },
    Skill {
        name: "ASP.NET",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/dot-net/dot-net-original.svg",
        category: SkillCategory::Backend,
        level: 75,
        description: "Web API, MVC pattern, Entity Framework",
    },
    Skill {
        name: "C#",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/csharp/csharp-original.svg",
        category: SkillCategory::Backend,
        level: 85,
        description: "OOP, LINQ, Async/Await patterns",
    },
    Skill {
        name: "Python",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg",
        category: SkillCategory::Backend,
        level: 70,
        description: "Web development, scripting, data analysis",
    },
    Skill {
        name: "PHP",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/php/php-original.svg",
        category: SkillCategory::Backend,
        level: 80,
        description: "Laravel, server-side scripting",
    },
    Skill {
        name: "MySQL",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mysql/mysql-original.svg",
        category: SkillCategory::Database,
        level: 75,
        description: "Database design, optimization, queries",
    },
    Skill {
        name: "SQL Server",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/microsoftsqlserver/microsoftsqlserver-plain.svg",
        category: SkillCategory::Database,
        level: 75,
        description: "T-SQL, stored procedures, indexing",
    },
    Skill {
        name: "MongoDB",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mongodb/mongodb-original.svg",
        category: SkillCategory::Database,
        level: 50,
        description: "NoSQL, aggregation, document modeling",
    },
    Skill {
        name: "Linux",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/linux/linux-original.svg",
        category: SkillCategory::Tools,
        level: 50,
        description: "Command line, server administration",
    },
    Skill {
        name: "Unity",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/unity/unity-original.svg",
        category: SkillCategory::Tools,
        level: 70,
        description: "Game development, C# scripting",
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: "cineflow",
        name: "CINEFLOW",
        tech: &["PHP", "MySQL", "JavaScript", "WebSocket"],
        description: "An interactive platform that lets you watch movies in sync with your friends.",
        long_description: "CineFlow takes the experience of watching movies with friends to the \
            next level with real-time chat, synchronized video playback, and user rooms.",
        image: "/images/projects/cineflow.png",
        link: None,
        status: ProjectStatus::Completed,
        featured: true,
        stats: ProjectStats {
            stars: 45,
            views: 1200,
            commits: 128,
        },
    },
    Project {
        id: "weather",
        name: "WeatherApp Advanced",
        tech: &["React", "TypeScript", "OpenWeather API", "PWA"],
        description: "A user-friendly weather app delivering real-time weather data.",
        long_description: "A progressive web app featuring 7-day forecasts, real-time alerts, \
            location-based suggestions, and offline capabilities.",
        image: "/images/projects/weather.png",
        link: None,
        status: ProjectStatus::Completed,
        featured: false,
        stats: ProjectStats {
            stars: 23,
            views: 567,
            commits: 93,
        },
    },
    Project {
        id: "devfolio",
        name: "DevFolio",
        tech: &["Rust", "Leptos", "Tailwind CSS", "WASM"],
        description: "This portfolio site, rendered server-side and hydrated in the browser.",
        long_description: "A single-page portfolio built with Leptos and compiled to WebAssembly, \
            featuring an auto-advancing project carousel, filterable skill grid, and \
            pointer-reactive ambient lighting.",
        image: "/images/projects/devfolio.png",
        link: Some("https://github.com/yusuf56620/devfolio"),
        status: ProjectStatus::InProgress,
        featured: false,
        stats: ProjectStats {
            stars: 12,
            views: 340,
            commits: 57,
        },
    },
    Project {
        id: "ai-assistant",
        name: "AI Code Assistant",
        tech: &["Python", "FastAPI", "OpenAI API", "React"],
        description: "An AI-powered assistant for developers to write and debug code.",
        long_description: "Using machine learning and natural language processing, this assistant \
            suggests code, helps debug, and improves overall code quality.",
        image: "/images/projects/ai-assistant.png",
        link: None,
        status: ProjectStatus::Planned,
        featured: true,
        stats: ProjectStats {
            stars: 0,
            views: 0,
            commits: 0,
        },
    },
];

/// Records matching the active filter, in declaration order. `None` is "all".
pub fn filtered_skills(filter: Option<SkillCategory>) -> Vec<&'static Skill> {
    SKILLS
        .iter()
        .filter(|s| filter.map_or(true, |cat| s.category == cat))
        .collect()
}

/// Count shown on a filter button. Matches `filtered_skills(filter).len()`.
pub fn category_count(filter: Option<SkillCategory>) -> usize {
    match filter {
        None => SKILLS.len(),
        Some(cat) => SKILLS.iter().filter(|s| s.category == cat).count(),
    }
}

/// Next carousel index, wrapping from the last slide back to 0.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 || current + 1 >= len {
        0
    } else {
        current + 1
    }
}

/// Previous carousel index, wrapping from 0 to the last slide.
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_counts_sum_to_total() {
        let per_category: usize = SkillCategory::ALL
            .iter()
            .map(|&c| category_count(Some(c)))
            .sum();
        assert_eq!(per_category, category_count(None));
        assert_eq!(category_count(None), SKILLS.len());
    }

    #[test]
    fn counts_match_filtered_lengths() {
        for filter in std::iter::once(None).chain(SkillCategory::ALL.into_iter().map(Some)) {
            assert_eq!(category_count(filter), filtered_skills(filter).len());
        }
    }

    #[test]
    fn backend_filter_shows_only_backend() {
        let backend = filtered_skills(Some(SkillCategory::Backend));
        assert!(!backend.is_empty());
        assert!(backend
            .iter()
            .all(|s| s.category == SkillCategory::Backend));
        // Known fixed data: five backend records.
        assert_eq!(backend.len(), 5);
    }

    #[test]
    fn all_filter_preserves_declaration_order() {
        let all = filtered_skills(None);
        let names: Vec<_> = all.iter().map(|s| s.name).collect();
        let expected: Vec<_> = SKILLS.iter().map(|s| s.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn next_wraps_from_last_to_zero() {
        let len = PROJECTS.len();
        assert_eq!(next_index(len - 1, len), 0);
        assert_eq!(next_index(0, len), 1);
    }

    #[test]
    fn prev_wraps_from_zero_to_last() {
        let len = PROJECTS.len();
        assert_eq!(prev_index(0, len), len - 1);
        assert_eq!(prev_index(3, len), 2);
    }

    #[test]
    fn prev_from_zero_of_four_is_three() {
        assert_eq!(prev_index(0, 4), 3);
    }

    #[test]
    fn index_stays_in_bounds_over_many_steps() {
        let len = PROJECTS.len();
        let mut i = 0;
        for step in 0..100 {
            i = if step % 3 == 0 {
                prev_index(i, len)
            } else {
                next_index(i, len)
            };
            assert!(i < len);
        }
    }

    #[test]
    fn empty_list_indexes_stay_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn status_colors_and_labels() {
        assert_eq!(ProjectStatus::Completed.color(), "#10b981");
        assert_eq!(ProjectStatus::Completed.label(), "Completed");
        assert_eq!(ProjectStatus::InProgress.color(), "#f59e0b");
        assert_eq!(ProjectStatus::InProgress.label(), "In Progress");
        assert_eq!(ProjectStatus::Planned.color(), "#6b7280");
        assert_eq!(ProjectStatus::Planned.label(), "Planned");
    }

    #[test]
    fn status_display_matches_label() {
        for status in [
            ProjectStatus::Completed,
            ProjectStatus::InProgress,
            ProjectStatus::Planned,
        ] {
            assert_eq!(status.to_string(), status.label());
        }
    }

    #[test]
    fn status_parses_known_values() {
        assert_eq!("completed".parse(), Ok(ProjectStatus::Completed));
        assert_eq!("in-progress".parse(), Ok(ProjectStatus::InProgress));
        assert_eq!("planned".parse(), Ok(ProjectStatus::Planned));
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert!("shipped".parse::<ProjectStatus>().is_err());
        assert!("".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn project_ids_are_unique() {
        let mut ids: Vec<_> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }
}
