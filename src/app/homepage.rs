use leptos::prelude::*;
use leptos_meta::Title;

use super::skills::SkillsPanel;
use super::slider::ProjectSlider;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Fullstack Developer" />

        <section id="hero" class="section hero-section">
            <div class="hero-content">
                <div class="hero-badge">
                    <span class="hero-badge-icon">"🚀"</span>
                    <span>"Fullstack Developer"</span>
                </div>

                <h1 class="hero-title">"Hello, I'm " <span class="tech-name">"Yusuf"</span></h1>

                <p class="hero-subtitle">
                    "A graduate of " <strong>"Karabük University"</strong>
                    " in Computer Programming, passionate about building modern and user-friendly digital experiences. I love creating clean, scalable, and innovative web solutions that not only solve real-world problems but also make life easier. My biggest motivation is contributing to technology that shapes the future."
                </p>

                <div class="hero-stats">
                    <div class="stat">
                        <span class="stat-number">"15+"</span>
                        <span class="stat-label">"Technologies"</span>
                    </div>
                    <div class="stat">
                        <span class="stat-number">"10+"</span>
                        <span class="stat-label">"Projects"</span>
                    </div>
                    <div class="stat">
                        <span class="stat-number">"2+"</span>
                        <span class="stat-label">"Years Experience"</span>
                    </div>
                </div>

                <div class="hero-actions">
                    <a class="btn-primary" href="#projects">
                        <span class="btn-icon">"🚀"</span>
                        "Explore My Work"
                    </a>
                </div>

                <SocialLinks extra_class="hero-social" />
            </div>

            <div class="hero-image">
                <div class="profile-container">
                    <div class="profile-glow"></div>
                    <img
                        src="/images/profile.jpg"
                        alt="Yusuf - Fullstack Developer"
                        class="profile-img"
                    />
                    <div class="profile-ring"></div>
                </div>
            </div>
        </section>

        <section id="skills" class="section skills-section">
            <SectionHeader
                title="Tech Stack"
                subtitle="The tools and technologies I work with"
            />
            <SkillsPanel />
        </section>

        <section id="projects" class="section projects-section">
            <SectionHeader
                title="Projects"
                subtitle="A showcase of some of my recent work"
            />
            <ProjectSlider />
        </section>

        <section id="contact" class="section contact-section">
            <SectionHeader
                title="Get In Touch"
                subtitle="Interested in working together? Let's connect!"
            />
            <div class="contact-card">
                <p class="contact-lead">
                    "Whether you have a project in mind or just want to say hi, my inbox is always open."
                </p>
                <a class="btn-primary" href="mailto:yusufkapukara@gmail.com">
                    "✉️ yusufkapukara@gmail.com"
                </a>
                <SocialLinks extra_class="contact-social" />
            </div>
        </section>
    }
}

#[component]
fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title">{title}</h2>
            <p class="section-subtitle">{subtitle}</p>
        </div>
    }
}

#[component]
fn SocialLinks(#[prop(optional)] extra_class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("social-links {extra_class}")>
            <a
                href="https://github.com/yusuf56620"
                target="_blank"
                rel="noopener noreferrer"
                aria-label="GitHub"
                class="social-link github"
            >
                <i class="devicon-github-original"></i>
            </a>
            <a
                href="https://www.linkedin.com/in/yusuf-kapukara-aa17ab363"
                target="_blank"
                rel="noopener noreferrer"
                aria-label="LinkedIn"
                class="social-link linkedin"
            >
                <i class="devicon-linkedin-plain"></i>
            </a>
            <a
                href="https://instagram.com/ysufkp._"
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Instagram"
                class="social-link instagram"
            >
                "📸"
            </a>
            <a
                href="mailto:yusufkapukara@gmail.com"
                aria-label="Email"
                class="social-link email"
            >
                "✉️"
            </a>
        </div>
    }
}
