use yew::prelude::*;

use crate::components::faq::Faq;
use crate::components::lift_card::LiftCard;
use crate::components::loading_screen::LoadingScreen;
use crate::components::navbar::Navbar;
use crate::effects::init_page_interactions;
use crate::utils::dom::smooth_scroll_onclick;

const THEMES: &[(&str, &str, &str)] = &[
    (
        "🤖",
        "AI & Machine Learning",
        "Teach machines to see, reason, and create. Build with models, not just around them.",
    ),
    (
        "🌐",
        "Web3 & Blockchain",
        "Decentralize something that deserves it. Smart contracts, DAOs, trustless apps.",
    ),
    (
        "🏥",
        "HealthTech",
        "Ship tools that make care faster, cheaper, or kinder. Real problems, real impact.",
    ),
    (
        "🌱",
        "Sustainability",
        "Hack for the planet. Energy, waste, climate data — measure it, then move it.",
    ),
    (
        "🔓",
        "Open Innovation",
        "None of the above fit? Good. Surprise us with the thing only your team would build.",
    ),
];

const PRIZES: &[(&str, &str, &str)] = &[
    ("🥇", "First Prize", "₹25,000"),
    ("🥈", "Second Prize", "₹15,000"),
    ("🥉", "Third Prize", "₹10,000"),
    ("⭐", "Best Freshman Team", "₹5,000"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_interactive = Callback::from(|_| init_page_interactions());

    html! {
        <div class="landing-page">
            <LoadingScreen {on_interactive} />
            <div id="mainContent" class="main-content">
                <Navbar />

                <header class="hero" id="home">
                    <div class="hero-bg"></div>
                    <div class="hero-content">
                        <h1>{"HACK HUB"}</h1>
                        <p class="hero-subtitle">{"24 Hours. One Mission. Build the Future."}</p>
                        <p class="hero-organizer">
                            {"Organized by the Department of Computer Science & Engineering"}
                        </p>
                        <p class="hero-tagline">{"< Code. Create. Conquer. />"}</p>
                        <div class="hero-details">
                            <div class="hero-detail">{"📅 March 14–15"}</div>
                            <div class="hero-detail">{"⏱ 24 Hours Non-Stop"}</div>
                            <div class="hero-detail">{"👥 500+ Hackers"}</div>
                            <div class="hero-detail">{"💰 ₹55,000 Prize Pool"}</div>
                        </div>
                        <div class="cta-buttons">
                            <a
                                href="#register"
                                class="btn btn-primary"
                                onclick={smooth_scroll_onclick()}
                            >
                                {"Register Now"}
                            </a>
                            <a
                                href="#about"
                                class="btn btn-secondary"
                                onclick={smooth_scroll_onclick()}
                            >
                                {"Explore"}
                            </a>
                        </div>
                    </div>
                </header>

                <section id="about" class="about-section">
                    <h2 class="section-title fade-in">{"What is HACK HUB?"}</h2>
                    <div class="about-grid">
                        <div class="about-text slide-in-left">
                            <p>
                                {"HACK HUB is a 24-hour build sprint where 500+ hackers turn \
                                  caffeine and half-formed ideas into working software. No \
                                  lectures, no gatekeeping — just you, your team, and a \
                                  deadline that does not move."}
                            </p>
                            <p>
                                {"Mentors from industry roam the floor all night, workshops \
                                  run on the side track, and the best demos go head-to-head \
                                  on the main stage at hour 24."}
                            </p>
                        </div>
                        <div class="about-stats slide-in-right">
                            <div class="stat">
                                <span class="stat-value">{"500+"}</span>
                                <span class="stat-label">{"Hackers"}</span>
                            </div>
                            <div class="stat">
                                <span class="stat-value">{"24h"}</span>
                                <span class="stat-label">{"Of Building"}</span>
                            </div>
                            <div class="stat">
                                <span class="stat-value">{"5"}</span>
                                <span class="stat-label">{"Tracks"}</span>
                            </div>
                            <div class="stat">
                                <span class="stat-value">{"₹55K"}</span>
                                <span class="stat-label">{"In Prizes"}</span>
                            </div>
                        </div>
                    </div>
                </section>

                <section id="themes" class="themes-section">
                    <h2 class="section-title fade-in">{"Tracks"}</h2>
                    <div class="themes-grid">
                        { for THEMES.iter().map(|&(icon, title, blurb)| html! {
                            <LiftCard key={title} class={classes!("theme-card", "scale-in")}>
                                <span class="theme-icon">{icon}</span>
                                <h3>{title}</h3>
                                <p>{blurb}</p>
                            </LiftCard>
                        }) }
                    </div>
                </section>

                <section id="prizes" class="prizes-section">
                    <h2 class="section-title fade-in">{"Prizes"}</h2>
                    <div class="typewriter-container fade-in">
                        <span id="typewriter-text"></span>
                    </div>
                    <div class="prizes-grid">
                        { for PRIZES.iter().map(|&(icon, title, amount)| html! {
                            <LiftCard key={title} class={classes!("prize-card", "scale-in")}>
                                <span class="prize-icon">{icon}</span>
                                <h3>{title}</h3>
                                <span class="prize-amount">{amount}</span>
                            </LiftCard>
                        }) }
                    </div>
                </section>

                <section id="faq" class="faq-section">
                    <h2 class="section-title fade-in">{"Frequently Asked Questions"}</h2>
                    <Faq />
                </section>

                <section id="sponsors" class="sponsors-section">
                    <h2 class="section-title fade-in">{"Sponsors"}</h2>
                    <div class="sponsors-tier fade-in">
                        <h3>{"Platinum"}</h3>
                        <div class="sponsor-logos">
                            <div class="sponsor-logo">{"NeoGrid Systems"}</div>
                            <div class="sponsor-logo">{"ByteForge Labs"}</div>
                        </div>
                    </div>
                    <div class="sponsors-tier fade-in">
                        <h3>{"Gold"}</h3>
                        <div class="sponsor-logos">
                            <div class="sponsor-logo">{"Cloudloom"}</div>
                            <div class="sponsor-logo">{"Stackline"}</div>
                            <div class="sponsor-logo">{"Quanta Devtools"}</div>
                        </div>
                    </div>
                </section>

                <footer id="register" class="footer">
                    <div class="footer-content">
                        <h2>{"Ready to build?"}</h2>
                        <p>{"Registrations close when the seats run out. They will run out."}</p>
                        <a href="#home" class="btn btn-primary" onclick={smooth_scroll_onclick()}>
                            {"Register Your Team"}
                        </a>
                        <p class="footer-note">{"HACK HUB · root@hackhub:~$"}</p>
                    </div>
                </footer>
            </div>
        </div>
    }
}
