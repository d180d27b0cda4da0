use crate::age::age_on;
use crate::animator::BackgroundAnimator;
use crate::carousel::{Autoplay, CarouselAction, CarouselState};
use crate::clock::WallClock;
use crate::config::SiteRuntimeConfig;
use crate::content::{ContactLink, NavLink, ProjectEntry, SiteContent};
use crate::logging::{self, log_event};
use crate::navbar::NavbarVisibility;
use crate::navigation::LinkTarget;
use crate::web::{
    hero_bottom, on_window_scroll, prefers_reduced_motion, today, AnimationFrames, CanvasSurface,
    IntervalTimers, WindowViewport,
};
use log::Level;
use serde_json::json;
use std::rc::Rc;
use std::time::Duration;
use web_sys::{window, HtmlCanvasElement};
use yew::prelude::*;

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

impl Reducible for NavbarVisibility {
    type Action = Option<f64>;

    fn reduce(self: Rc<Self>, hero_bottom: Self::Action) -> Rc<Self> {
        let mut next = *self;
        if next.observe(hero_bottom) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[function_component(AnimatedBackground)]
fn animated_background() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            let surface = canvas_ref.cast::<HtmlCanvasElement>().map(CanvasSurface::new);
            let animator = match surface {
                Some(Ok(surface)) => {
                    let animator = BackgroundAnimator::new(
                        surface,
                        AnimationFrames,
                        WindowViewport,
                        WallClock,
                    );
                    animator.start();
                    Some(animator)
                }
                Some(Err(error)) => {
                    log_event(
                        Level::Warn,
                        "background_unavailable",
                        json!({ "error": error.to_string() }),
                    );
                    None
                }
                None => {
                    log_event(
                        Level::Warn,
                        "background_unavailable",
                        json!({ "error": "canvas not mounted" }),
                    );
                    None
                }
            };

            move || drop(animator)
        });
    }

    html! {
        <canvas ref={canvas_ref} class="background-canvas" aria-hidden="true" />
    }
}

#[derive(Properties, PartialEq)]
struct NavbarProps {
    brand: AttrValue,
    links: Vec<NavLink>,
}

#[function_component(Navbar)]
fn navbar(props: &NavbarProps) -> Html {
    let visibility = use_reducer(NavbarVisibility::default);

    {
        let dispatcher = visibility.dispatcher();
        use_effect_with((), move |_| {
            let listener = on_window_scroll(move || dispatcher.dispatch(hero_bottom()));
            move || drop(listener)
        });
    }

    html! {
        <nav class={visibility.class()} aria-label="Primary" aria-hidden={(!visibility.is_visible()).to_string()}>
            <div class="navbar-inner">
                <div class="navbar-brand">{props.brand.clone()}</div>
                <div class="navbar-links">
                    { for props.links.iter().map(|link| html! {
                        <a href={link.href.clone()} class="navbar-link">
                            <span class="navbar-icon" aria-hidden="true">{link.icon.clone()}</span>
                            {link.label.clone()}
                        </a>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct HeroAboutProps {
    content: Rc<SiteContent>,
}

#[function_component(HeroAbout)]
fn hero_about(props: &HeroAboutProps) -> Html {
    let profile = &props.content.profile;
    let age_line = match profile.birth_date {
        Some(birth) => format!("I am {} years old {}", age_on(birth, today()), profile.about),
        None => format!("I am someone {}", profile.about),
    };

    html! {
        <section id="hero" class="hero">
            <div id="home" class="glass-card hero-card">
                <h1>{format!("Hi, I'm {}", profile.name)}</h1>
                <p class="hero-tagline">{profile.tagline.clone()}</p>
            </div>
            <div class="glass-card about-card">
                if let Some(avatar) = profile.avatar.clone() {
                    <img class="about-avatar" src={avatar} alt={profile.name.clone()} />
                }
                <div class="about-copy">
                    <h2>{"About Me"}</h2>
                    <p>{age_line}</p>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CarouselItemProps {
    project: ProjectEntry,
}

#[function_component(CarouselItem)]
fn carousel_item(props: &CarouselItemProps) -> Html {
    let project = &props.project;
    let (target, rel) = LinkTarget::classify(&project.link).anchor_attributes();
    let (media_class, media_style) = match project.image.as_deref() {
        Some(image) => ("carousel-media", Some(format!("background-image: url({image});"))),
        None => ("carousel-media is-fallback", None),
    };

    html! {
        <a class="carousel-item" href={project.link.clone()} target={target} rel={rel}>
            <div class={media_class} style={media_style}>
                <div class="carousel-caption">
                    <h3>{project.title.clone()}</h3>
                    <p>{project.description.clone()}</p>
                </div>
                <div class="carousel-cta" aria-hidden="true">
                    <span>{"View Project"}</span>
                </div>
            </div>
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectsCarouselProps {
    projects: Vec<ProjectEntry>,
    autoplay_interval: Duration,
    slide_transition: Duration,
}

#[function_component(ProjectsCarousel)]
fn projects_carousel(props: &ProjectsCarouselProps) -> Html {
    let len = props.projects.len();
    let state = use_reducer(move || CarouselState::new(len));

    {
        let dispatcher = state.dispatcher();
        use_effect_with((len, props.autoplay_interval), move |(len, interval)| {
            let mut autoplay = Autoplay::new(IntervalTimers, *interval);
            if *len > 0 {
                autoplay.attach(move || dispatcher.dispatch(CarouselAction::Tick));
                log_event(
                    Level::Info,
                    "carousel_mounted",
                    json!({
                        "projects": *len,
                        "autoplay_period_ms": autoplay.period().as_millis() as u64,
                    }),
                );
            }
            move || drop(autoplay)
        });
    }

    // An empty project list renders nothing.
    let Some(segment_width) = state.segment_width_percent() else {
        return html! {};
    };
    let total = state.len();

    let transition_ms = if prefers_reduced_motion() {
        0
    } else {
        props.slide_transition.as_millis()
    };
    let track_style = format!(
        "transform: translateX({:.0}%); transition-duration: {transition_ms}ms;",
        state.track_offset_percent()
    );

    html! {
        <div class="carousel">
            <div class="carousel-viewport">
                <div class="carousel-track" style={track_style}>
                    { for props.projects.iter().map(|project| html! {
                        <CarouselItem project={project.clone()} />
                    }) }
                </div>
            </div>
            <div class="carousel-indicator">
                <div class="carousel-segments">
                    { for props.projects.iter().enumerate().map(|(index, project)| {
                        let onclick = {
                            let state = state.clone();
                            Callback::from(move |_| state.dispatch(CarouselAction::Select(index)))
                        };
                        let onmouseenter = {
                            let state = state.clone();
                            Callback::from(move |_| state.dispatch(CarouselAction::HoverEnter(index)))
                        };
                        let onmouseleave = {
                            let state = state.clone();
                            Callback::from(move |_| state.dispatch(CarouselAction::HoverLeave))
                        };
                        let appearance = state.segment_appearance(index);

                        html! {
                            <button
                                type="button"
                                class={classes!("carousel-segment", appearance.class())}
                                style={format!("width: {segment_width:.4}%;")}
                                aria-label={format!("Show project {} of {total}: {}", index + 1, project.title)}
                                aria-current={(index == state.current_index()).then_some("true")}
                                onclick={onclick}
                                onmouseenter={onmouseenter}
                                onmouseleave={onmouseleave}
                            />
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}

fn contact_line(link: &ContactLink) -> Html {
    let body = match link.href.as_deref() {
        Some(href) => {
            let (target, rel) = LinkTarget::classify(href).anchor_attributes();
            html! { <a class="link" href={href.to_string()} target={target} rel={rel}>{link.text.clone()}</a> }
        }
        None => html! { <span>{link.text.clone()}</span> },
    };

    html! {
        <p class="contact-line">
            <span class="contact-icon" aria-hidden="true">{link.icon.clone()}</span>
            <span class="muted">{format!("{}: ", link.label)}</span>
            {body}
        </p>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Rc<SiteContent>,
    config: SiteRuntimeConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let content = &props.content;

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <AnimatedBackground />
            <Navbar brand={content.profile.name.clone()} links={content.nav.clone()} />
            <main id="content">
                <HeroAbout content={Rc::clone(content)} />

                <section id="projects" class="section-block" aria-labelledby="projects-heading">
                    <h2 id="projects-heading">{"Projects"}</h2>
                    <ProjectsCarousel
                        projects={content.projects.clone()}
                        autoplay_interval={props.config.autoplay_interval}
                        slide_transition={props.config.slide_transition}
                    />
                </section>

                <section id="experience" class="section-block" aria-labelledby="experience-heading">
                    <h2 id="experience-heading">{"Experience"}</h2>
                    <div class="stack">
                        { for content.experience.iter().map(|entry| html! {
                            <div class="glass-card">
                                <h3>{entry.title.clone()}</h3>
                                <p class="muted">{entry.description.clone()}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="skills" class="section-block" aria-labelledby="skills-heading">
                    <h2 id="skills-heading">{"Skills"}</h2>
                    <div class="glass-card">
                        <p class="skills-title">{"Technical Skills:"}</p>
                        <ul class="skills-list">
                            { for content.skills.iter().map(|line| html! {
                                <li>
                                    <span class="muted">{format!("{}: ", line.label)}</span>
                                    {line.items.join(", ")}
                                </li>
                            }) }
                        </ul>
                    </div>
                </section>
            </main>

            <footer id="contact" class="contact">
                <div class="glass-card contact-card">
                    <h2>{content.contact.heading.clone()}</h2>
                    <p>{content.contact.blurb.clone()}</p>
                    { for content.contact.links.iter().map(contact_line) }
                </div>
            </footer>
        </>
    }
}

pub fn run() {
    let config = SiteRuntimeConfig::from_build_env();
    logging::init(config.log_level);

    let content = SiteContent::embedded().unwrap_or_else(|error| {
        log_event(
            Level::Error,
            "content_invalid",
            json!({ "error": error.to_string() }),
        );
        SiteContent::default()
    });
    log_event(
        Level::Info,
        "site_mounting",
        json!({
            "projects": content.projects.len(),
            "autoplay_interval_ms": config.autoplay_interval.as_millis() as u64,
        }),
    );

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps {
            content: Rc::new(content),
            config,
        },
    )
    .render();
}
