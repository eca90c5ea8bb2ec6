use yew::prelude::*;
use chrono::Datelike;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, SubmitEvent, Window};

use crate::components::{
    experience_item::ExperienceItem,
    floating_blobs::FloatingBlobs,
    icons::{Glyph, Icon},
    service_card::ServiceCard,
    testimonial_card::TestimonialCard,
};
use crate::config;
use crate::content::{newest_first, EDUCATION, EXPERIENCE, HIGHLIGHTS, SERVICES, SOCIAL_LINKS, TESTIMONIALS};
use crate::nav::{is_scrolled, menu_after, MenuEvent, MobileMenu, Nav};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1544717305-2782549b5136?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

fn scroll_offset(window: &Window) -> Option<f64> {
    match window.scroll_y() {
        Ok(offset) => Some(offset),
        Err(err) => {
            warn!("Could not read scroll offset: {:?}", err);
            None
        }
    }
}

/// The page shell. Owns the only mutable state on the site: whether the
/// window has scrolled past the nav threshold and whether the mobile menu
/// is open.
#[function_component(Home)]
pub fn home() -> Html {
    let scrolled = use_state_eq(|| false);
    let mobile_menu_open = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = match web_sys::window() {
                    Some(window) => {
                        let callback = Closure::<dyn Fn()>::new({
                            let window = window.clone();
                            let scrolled = scrolled.clone();
                            move || {
                                if let Some(offset) = scroll_offset(&window) {
                                    scrolled.set(is_scrolled(offset));
                                }
                            }
                        });
                        match window.add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            Ok(()) => {
                                // Page may be restored mid-scroll
                                if let Some(offset) = scroll_offset(&window) {
                                    scrolled.set(is_scrolled(offset));
                                }
                                Some((window, callback))
                            }
                            Err(err) => {
                                warn!("Could not register scroll listener: {:?}", err);
                                None
                            }
                        }
                    }
                    None => {
                        warn!("No window available, nav stays transparent");
                        None
                    }
                };

                move || {
                    if let Some((window, callback)) = listener {
                        if let Err(err) = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("Could not remove scroll listener: {:?}", err);
                        }
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            let next = menu_after(*mobile_menu_open, MenuEvent::TogglePressed);
            debug!("Mobile menu open: {}", next);
            mobile_menu_open.set(next);
        })
    };

    let close_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |()| {
            mobile_menu_open.set(menu_after(*mobile_menu_open, MenuEvent::LinkFollowed));
        })
    };

    html! {
        <div class="site">
            <Nav scrolled={*scrolled} menu_open={*mobile_menu_open} on_toggle={toggle_menu} />
            {
                if *mobile_menu_open {
                    html! { <MobileMenu on_close={close_menu} /> }
                } else {
                    html! {}
                }
            }
            { hero() }
            { about() }
            { services() }
            { experience() }
            { testimonials() }
            <Contact />
            { footer() }
            <style>
                {r#"
                .site {
                    min-height: 100vh;
                    background: var(--slate-50);
                    color: var(--slate-600);
                    overflow-x: hidden;
                }
                .site ::selection {
                    background: var(--teal-100);
                    color: var(--teal-900);
                }
                .container {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .section {
                    padding: 6rem 0;
                }
                .section-title {
                    font-family: var(--font-serif);
                    font-size: 2.25rem;
                    font-weight: 400;
                    color: var(--slate-900);
                    margin: 0 0 1rem;
                }
                .grid-3 {
                    display: grid;
                    gap: 2rem;
                }
                @media (min-width: 768px) {
                    .grid-3 { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </div>
    }
}

fn hero() -> Html {
    html! {
        <section class="hero">
            <FloatingBlobs />
            <div class="container hero-grid">
                <div class="hero-copy">
                    <div class="hero-badge">{"Servicios de Educación Especial"}</div>
                    <h1>
                        {"Empoderando a cada niño para "}
                        <span class="hero-highlight">{"Aprender y Crecer"}</span>
                    </h1>
                    <p class="hero-lead">
                        {"Apoyo educativo profesional, compasivo e individualizado, diseñado para descubrir fortalezas únicas y fomentar la confianza."}
                    </p>
                    <div class="hero-actions">
                        <a href="#contact" class="button-primary">{"Agendar una Consulta"}</a>
                        <a href="#about" class="button-secondary">{"Conocer Más"}</a>
                    </div>
                </div>
                <div class="hero-photo-wrap">
                    <div class="hero-photo">
                        <div class="hero-photo-placeholder">{"Retrato de Ariadna"}</div>
                        <img
                            src={HERO_IMAGE}
                            alt="Ariadna Miroslava García Carabez trabajando con un estudiante"
                            loading="lazy"
                        />
                    </div>
                    <div class="hero-glow hero-glow-brand"></div>
                    <div class="hero-glow hero-glow-teal"></div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding-top: 5rem;
                    overflow: hidden;
                }
                .hero-grid {
                    position: relative;
                    z-index: 10;
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-copy {
                    max-width: 36rem;
                    animation: hero-slide-in 0.8s ease-out both;
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.375rem 1rem;
                    background: var(--teal-50);
                    border: 1px solid var(--teal-100);
                    color: var(--teal-700);
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 600;
                    letter-spacing: 0.025em;
                    margin-bottom: 1.5rem;
                }
                .hero h1 {
                    font-family: var(--font-serif);
                    font-size: 3rem;
                    font-weight: 400;
                    line-height: 1.1;
                    color: var(--slate-900);
                    margin: 0 0 1.5rem;
                }
                .hero-highlight {
                    background: linear-gradient(to right, var(--teal-500), var(--brand-500));
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-lead {
                    font-size: 1.125rem;
                    line-height: 1.625;
                    margin: 0 0 2rem;
                }
                .hero-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .button-primary, .button-secondary {
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    text-align: center;
                    text-decoration: none;
                    transition: all 0.2s ease;
                }
                .button-primary {
                    background: var(--teal-600);
                    color: #ffffff;
                    box-shadow: 0 10px 15px -3px rgba(20, 184, 166, 0.3);
                }
                .button-primary:hover {
                    background: var(--teal-700);
                }
                .button-secondary {
                    background: #ffffff;
                    border: 1px solid var(--slate-200);
                    color: var(--slate-700);
                }
                .button-secondary:hover {
                    border-color: var(--teal-200);
                    background: var(--teal-50);
                }
                .hero-photo-wrap {
                    position: relative;
                    animation: hero-zoom-in 0.8s ease-out 0.2s both;
                }
                .hero-photo {
                    position: relative;
                    z-index: 10;
                    aspect-ratio: 4 / 5;
                    border-radius: 2rem;
                    overflow: hidden;
                    border: 8px solid #ffffff;
                    box-shadow: 0 25px 50px -12px rgba(15, 23, 42, 0.25);
                }
                .hero-photo-placeholder {
                    position: absolute;
                    inset: 0;
                    background: var(--slate-200);
                    color: var(--slate-400);
                    font-weight: 500;
                    font-size: 1.125rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .hero-photo img {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.9;
                    transition: opacity 0.5s ease;
                }
                .hero-photo img:hover {
                    opacity: 1;
                }
                .hero-glow {
                    position: absolute;
                    width: 16rem;
                    height: 16rem;
                    border-radius: 9999px;
                    filter: blur(64px);
                    opacity: 0.6;
                    z-index: -1;
                }
                .hero-glow-brand {
                    bottom: -2.5rem;
                    right: -2.5rem;
                    background: var(--brand-100);
                }
                .hero-glow-teal {
                    top: -2.5rem;
                    left: -2.5rem;
                    background: var(--teal-100);
                }
                @keyframes hero-slide-in {
                    from { opacity: 0; transform: translateX(-50px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes hero-zoom-in {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }
                @media (min-width: 640px) {
                    .hero-actions { flex-direction: row; }
                }
                @media (min-width: 768px) {
                    .hero-grid { grid-template-columns: repeat(2, 1fr); }
                    .hero h1 { font-size: 3.75rem; }
                    .hero-lead { font-size: 1.25rem; }
                    .hero-photo { aspect-ratio: 1 / 1; }
                }
                @media (min-width: 1024px) {
                    .hero h1 { font-size: 4.5rem; }
                }
                "#}
            </style>
        </section>
    }
}

fn about() -> Html {
    html! {
        <section id="about" class="section about">
            <div class="container">
                <div class="about-intro">
                    <h2 class="section-title">{"Sobre Mí"}</h2>
                    <div class="about-rule"></div>
                    <p>
                        {"¡Hola! Soy "}
                        <span class="about-name">{config::OWNER_FULL_NAME}</span>
                        {". Soy una Maestra de Educación Especial dedicada, impulsada por la creencia de que cada niño merece una educación que se adapte a su forma única de ver el mundo."}
                    </p>
                </div>
                <div class="grid-3">
                    {
                        HIGHLIGHTS.iter().map(|highlight| html! {
                            <div key={highlight.title} class="highlight-card">
                                <div class={classes!("highlight-icon", highlight.accent.class())}>
                                    <Icon glyph={highlight.glyph} />
                                </div>
                                <h3>{highlight.title}</h3>
                                <p>{highlight.body}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .about {
                    background: #ffffff;
                }
                .about-intro {
                    max-width: 48rem;
                    margin: 0 auto 4rem;
                    text-align: center;
                }
                .about-intro p {
                    font-size: 1.25rem;
                    line-height: 1.625;
                    margin: 0;
                }
                .about-rule {
                    width: 5rem;
                    height: 4px;
                    background: var(--teal-400);
                    border-radius: 9999px;
                    margin: 0 auto 2rem;
                }
                .about-name {
                    color: var(--slate-900);
                    font-weight: 600;
                }
                .highlight-card {
                    padding: 2rem;
                    background: var(--slate-50);
                    border: 1px solid var(--slate-100);
                    border-radius: 1rem;
                    transition: box-shadow 0.3s ease;
                }
                .highlight-card:hover {
                    box-shadow: 0 10px 15px -3px rgba(15, 23, 42, 0.1);
                }
                .highlight-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.5rem;
                }
                .accent-teal { background: var(--teal-100); color: var(--teal-600); }
                .accent-brand { background: var(--brand-100); color: var(--brand-600); }
                .accent-sage { background: var(--sage-100); color: var(--sage-600); }
                .highlight-card h3 {
                    font-family: var(--font-serif);
                    font-size: 1.25rem;
                    font-weight: 400;
                    color: var(--slate-900);
                    margin: 0 0 0.75rem;
                }
                .highlight-card p {
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}

fn services() -> Html {
    html! {
        <section id="services" class="section services">
            <div class="services-backdrop">
                <div class="services-glow services-glow-teal"></div>
                <div class="services-glow services-glow-brand"></div>
            </div>
            <div class="container services-inner">
                <div class="services-heading">
                    <span class="eyebrow">{"Lo Que Ofrezco"}</span>
                    <h2 class="section-title">{"Servicios Especializados"}</h2>
                </div>
                <div class="services-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <ServiceCard
                                key={service.title}
                                title={service.title}
                                description={service.description}
                                icon={service.icon}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .services {
                    position: relative;
                    overflow: hidden;
                    background: var(--slate-50);
                }
                .services-backdrop {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    opacity: 0.3;
                    pointer-events: none;
                }
                .services-glow {
                    position: absolute;
                    width: 600px;
                    height: 600px;
                    border-radius: 9999px;
                    filter: blur(120px);
                }
                .services-glow-teal {
                    top: -200px;
                    right: -200px;
                    background: var(--teal-200);
                }
                .services-glow-brand {
                    bottom: -200px;
                    left: -200px;
                    background: var(--brand-200);
                }
                .services-inner {
                    position: relative;
                    z-index: 10;
                }
                .services-heading {
                    margin-bottom: 4rem;
                }
                .eyebrow {
                    display: block;
                    color: var(--teal-600);
                    font-weight: 600;
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    margin-bottom: 0.5rem;
                }
                .services-grid {
                    display: grid;
                    gap: 1.5rem;
                }
                .service-card {
                    background: #ffffff;
                    padding: 2rem;
                    border-radius: 0.75rem;
                    border: 1px solid var(--slate-100);
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                    transition: all 0.3s ease;
                }
                .service-card:hover {
                    transform: translateY(-5px);
                    border-color: var(--teal-100);
                    box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.1);
                }
                .service-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 9999px;
                    background: var(--teal-50);
                    color: var(--teal-600);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.5rem;
                    transition: all 0.3s ease;
                }
                .service-card:hover .service-icon {
                    background: var(--teal-500);
                    color: #ffffff;
                }
                .service-card h3 {
                    font-family: var(--font-serif);
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: var(--slate-800);
                    margin: 0 0 0.75rem;
                }
                .service-card p {
                    color: var(--slate-500);
                    line-height: 1.625;
                    font-size: 0.875rem;
                    margin: 0;
                }
                @media (min-width: 768px) {
                    .services-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .services-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}

fn experience() -> Html {
    html! {
        <section id="experience" class="section experience">
            <div class="container experience-grid">
                <div class="experience-aside">
                    <h2 class="section-title">{"Experiencia y Cualificaciones"}</h2>
                    <p>
                        {"Mi carrera se basa en una sólida preparación académica y años de experiencia práctica en diversos entornos educativos."}
                    </p>
                    <div class="education-card">
                        <h4>{"Educación"}</h4>
                        <p class="education-degree">{EDUCATION.degree}</p>
                        <p class="education-school">{EDUCATION.institution}</p>
                    </div>
                </div>
                <div class="experience-timeline">
                    {
                        newest_first(&EXPERIENCE).into_iter().map(|entry| html! {
                            <ExperienceItem
                                key={entry.years}
                                year={entry.years}
                                role={entry.role}
                                org={entry.organization}
                                desc={entry.description}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .experience {
                    background: #ffffff;
                }
                .experience-grid {
                    display: grid;
                    gap: 4rem;
                }
                .experience-aside p {
                    margin: 0 0 1.5rem;
                }
                .education-card {
                    padding: 1.5rem;
                    background: var(--brand-50);
                    border: 1px solid var(--brand-100);
                    border-radius: 0.75rem;
                }
                .education-card h4 {
                    font-family: var(--font-serif);
                    font-size: 1.125rem;
                    font-weight: 400;
                    color: var(--brand-800);
                    margin: 0 0 0.5rem;
                }
                .education-card .education-degree {
                    font-weight: 600;
                    color: var(--slate-800);
                    margin: 0;
                }
                .education-card .education-school {
                    font-size: 0.875rem;
                    color: var(--slate-500);
                    margin: 0;
                }
                .experience-timeline {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .experience-item {
                    position: relative;
                    padding-left: 2rem;
                    border-left: 2px solid var(--slate-200);
                    transition: border-color 0.3s ease;
                }
                .experience-item:hover {
                    border-color: var(--teal-300);
                }
                .experience-dot {
                    position: absolute;
                    left: -9px;
                    top: 0;
                    width: 1rem;
                    height: 1rem;
                    background: #ffffff;
                    border: 2px solid var(--teal-500);
                    border-radius: 9999px;
                }
                .experience-years {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: var(--teal-600);
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    margin-bottom: 0.25rem;
                }
                .experience-item h3 {
                    font-family: var(--font-serif);
                    font-size: 1.25rem;
                    color: var(--slate-800);
                    margin: 0;
                }
                .experience-org {
                    color: var(--slate-500);
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }
                .experience-item p {
                    color: var(--slate-600);
                    line-height: 1.625;
                    margin: 0;
                }
                @media (min-width: 768px) {
                    .experience-grid { grid-template-columns: 4fr 8fr; }
                }
                "#}
            </style>
        </section>
    }
}

fn testimonials() -> Html {
    html! {
        <section class="section testimonials">
            <div class="container">
                <h2 class="section-title">{"Testimonios de Familias"}</h2>
                <div class="grid-3">
                    {
                        TESTIMONIALS.iter().map(|testimonial| html! {
                            <TestimonialCard
                                key={testimonial.author}
                                quote={testimonial.quote}
                                author={testimonial.author}
                                role={testimonial.role}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .testimonials {
                    background: var(--teal-900);
                    color: var(--teal-50);
                }
                .testimonials .section-title {
                    color: var(--teal-50);
                    font-size: 1.875rem;
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .testimonial-card {
                    position: relative;
                    padding: 2rem;
                    border-radius: 0.75rem;
                    background: rgba(17, 94, 89, 0.5);
                    border: 1px solid var(--teal-700);
                    backdrop-filter: blur(4px);
                }
                .testimonial-mark {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    font-family: var(--font-serif);
                    font-size: 3.75rem;
                    line-height: 1;
                    color: rgba(20, 184, 166, 0.2);
                }
                .testimonial-quote {
                    position: relative;
                    z-index: 1;
                    color: var(--teal-50);
                    font-size: 1.125rem;
                    font-style: italic;
                    line-height: 1.625;
                    margin: 0 0 1.5rem;
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .testimonial-avatar {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: var(--teal-700);
                    color: var(--teal-200);
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .testimonial-name {
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 0.875rem;
                }
                .testimonial-role {
                    color: var(--teal-300);
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                @media (min-width: 768px) {
                    .testimonials .section-title { font-size: 2.25rem; }
                }
                "#}
            </style>
        </section>
    }
}

/// An event whose browser default action can be cancelled.
pub trait Cancelable {
    fn cancel_default(&self);
}

impl Cancelable for Event {
    fn cancel_default(&self) {
        self.prevent_default();
    }
}

/// The contact form is not wired to any backend yet: a submission only
/// suppresses the browser's default navigation.
fn discard_submission<E: Cancelable>(event: &E) {
    event.cancel_default();
    debug!("Contact form submitted; no delivery backend configured");
}

#[function_component(Contact)]
fn contact() -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| discard_submission::<Event>(&e));

    let mailto = config::mailto_href(config::CONTACT_EMAIL, config::MAIL_SUBJECT);

    html! {
        <section id="contact" class="section contact">
            <div class="container">
                <div class="contact-card">
                    <div class="contact-panel">
                        <div>
                            <h3>{"Conectemos"}</h3>
                            <p>{"Cada viaje comienza con una conversación. Me encantaría saber sobre las necesidades de tu hijo y cómo puedo ayudar."}</p>
                            <div class="contact-details">
                                <a href={mailto} class="contact-line">
                                    <Icon glyph={Glyph::Mail} size={18} />
                                    <span>{config::CONTACT_EMAIL}</span>
                                </a>
                                <div class="contact-line">
                                    <Icon glyph={Glyph::Phone} size={18} />
                                    <span>{config::CONTACT_PHONE}</span>
                                </div>
                                <div class="contact-line">
                                    <Icon glyph={Glyph::MapPin} size={18} />
                                    <span>{config::CONTACT_LOCATION}</span>
                                </div>
                            </div>
                        </div>
                        <div class="contact-social">
                            {
                                SOCIAL_LINKS.iter().map(|social| html! {
                                    <a key={social.label} href={social.href} class="social-link" aria-label={social.label}>
                                        <Icon glyph={social.glyph} size={20} />
                                    </a>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <form class="contact-form" {onsubmit}>
                        <div class="form-row">
                            <label class="form-field">
                                <span>{"Nombre"}</span>
                                <input type="text" name="first_name" placeholder="Ana" />
                            </label>
                            <label class="form-field">
                                <span>{"Apellido"}</span>
                                <input type="text" name="last_name" placeholder="Pérez" />
                            </label>
                        </div>
                        <label class="form-field">
                            <span>{"Correo Electrónico"}</span>
                            <input type="email" name="email" placeholder="ana@ejemplo.com" />
                        </label>
                        <label class="form-field">
                            <span>{"Mensaje"}</span>
                            <textarea name="message" rows="4" placeholder="Cuéntame un poco sobre tu hijo..." />
                        </label>
                        <button type="submit" class="form-submit">{"Enviar Mensaje"}</button>
                    </form>
                </div>
            </div>
            <style>
                {r#"
                .contact {
                    background: #ffffff;
                }
                .contact-card {
                    max-width: 56rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    background: #ffffff;
                    border: 1px solid var(--slate-100);
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.1);
                }
                .contact-panel {
                    background: var(--slate-900);
                    color: #ffffff;
                    padding: 2.5rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                }
                .contact-panel h3 {
                    font-family: var(--font-serif);
                    font-size: 1.5rem;
                    font-weight: 400;
                    margin: 0 0 1.5rem;
                }
                .contact-panel p {
                    color: var(--slate-300);
                    margin: 0 0 2rem;
                }
                .contact-details {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .contact-line {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: var(--slate-300);
                    text-decoration: none;
                }
                .contact-social {
                    display: flex;
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .social-link {
                    padding: 0.5rem;
                    display: flex;
                    background: var(--slate-800);
                    color: #ffffff;
                    border-radius: 9999px;
                    transition: background 0.2s ease;
                }
                .social-link:hover {
                    background: var(--teal-600);
                }
                .contact-form {
                    padding: 2.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .form-row {
                    display: grid;
                    gap: 1.5rem;
                }
                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .form-field span {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: var(--slate-700);
                }
                .form-field input, .form-field textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    background: var(--slate-50);
                    border: 1px solid var(--slate-200);
                    font: inherit;
                    outline: none;
                    transition: all 0.2s ease;
                }
                .form-field textarea {
                    resize: none;
                }
                .form-field input:focus, .form-field textarea:focus {
                    border-color: var(--teal-500);
                    box-shadow: 0 0 0 2px var(--teal-200);
                }
                .form-submit {
                    width: 100%;
                    padding: 0.875rem;
                    background: var(--teal-600);
                    color: #ffffff;
                    font: inherit;
                    font-weight: 600;
                    border: none;
                    border-radius: 0.5rem;
                    cursor: pointer;
                    box-shadow: 0 4px 6px rgba(15, 23, 42, 0.1);
                    transition: all 0.2s ease;
                }
                .form-submit:hover {
                    background: var(--teal-700);
                }
                @media (min-width: 768px) {
                    .contact-card { flex-direction: row; }
                    .contact-panel { width: 40%; }
                    .contact-form { width: 60%; }
                    .form-row { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}

fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <p>{format!("© {} {}. Todos los derechos reservados.", year, config::OWNER_FULL_NAME)}</p>
            <style>
                {r#"
                .site-footer {
                    background: var(--slate-50);
                    border-top: 1px solid var(--slate-200);
                    padding: 2rem 0;
                    text-align: center;
                }
                .site-footer p {
                    color: var(--slate-500);
                    font-size: 0.875rem;
                    margin: 0;
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct RecordedSubmit {
        cancelled: Cell<u32>,
    }

    impl Cancelable for RecordedSubmit {
        fn cancel_default(&self) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    #[test]
    fn every_submission_cancels_default_navigation() {
        let submit = RecordedSubmit::default();
        for expected in 1..=3 {
            discard_submission(&submit);
            assert_eq!(submit.cancelled.get(), expected);
        }
    }

    async fn render_home() -> String {
        yew::ServerRenderer::<Home>::new().render().await
    }

    #[tokio::test]
    async fn initial_render_has_one_transparent_nav_and_no_overlay() {
        let rendered = render_home().await;
        assert_eq!(rendered.matches("<nav").count(), 1);
        assert!(rendered.contains("class=\"site-nav nav-transparent\""));
        assert!(!rendered.contains("class=\"site-nav nav-solid\""));
        assert!(!rendered.contains("class=\"mobile-overlay\""));
    }

    #[tokio::test]
    async fn sections_render_in_page_order() {
        let rendered = render_home().await;
        let positions: Vec<usize> = ["id=\"about\"", "id=\"services\"", "id=\"experience\"", "Testimonios de Familias", "id=\"contact\"", "<footer"]
            .iter()
            .map(|marker| rendered.find(marker).unwrap_or_else(|| panic!("missing {}", marker)))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[tokio::test]
    async fn every_content_table_is_rendered() {
        let rendered = render_home().await;
        assert_eq!(rendered.matches("class=\"service-card\"").count(), SERVICES.len());
        assert_eq!(rendered.matches("class=\"experience-item\"").count(), EXPERIENCE.len());
        assert_eq!(rendered.matches("class=\"testimonial-card\"").count(), TESTIMONIALS.len());
        assert_eq!(rendered.matches("class=\"highlight-card\"").count(), HIGHLIGHTS.len());
        for service in SERVICES {
            assert!(rendered.contains(service.title));
        }
    }

    #[tokio::test]
    async fn card_styles_are_emitted_once_per_section() {
        let rendered = render_home().await;
        for selector in [".service-card {", ".experience-item {", ".testimonial-card {"] {
            assert_eq!(rendered.matches(selector).count(), 1, "{}", selector);
        }
    }

    #[tokio::test]
    async fn footer_carries_current_year() {
        let rendered = render_home().await;
        let year = chrono::Local::now().year().to_string();
        assert!(rendered.contains(&format!("© {}", year)));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, EventInit, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_home() -> (yew::AppHandle<Home>, Element) {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let handle = yew::Renderer::<Home>::with_root(root.clone()).render();
        (handle, root)
    }

    async fn settle() {
        TimeoutFuture::new(0).await;
    }

    fn click(root: &Element, selector: &str) {
        root.query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("no {}", selector))
            .unchecked_into::<HtmlElement>()
            .click();
    }

    fn overlay_open(root: &Element) -> bool {
        root.query_selector(".mobile-overlay").unwrap().is_some()
    }

    #[wasm_bindgen_test]
    async fn clicking_any_mobile_link_closes_the_overlay() {
        let (handle, root) = mount_home();
        settle().await;
        assert!(!overlay_open(&root));

        for index in 1..=NAV_LINKS_LEN {
            click(&root, ".menu-toggle");
            settle().await;
            assert!(overlay_open(&root));

            click(&root, &format!(".mobile-link:nth-of-type({})", index));
            settle().await;
            assert!(!overlay_open(&root), "link {} left the menu open", index);
        }
        handle.destroy();
    }

    #[wasm_bindgen_test]
    async fn contact_submit_is_always_cancelled() {
        let (handle, root) = mount_home();
        settle().await;

        let form = root.query_selector(".contact-form").unwrap().expect("contact form");
        for _ in 0..2 {
            let mut init = EventInit::new();
            init.bubbles(true).cancelable(true);
            let submit = Event::new_with_event_init_dict("submit", &init).unwrap();
            form.dispatch_event(&submit).unwrap();
            assert!(submit.default_prevented());
        }
        handle.destroy();
    }

    #[wasm_bindgen_test]
    async fn scrolling_after_unmount_is_harmless() {
        let (handle, _root) = mount_home();
        settle().await;
        handle.destroy();
        settle().await;

        let window = web_sys::window().unwrap();
        let scroll = Event::new("scroll").unwrap();
        window.dispatch_event(&scroll).unwrap();
        settle().await;
    }

    const NAV_LINKS_LEN: usize = crate::content::NAV_LINKS.len();
}
