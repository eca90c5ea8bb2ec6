use yew::prelude::*;
use log::debug;
use web_sys::MouseEvent;

use crate::components::icons::{Glyph, Icon};
use crate::config;
use crate::content::NAV_LINKS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVariant {
    Transparent,
    Solid,
}

impl NavVariant {
    pub fn class(self) -> &'static str {
        match self {
            NavVariant::Transparent => "nav-transparent",
            NavVariant::Solid => "nav-solid",
        }
    }
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > config::SCROLL_THRESHOLD_PX
}

pub fn nav_variant(scrolled: bool) -> NavVariant {
    if scrolled {
        NavVariant::Solid
    } else {
        NavVariant::Transparent
    }
}

pub fn toggled(open: bool) -> bool {
    !open
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    TogglePressed,
    LinkFollowed,
}

pub fn menu_after(open: bool, event: MenuEvent) -> bool {
    match event {
        MenuEvent::TogglePressed => toggled(open),
        MenuEvent::LinkFollowed => false,
    }
}

// No prevent_default on the click: the anchor still jumps to its section.
fn follow_link(target: &str, on_close: &Callback<()>) {
    debug!("Mobile nav to {}", target);
    on_close.emit(());
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scrolled: bool,
    pub menu_open: bool,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { scrolled, menu_open, on_toggle } = props;
    let variant = nav_variant(*scrolled);

    html! {
        <nav class={classes!("site-nav", variant.class())}>
            <div class="nav-content">
                <a href="#" class="nav-brand">
                    <div class="nav-monogram">{"A"}</div>
                    <span class="nav-name">{config::OWNER_SHORT_NAME}</span>
                </a>

                <div class="nav-links">
                    {
                        NAV_LINKS.iter().map(|link| html! {
                            <a key={link.name} href={link.href} class="nav-link">
                                {link.name}
                                <span class="nav-underline"></span>
                            </a>
                        }).collect::<Html>()
                    }
                    <a href="#contact" class="nav-cta">{"Hablemos"}</a>
                </div>

                <button
                    class="menu-toggle"
                    aria-label={if *menu_open { "Cerrar menú" } else { "Abrir menú" }}
                    aria-expanded={menu_open.to_string()}
                    onclick={on_toggle.clone()}
                >
                    <Icon glyph={if *menu_open { Glyph::Close } else { Glyph::Menu }} />
                </button>
            </div>
            <style>
                {r#"
                .site-nav {
                    position: fixed;
                    width: 100%;
                    z-index: 50;
                    transition: all 0.3s ease;
                }
                .site-nav.nav-transparent {
                    background: transparent;
                    padding: 1.5rem 0;
                }
                .site-nav.nav-solid {
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                    padding: 1rem 0;
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                }
                .nav-monogram {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: linear-gradient(to bottom right, var(--teal-400), var(--brand-500));
                    color: #ffffff;
                    font-family: var(--font-serif);
                    font-weight: 700;
                    font-size: 1.25rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 4px 6px rgba(15, 23, 42, 0.1);
                }
                .nav-name {
                    font-family: var(--font-serif);
                    font-weight: 700;
                    font-size: 1.125rem;
                    letter-spacing: 0.025em;
                    color: var(--slate-800);
                    opacity: 0.9;
                }
                .nav-solid .nav-name {
                    opacity: 1;
                }
                .nav-links {
                    display: none;
                    align-items: center;
                    gap: 2rem;
                    font-weight: 500;
                    font-size: 0.875rem;
                    letter-spacing: 0.025em;
                }
                .nav-link {
                    position: relative;
                    color: var(--slate-600);
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: var(--teal-600);
                }
                .nav-underline {
                    position: absolute;
                    bottom: -4px;
                    left: 0;
                    width: 0;
                    height: 2px;
                    background: var(--teal-400);
                    transition: width 0.2s ease;
                }
                .nav-link:hover .nav-underline {
                    width: 100%;
                }
                .nav-cta {
                    padding: 0.625rem 1.5rem;
                    background: var(--slate-800);
                    color: #ffffff;
                    border-radius: 9999px;
                    font-weight: 600;
                    text-decoration: none;
                    box-shadow: 0 10px 15px -3px rgba(15, 23, 42, 0.2);
                    transition: all 0.2s ease;
                }
                .nav-cta:hover {
                    background: var(--teal-700);
                    transform: translateY(-2px);
                }
                .menu-toggle {
                    position: relative;
                    z-index: 50;
                    padding: 0.5rem;
                    background: none;
                    border: none;
                    color: var(--slate-800);
                    cursor: pointer;
                }
                @media (min-width: 768px) {
                    .nav-links { display: flex; }
                    .menu-toggle { display: none; }
                }
                "#}
            </style>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub on_close: Callback<()>,
}

/// Full-screen link list for narrow viewports. Only mounted while open.
#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    html! {
        <div class="mobile-overlay">
            {
                NAV_LINKS.iter().map(|link| {
                    let on_close = props.on_close.clone();
                    let target = link.href;
                    let onclick = Callback::from(move |_: MouseEvent| follow_link(target, &on_close));
                    html! {
                        <a key={link.name} href={link.href} class="mobile-link" {onclick}>
                            {link.name}
                        </a>
                    }
                }).collect::<Html>()
            }
            <style>
                {r#"
                .mobile-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    background: #ffffff;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    animation: overlay-fade-in 0.3s ease forwards;
                }
                .mobile-link {
                    font-family: var(--font-serif);
                    font-size: 1.5rem;
                    font-weight: 500;
                    color: var(--slate-800);
                    text-decoration: none;
                }
                .mobile-link:hover {
                    color: var(--teal-600);
                }
                @keyframes overlay-fade-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn threshold_splits_transparent_and_solid() {
        for offset in [0.0, 1.0, 19.9, 20.0] {
            assert_eq!(nav_variant(is_scrolled(offset)), NavVariant::Transparent, "{}", offset);
        }
        for offset in [20.01, 21.0, 600.0, 10_000.0] {
            assert_eq!(nav_variant(is_scrolled(offset)), NavVariant::Solid, "{}", offset);
        }
    }

    #[test]
    fn negative_overscroll_stays_transparent() {
        assert!(!is_scrolled(-35.0));
    }

    #[test]
    fn toggle_parity() {
        for presses in 0..10 {
            let open = (0..presses).fold(false, |open, _| toggled(open));
            assert_eq!(open, presses % 2 == 1, "after {} presses", presses);
        }
    }

    #[test]
    fn following_a_link_always_closes() {
        assert!(!menu_after(true, MenuEvent::LinkFollowed));
        assert!(!menu_after(false, MenuEvent::LinkFollowed));
        assert!(menu_after(false, MenuEvent::TogglePressed));
        assert!(!menu_after(true, MenuEvent::TogglePressed));
    }

    #[test]
    fn every_mobile_link_requests_close() {
        let closes = Rc::new(Cell::new(0));
        let on_close = {
            let closes = closes.clone();
            Callback::from(move |()| closes.set(closes.get() + 1))
        };
        for link in NAV_LINKS {
            let before = closes.get();
            follow_link(link.href, &on_close);
            assert_eq!(closes.get(), before + 1, "{} did not close the menu", link.name);
        }
    }

    #[tokio::test]
    async fn mobile_menu_lists_every_nav_link() {
        #[function_component(Preview)]
        fn preview() -> Html {
            html! { <MobileMenu on_close={Callback::noop()} /> }
        }

        let rendered = yew::ServerRenderer::<Preview>::new().render().await;
        assert_eq!(rendered.matches("class=\"mobile-link\"").count(), NAV_LINKS.len());
        for link in NAV_LINKS {
            assert!(rendered.contains(&format!("href=\"{}\"", link.href)));
        }
    }
}
