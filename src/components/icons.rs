use yew::prelude::*;

/// Every glyph the page draws. Outline style, 24x24 viewbox, stroked with
/// `currentColor` so the surrounding text colour applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Menu,
    Close,
    Mail,
    Phone,
    MapPin,
    Linkedin,
    Instagram,
    BookOpen,
    Heart,
    Users,
    Sparkles,
    Clock,
    PenTool,
}

#[cfg(test)]
impl Glyph {
    pub const ALL: [Glyph; 13] = [
        Glyph::Menu,
        Glyph::Close,
        Glyph::Mail,
        Glyph::Phone,
        Glyph::MapPin,
        Glyph::Linkedin,
        Glyph::Instagram,
        Glyph::BookOpen,
        Glyph::Heart,
        Glyph::Users,
        Glyph::Sparkles,
        Glyph::Clock,
        Glyph::PenTool,
    ];
}

impl Glyph {
    pub fn name(self) -> &'static str {
        match self {
            Glyph::Menu => "menu",
            Glyph::Close => "close",
            Glyph::Mail => "mail",
            Glyph::Phone => "phone",
            Glyph::MapPin => "map-pin",
            Glyph::Linkedin => "linkedin",
            Glyph::Instagram => "instagram",
            Glyph::BookOpen => "book-open",
            Glyph::Heart => "heart",
            Glyph::Users => "users",
            Glyph::Sparkles => "sparkles",
            Glyph::Clock => "clock",
            Glyph::PenTool => "pen-tool",
        }
    }

    fn shapes(self) -> Html {
        match self {
            Glyph::Menu => html! {
                <>
                    <line x1="4" y1="6" x2="20" y2="6" />
                    <line x1="4" y1="12" x2="20" y2="12" />
                    <line x1="4" y1="18" x2="20" y2="18" />
                </>
            },
            Glyph::Close => html! {
                <>
                    <path d="M18 6 6 18" />
                    <path d="m6 6 12 12" />
                </>
            },
            Glyph::Mail => html! {
                <>
                    <rect x="2" y="4" width="20" height="16" rx="2" />
                    <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
                </>
            },
            Glyph::Phone => html! {
                <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
            },
            Glyph::MapPin => html! {
                <>
                    <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
                    <circle cx="12" cy="10" r="3" />
                </>
            },
            Glyph::Linkedin => html! {
                <>
                    <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
                    <rect x="2" y="9" width="4" height="12" />
                    <circle cx="4" cy="4" r="2" />
                </>
            },
            Glyph::Instagram => html! {
                <>
                    <rect x="2" y="2" width="20" height="20" rx="5" ry="5" />
                    <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                    <line x1="17.5" y1="6.5" x2="17.51" y2="6.5" />
                </>
            },
            Glyph::BookOpen => html! {
                <>
                    <path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z" />
                    <path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z" />
                </>
            },
            Glyph::Heart => html! {
                <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" />
            },
            Glyph::Users => html! {
                <>
                    <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
                    <circle cx="9" cy="7" r="4" />
                    <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
                    <path d="M16 3.13a4 4 0 0 1 0 7.75" />
                </>
            },
            Glyph::Sparkles => html! {
                <>
                    <path d="m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z" />
                    <path d="M5 3v4" />
                    <path d="M19 17v4" />
                    <path d="M3 5h4" />
                    <path d="M17 19h4" />
                </>
            },
            Glyph::Clock => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <polyline points="12 6 12 12 16 14" />
                </>
            },
            Glyph::PenTool => html! {
                <>
                    <path d="m12 19 7-7 3 3-7 7-3-3z" />
                    <path d="m18 13-1.5-7.5L2 2l3.5 14.5L13 18l5-5z" />
                    <path d="m2 2 7.586 7.586" />
                    <circle cx="11" cy="11" r="2" />
                </>
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub glyph: Glyph,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            class={classes!("icon", format!("icon-{}", props.glyph.name()), props.class.clone())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { props.glyph.shapes() }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn glyph_names_are_unique() {
        let names: HashSet<_> = Glyph::ALL.iter().map(|g| g.name()).collect();
        assert_eq!(names.len(), Glyph::ALL.len());
    }

    #[tokio::test]
    async fn icon_renders_sized_svg() {
        #[function_component(Preview)]
        fn preview() -> Html {
            html! { <Icon glyph={Glyph::Mail} size={18} /> }
        }

        let rendered = yew::ServerRenderer::<Preview>::new().render().await;
        assert!(rendered.contains("<svg"));
        assert!(rendered.contains("icon-mail"));
        assert!(rendered.contains("width=\"18\""));
    }
}
