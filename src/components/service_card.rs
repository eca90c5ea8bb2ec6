use yew::prelude::*;
use crate::components::icons::{Glyph, Icon};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceIcon {
    Book,
    Heart,
    Users,
    Sparkles,
    Clock,
    Pencil,
}

impl ServiceIcon {
    /// Resolves an icon kind. Unknown kinds fall back to `Sparkles` so a card
    /// never renders without a glyph.
    pub fn from_kind(kind: &str) -> Self {
        Self::lookup(kind).unwrap_or(ServiceIcon::Sparkles)
    }

    fn lookup(kind: &str) -> Option<Self> {
        match kind {
            "book" => Some(ServiceIcon::Book),
            "heart" => Some(ServiceIcon::Heart),
            "users" => Some(ServiceIcon::Users),
            "sparkles" => Some(ServiceIcon::Sparkles),
            "clock" => Some(ServiceIcon::Clock),
            "pencil" => Some(ServiceIcon::Pencil),
            _ => None,
        }
    }

    pub fn glyph(self) -> Glyph {
        match self {
            ServiceIcon::Book => Glyph::BookOpen,
            ServiceIcon::Heart => Glyph::Heart,
            ServiceIcon::Users => Glyph::Users,
            ServiceIcon::Sparkles => Glyph::Sparkles,
            ServiceIcon::Clock => Glyph::Clock,
            ServiceIcon::Pencil => Glyph::PenTool,
        }
    }
}

#[cfg(test)]
impl ServiceIcon {
    pub fn is_known(kind: &str) -> bool {
        Self::lookup(kind).is_some()
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub icon: AttrValue,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let glyph = ServiceIcon::from_kind(&props.icon).glyph();

    html! {
        <div class="service-card">
            <div class="service-icon">
                <Icon glyph={glyph} />
            </div>
            <h3>{&props.title}</h3>
            <p>{&props.description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_map_to_their_glyph() {
        assert_eq!(ServiceIcon::from_kind("book").glyph(), Glyph::BookOpen);
        assert_eq!(ServiceIcon::from_kind("pencil").glyph(), Glyph::PenTool);
        assert_eq!(ServiceIcon::from_kind("clock"), ServiceIcon::Clock);
    }

    #[test]
    fn unknown_kind_falls_back_to_sparkles() {
        for kind in ["", "rocket", "Book", " heart"] {
            assert!(!ServiceIcon::is_known(kind));
            assert_eq!(ServiceIcon::from_kind(kind), ServiceIcon::Sparkles);
        }
    }

    #[tokio::test]
    async fn card_renders_title_description_and_icon() {
        #[function_component(Preview)]
        fn preview() -> Html {
            html! {
                <ServiceCard
                    title="Tutoría Académica"
                    description="Lectura y matemáticas"
                    icon="unknown-kind"
                />
            }
        }

        let rendered = yew::ServerRenderer::<Preview>::new().render().await;
        assert!(rendered.contains("Tutoría Académica"));
        assert!(rendered.contains("Lectura y matemáticas"));
        assert!(rendered.contains("icon-sparkles"));
    }
}
