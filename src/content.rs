//! Literal page content. Everything here is fixed at compile time and handed
//! to the presentational components as props.

use crate::components::icons::Glyph;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
    /// Free-form icon kind, resolved by `ServiceIcon::from_kind`.
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExperienceEntry {
    pub years: &'static str,
    pub role: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
}

impl ExperienceEntry {
    /// First year of the range; `None` if it does not start with a year.
    pub fn start_year(&self) -> Option<u32> {
        self.years.split('-').next()?.trim().parse().ok()
    }
}

/// Timeline order: latest start year first. Entries without a parsable year
/// sink to the end, keeping their relative order.
pub fn newest_first(entries: &[ExperienceEntry]) -> Vec<&ExperienceEntry> {
    let mut ordered: Vec<_> = entries.iter().collect();
    ordered.sort_by_key(|entry| std::cmp::Reverse(entry.start_year()));
    ordered
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Teal,
    Brand,
    Sage,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Teal => "accent-teal",
            Accent::Brand => "accent-brand",
            Accent::Sage => "accent-sage",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
    pub glyph: Glyph,
    pub accent: Accent,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub glyph: Glyph,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { name: "Sobre Mí", href: "#about" },
    NavLink { name: "Servicios", href: "#services" },
    NavLink { name: "Experiencia", href: "#experience" },
    NavLink { name: "Contacto", href: "#contact" },
];

pub const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "Conocimiento Experto",
        body: "Licenciada en Educación Especial con formación especializada en estrategias de aprendizaje para la neurodivergencia.",
        glyph: Glyph::BookOpen,
        accent: Accent::Teal,
    },
    Highlight {
        title: "Empatía Profunda",
        body: "Creando un ambiente seguro y enriquecedor donde los niños se sienten comprendidos, validados y motivados.",
        glyph: Glyph::Heart,
        accent: Accent::Brand,
    },
    Highlight {
        title: "Alianza Familiar",
        body: "Colaborando estrechamente con las familias para asegurar que las estrategias funcionen tanto en casa como en el aula.",
        glyph: Glyph::Users,
        accent: Accent::Sage,
    },
];

pub const SERVICES: [ServiceOffering; 6] = [
    ServiceOffering {
        title: "Planes Educativos Individualizados",
        description: "Estrategias de aprendizaje personalizadas diseñadas para cumplir con objetivos cognitivos y de desarrollo específicos.",
        icon: "book",
    },
    ServiceOffering {
        title: "Integración Sensorial",
        description: "Técnicas y actividades para ayudar a los niños a procesar información sensorial y autorregularse eficazmente.",
        icon: "sparkles",
    },
    ServiceOffering {
        title: "Desarrollo de Habilidades Sociales",
        description: "Interacciones guiadas para construir confianza en la comunicación, el compartir y hacer amigos.",
        icon: "users",
    },
    ServiceOffering {
        title: "Intervención Temprana",
        description: "Apoyo para niños pequeños para abordar retrasos en el desarrollo durante períodos críticos de crecimiento.",
        icon: "clock",
    },
    ServiceOffering {
        title: "Tutoría Académica",
        description: "Enseñanza paciente y adaptativa para lectura, escritura y matemáticas que respeta el ritmo del niño.",
        icon: "pencil",
    },
    ServiceOffering {
        title: "Consultoría para Padres y Familias",
        description: "Empoderando a los padres con herramientas y conocimientos para apoyar el camino de su hijo en casa.",
        icon: "heart",
    },
];

pub const EDUCATION: Education = Education {
    degree: "Licenciatura en Educación Especial",
    institution: "Escuela Normal de Especialización \"Dr. Roberto Solís Quiroga\"",
};

pub const EXPERIENCE: [ExperienceEntry; 3] = [
    ExperienceEntry {
        years: "2019 - Presente",
        role: "Maestra de Educación Especial",
        organization: "Centro de Aprendizaje Inclusivo",
        description: "Liderando programas de aprendizaje individualizados para niños con trastorno del espectro autista y TDAH. Desarrollo de materiales curriculares sensorialmente amigables.",
    },
    ExperienceEntry {
        years: "2017 - 2019",
        role: "Terapeuta Educativa",
        organization: "Práctica Privada",
        description: "Impartí sesiones de terapia individual enfocadas en el desarrollo cognitivo y la regulación emocional para niños de 4 a 12 años.",
    },
    ExperienceEntry {
        years: "2015 - 2017",
        role: "Especialista en Integración",
        organization: "Distrito Escolar Primario",
        description: "Colaboré con maestros de educación general para adaptar entornos de aula y planes de estudio para estudiantes con necesidades diversas.",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Ariadna ha transformado la visión de nuestro hijo sobre la escuela. Solía tener ansiedad, pero ahora entra con una sonrisa. Su paciencia es infinita.",
        author: "María S.",
        role: "Madre de familia",
    },
    Testimonial {
        quote: "Profesional, experta y profundamente cariñosa. No solo enseñó a nuestra hija, nos enseñó a nosotros cómo apoyarla mejor.",
        author: "David L.",
        role: "Padre de familia",
    },
    Testimonial {
        quote: "La Mtra. García ve el potencial en cada niño. Sus estrategias son creativas y efectivas. Altamente recomendada para cualquier familia.",
        author: "Sarah J.",
        role: "Colega",
    },
];

// TODO: swap the placeholder "#" targets for the real profile URLs once Ariadna shares them.
pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink { label: "LinkedIn", href: "#", glyph: Glyph::Linkedin },
    SocialLink { label: "Instagram", href: "#", glyph: Glyph::Instagram },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::service_card::ServiceIcon;

    #[test]
    fn nav_links_point_at_page_sections() {
        assert_eq!(NAV_LINKS.len(), 4);
        for link in NAV_LINKS {
            assert!(!link.name.is_empty());
            assert!(link.href.starts_with('#') && link.href.len() > 1, "{}", link.href);
        }
    }

    #[test]
    fn every_service_has_text_and_a_known_icon() {
        assert_eq!(SERVICES.len(), 6);
        for service in SERVICES {
            assert!(!service.title.is_empty());
            assert!(!service.description.is_empty());
            assert!(
                ServiceIcon::is_known(service.icon),
                "{} uses unknown icon {}",
                service.title,
                service.icon
            );
        }
    }

    #[test]
    fn experience_is_newest_first() {
        let years: Vec<u32> = EXPERIENCE
            .iter()
            .map(|entry| entry.start_year().expect("start year"))
            .collect();
        assert_eq!(years, vec![2019, 2017, 2015]);
    }

    #[test]
    fn newest_first_reorders_and_sinks_undated() {
        let entry = |years| ExperienceEntry { years, role: "r", organization: "o", description: "d" };
        let entries = [entry("2015 - 2017"), entry("Sin fecha"), entry("2019 - Presente"), entry("2017 - 2019")];
        let years: Vec<_> = newest_first(&entries).iter().map(|e| e.years).collect();
        assert_eq!(years, vec!["2019 - Presente", "2017 - 2019", "2015 - 2017", "Sin fecha"]);
    }

    #[test]
    fn start_year_ignores_open_ended_range() {
        let entry = ExperienceEntry {
            years: "2019 - Presente",
            role: "r",
            organization: "o",
            description: "d",
        };
        assert_eq!(entry.start_year(), Some(2019));
    }

    #[test]
    fn no_empty_fields() {
        for entry in EXPERIENCE {
            for field in [entry.years, entry.role, entry.organization, entry.description] {
                assert!(!field.is_empty());
            }
        }
        for t in TESTIMONIALS {
            for field in [t.quote, t.author, t.role] {
                assert!(!field.is_empty());
            }
        }
        for h in HIGHLIGHTS {
            assert!(!h.title.is_empty() && !h.body.is_empty());
        }
        assert!(!EDUCATION.degree.is_empty() && !EDUCATION.institution.is_empty());
    }
}
