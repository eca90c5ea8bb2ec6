/// Vertical scroll offset, in pixels, past which the nav bar turns solid.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

pub const OWNER_FULL_NAME: &str = "Ariadna Miroslava García Carabez";
pub const OWNER_SHORT_NAME: &str = "Ariadna Garcia";

pub const CONTACT_EMAIL: &str = "contacto@ariadnagarcia.com";
pub const CONTACT_PHONE: &str = "(555) 123-4567";
pub const CONTACT_LOCATION: &str = "Ciudad de México, MX";
pub const MAIL_SUBJECT: &str = "Consulta sobre educación especial";

pub fn mailto_href(email: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", email, urlencoding::encode(subject))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_subject() {
        let href = mailto_href(CONTACT_EMAIL, "Hola, ¿qué tal?");
        assert!(href.starts_with("mailto:contacto@ariadnagarcia.com?subject="));
        assert!(!href.contains(' '));
        assert!(href.contains("%C2%BF"));
    }
}
