use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub quote: AttrValue,
    pub author: AttrValue,
    pub role: AttrValue,
}

/// Avatar letter for an author. Works on chars, not bytes, so accented
/// initials survive.
pub fn author_initial(author: &str) -> char {
    author.trim().chars().next().unwrap_or('?')
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    html! {
        <div class="testimonial-card">
            <span class="testimonial-mark">{"\u{201C}"}</span>
            <p class="testimonial-quote">{&props.quote}</p>
            <div class="testimonial-author">
                <div class="testimonial-avatar">{author_initial(&props.author)}</div>
                <div>
                    <div class="testimonial-name">{&props.author}</div>
                    <div class="testimonial-role">{&props.role}</div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_first_char() {
        assert_eq!(author_initial("María S."), 'M');
        assert_eq!(author_initial("Ángela"), 'Á');
        assert_eq!(author_initial("  David L."), 'D');
    }

    #[test]
    fn empty_author_gets_placeholder() {
        assert_eq!(author_initial(""), '?');
        assert_eq!(author_initial("   "), '?');
    }
}
