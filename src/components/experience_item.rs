use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExperienceItemProps {
    pub year: AttrValue,
    pub role: AttrValue,
    pub org: AttrValue,
    pub desc: AttrValue,
}

#[function_component(ExperienceItem)]
pub fn experience_item(props: &ExperienceItemProps) -> Html {
    html! {
        <div class="experience-item">
            <div class="experience-dot"></div>
            <span class="experience-years">{&props.year}</span>
            <h3>{&props.role}</h3>
            <div class="experience-org">{&props.org}</div>
            <p>{&props.desc}</p>
        </div>
    }
}
