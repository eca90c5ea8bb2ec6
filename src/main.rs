use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use stylist::css;
use stylist::yew::Global;

mod config;
mod content;
mod nav;
mod components {
    pub mod icons;
    pub mod service_card;
    pub mod experience_item;
    pub mod testimonial_card;
    pub mod floating_blobs;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{
    home::Home,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Global css={css!(r#"
                :root {
                    --font-sans: "Inter", system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
                    --font-serif: "Playfair Display", Georgia, "Times New Roman", serif;
                    --slate-50: #f8fafc;
                    --slate-100: #f1f5f9;
                    --slate-200: #e2e8f0;
                    --slate-300: #cbd5e1;
                    --slate-400: #94a3b8;
                    --slate-500: #64748b;
                    --slate-600: #475569;
                    --slate-700: #334155;
                    --slate-800: #1e293b;
                    --slate-900: #0f172a;
                    --teal-50: #f0fdfa;
                    --teal-100: #ccfbf1;
                    --teal-200: #99f6e4;
                    --teal-300: #5eead4;
                    --teal-400: #2dd4bf;
                    --teal-500: #14b8a6;
                    --teal-600: #0d9488;
                    --teal-700: #0f766e;
                    --teal-800: #115e59;
                    --teal-900: #134e4a;
                    --brand-50: #eff6ff;
                    --brand-100: #dbeafe;
                    --brand-200: #bfdbfe;
                    --brand-400: #60a5fa;
                    --brand-500: #3b82f6;
                    --brand-600: #2563eb;
                    --brand-800: #1e40af;
                    --sage-100: #e2ecdf;
                    --sage-400: #8fae86;
                    --sage-600: #5b7b53;
                }
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: var(--font-sans);
                    -webkit-font-smoothing: antialiased;
                }
            "#)} />
            // basename comes from the <base> tag Trunk writes for public_url
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    #[cfg(debug_assertions)]
    let level = Level::Debug;
    #[cfg(not(debug_assertions))]
    let level = Level::Info;
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
