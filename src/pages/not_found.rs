use yew::prelude::*;
use yew_router::components::Link;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Página no encontrada"}</h1>
            <p>{"La página que buscas no existe o fue movida."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Volver al inicio"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    padding: 0 1.5rem;
                    text-align: center;
                    background: var(--slate-50);
                }
                .not-found h1 {
                    font-family: var(--font-serif);
                    font-size: 2.25rem;
                    font-weight: 400;
                    color: var(--slate-900);
                    margin: 0;
                }
                .not-found-link {
                    padding: 0.75rem 2rem;
                    background: var(--teal-600);
                    color: #ffffff;
                    border-radius: 9999px;
                    font-weight: 600;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
