use yew::prelude::*;
use yew_router::prelude::*;

pub mod boot;
pub mod components;
pub mod config;
pub mod effects;
pub mod loading;
pub mod pages;
pub mod stage;
pub mod utils;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::landing::Landing /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"404"}</h1>
                <p>{"This page drifted out of the grid."}</p>
                <Link<Route> to={Route::Home} classes="forward-link">
                    {"Back to HACK HUB"}
                </Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

pub fn run() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
