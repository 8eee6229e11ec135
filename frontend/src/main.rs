mod components;
mod hooks;
mod services;

use yew::prelude::*;
use components::animais::AnimalViewContainer;
use components::cuidados::CuidadoViewContainer;
use components::header::{Header, Page};

#[function_component(App)]
fn app() -> Html {
    let page = use_state(|| Page::Animais);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };

    html! {
        <>
            <Header current_page={*page} on_navigate={on_navigate} />

            <main class="main">
                <div class="container">
                    {match *page {
                        Page::Animais => html! { <AnimalViewContainer /> },
                        Page::Cuidados => html! { <CuidadoViewContainer /> },
                    }}
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
