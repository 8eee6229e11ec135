use yew::prelude::*;

/// Top-level pages of the admin client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Animais,
    Cuidados,
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current_page: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav_link = |page: Page, label: &'static str| -> Html {
        let on_navigate = props.on_navigate.clone();
        let class = if props.current_page == page {
            "nav-link active"
        } else {
            "nav-link"
        };

        html! {
            <button
                class={class}
                onclick={Callback::from(move |_| on_navigate.emit(page))}
            >
                {label}
            </button>
        }
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Administração do Zoológico"}</h1>
                <nav class="nav">
                    {nav_link(Page::Animais, "Animais")}
                    {nav_link(Page::Cuidados, "Cuidados")}
                </nav>
            </div>
        </header>
    }
}
