use yew::prelude::*;
use shared::Animal;

#[derive(Properties, PartialEq)]
pub struct AnimalTableProps {
    pub animais: Vec<Animal>,
    pub loading: bool,
    pub on_edit: Callback<Animal>,
    pub on_delete: Callback<String>,
}

#[function_component(AnimalTable)]
pub fn animal_table(props: &AnimalTableProps) -> Html {
    html! {
        <section class="animais-section">
            {if props.loading {
                html! { <div class="loading">{"Carregando animais..."}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="animais-table">
                            <thead>
                                <tr>
                                    <th>{"Nome"}</th>
                                    <th>{"Espécie"}</th>
                                    <th>{"Habitat"}</th>
                                    <th>{"País"}</th>
                                    <th>{"Ações"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.animais.iter().map(|animal| {
                                    let on_edit = {
                                        let on_edit = props.on_edit.clone();
                                        let animal = animal.clone();
                                        Callback::from(move |_| on_edit.emit(animal.clone()))
                                    };
                                    let on_delete = {
                                        let on_delete = props.on_delete.clone();
                                        let id = animal.id.clone();
                                        Callback::from(move |_| on_delete.emit(id.clone()))
                                    };

                                    html! {
                                        <tr>
                                            <td>{&animal.nome}</td>
                                            <td>{&animal.especie}</td>
                                            <td>{&animal.habitat}</td>
                                            <td>{&animal.pais_origem}</td>
                                            <td class="actions">
                                                <button class="btn btn-edit" onclick={on_edit}>
                                                    {"Editar"}
                                                </button>
                                                <button class="btn btn-delete" onclick={on_delete}>
                                                    {"Excluir"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                                {if props.animais.is_empty() {
                                    html! {
                                        <tr>
                                            <td colspan="5" class="empty">
                                                {"Nenhum animal cadastrado."}
                                            </td>
                                        </tr>
                                    }
                                } else { html! {} }}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
