use yew::prelude::*;
use shared::Cuidado;

#[derive(Properties, PartialEq)]
pub struct CuidadoTableProps {
    pub cuidados: Vec<Cuidado>,
    pub loading: bool,
    pub on_edit: Callback<Cuidado>,
    pub on_delete: Callback<String>,
}

#[function_component(CuidadoTable)]
pub fn cuidado_table(props: &CuidadoTableProps) -> Html {
    html! {
        <section class="cuidados-section">
            {if props.loading {
                html! { <div class="loading">{"Carregando cuidados..."}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="cuidados-table">
                            <thead>
                                <tr>
                                    <th>{"Nome"}</th>
                                    <th>{"Descrição"}</th>
                                    <th>{"Frequência"}</th>
                                    <th>{"Ações"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.cuidados.iter().map(|cuidado| {
                                    let on_edit = {
                                        let on_edit = props.on_edit.clone();
                                        let cuidado = cuidado.clone();
                                        Callback::from(move |_| on_edit.emit(cuidado.clone()))
                                    };
                                    let on_delete = {
                                        let on_delete = props.on_delete.clone();
                                        let id = cuidado.id.clone();
                                        Callback::from(move |_| on_delete.emit(id.clone()))
                                    };

                                    html! {
                                        <tr>
                                            <td>{&cuidado.nome}</td>
                                            <td>{&cuidado.descricao}</td>
                                            <td>{&cuidado.frequencia}</td>
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
                                {if props.cuidados.is_empty() {
                                    html! {
                                        <tr>
                                            <td colspan="4" class="empty">
                                                {"Nenhum cuidado cadastrado."}
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
