use yew::prelude::*;
use web_sys::HtmlSelectElement;
use crate::hooks::use_cuidado_form::use_cuidado_form;
use crate::hooks::use_cuidados::use_cuidados;
use crate::services::api::ApiClient;
use super::cuidado_form::CuidadoForm;
use super::cuidado_table::CuidadoTable;

/// Care-records page: animal scope selector, then the form and the scoped
/// table. The form only appears once an animal is selected.
#[function_component(CuidadoViewContainer)]
pub fn cuidado_view_container() -> Html {
    let api_client = ApiClient::new();
    let cuidados = use_cuidados(&api_client);

    // A saved record means refetch and leave edit mode
    let on_success = {
        let refresh = cuidados.actions.refresh.clone();
        let clear_editing = cuidados.actions.clear_editing.clone();
        Callback::from(move |_| {
            refresh.emit(());
            clear_editing.emit(());
        })
    };

    let form = use_cuidado_form(
        &api_client,
        cuidados.state.editing_cuidado.clone(),
        cuidados.state.selected_animal_id.clone(),
        cuidados.state.animais.clone(),
        on_success,
    );

    let on_scope_change = {
        let select_animal = cuidados.actions.select_animal.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            select_animal.emit(select.value());
        })
    };

    let scope_selected = !cuidados.state.selected_animal_id.is_empty();

    html! {
        <div class="cuidados-page">
            <h2>{"Cuidados"}</h2>

            <div class="form-group">
                <label for="animal-escopo">{"Selecione o animal"}</label>
                <select
                    id="animal-escopo"
                    value={cuidados.state.selected_animal_id.clone()}
                    onchange={on_scope_change}
                >
                    <option value="" selected={!scope_selected}>
                        {"Selecione um animal"}
                    </option>
                    {for cuidados.state.animais.iter().map(|animal| {
                        html! {
                            <option
                                value={animal.id.clone()}
                                selected={animal.id == cuidados.state.selected_animal_id}
                            >
                                {&animal.nome}
                            </option>
                        }
                    })}
                </select>
            </div>

            {if scope_selected && !cuidados.state.animais.is_empty() {
                html! {
                    <CuidadoForm
                        fields={form.state.fields.clone()}
                        errors={form.state.errors.clone()}
                        submitting={form.state.submitting}
                        editing={cuidados.state.editing_cuidado.is_some()}
                        animais={cuidados.state.animais.clone()}
                        on_animal_change={form.actions.on_animal_change.clone()}
                        on_nome_change={form.actions.on_nome_change.clone()}
                        on_descricao_change={form.actions.on_descricao_change.clone()}
                        on_frequencia_change={form.actions.on_frequencia_change.clone()}
                        on_submit={form.actions.submit.clone()}
                    />
                }
            } else { html! {} }}

            {if scope_selected {
                html! {
                    <CuidadoTable
                        cuidados={cuidados.state.cuidados.clone()}
                        loading={cuidados.state.loading}
                        on_edit={cuidados.actions.select_for_edit.clone()}
                        on_delete={cuidados.actions.delete_cuidado.clone()}
                    />
                }
            } else { html! {} }}
        </div>
    }
}
