use yew::prelude::*;
use crate::hooks::use_animais::use_animais;
use crate::hooks::use_animal_form::use_animal_form;
use crate::services::api::ApiClient;
use super::animal_form::AnimalForm;
use super::animal_table::AnimalTable;

/// Animal page: form on top, table below, both driven by the same list
/// controller.
#[function_component(AnimalViewContainer)]
pub fn animal_view_container() -> Html {
    let api_client = ApiClient::new();
    let animais = use_animais(&api_client);

    // A saved record means refetch and leave edit mode
    let on_success = {
        let refresh = animais.actions.refresh.clone();
        let clear_editing = animais.actions.clear_editing.clone();
        Callback::from(move |_| {
            refresh.emit(());
            clear_editing.emit(());
        })
    };

    let form = use_animal_form(&api_client, animais.state.editing_animal.clone(), on_success);

    html! {
        <div class="animais-page">
            <h2>{"Animais"}</h2>

            <AnimalForm
                fields={form.state.fields.clone()}
                errors={form.state.errors.clone()}
                submitting={form.state.submitting}
                editing={animais.state.editing_animal.is_some()}
                on_nome_change={form.actions.on_nome_change.clone()}
                on_descricao_change={form.actions.on_descricao_change.clone()}
                on_data_nascimento_change={form.actions.on_data_nascimento_change.clone()}
                on_especie_change={form.actions.on_especie_change.clone()}
                on_habitat_change={form.actions.on_habitat_change.clone()}
                on_pais_origem_change={form.actions.on_pais_origem_change.clone()}
                on_submit={form.actions.submit.clone()}
            />

            <AnimalTable
                animais={animais.state.animais.clone()}
                loading={animais.state.loading}
                on_edit={animais.actions.select_for_edit.clone()}
                on_delete={animais.actions.delete_animal.clone()}
            />
        </div>
    }
}
