use yew::prelude::*;
use shared::{AnimalFormData, FieldErrors};

#[derive(Properties, PartialEq)]
pub struct AnimalFormProps {
    // Form state
    pub fields: AnimalFormData,
    pub errors: FieldErrors,
    pub submitting: bool,
    pub editing: bool,

    // Event handlers
    pub on_nome_change: Callback<Event>,
    pub on_descricao_change: Callback<Event>,
    pub on_data_nascimento_change: Callback<Event>,
    pub on_especie_change: Callback<Event>,
    pub on_habitat_change: Callback<Event>,
    pub on_pais_origem_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

fn field_error(errors: &FieldErrors, field: &str) -> Html {
    match errors.get(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

#[function_component(AnimalForm)]
pub fn animal_form(props: &AnimalFormProps) -> Html {
    html! {
        <form class="animal-form" onsubmit={
            let on_submit = props.on_submit.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                on_submit.emit(());
            })
        }>
            <div class="form-group">
                <label for="nome">{"Nome"}</label>
                <input
                    type="text"
                    id="nome"
                    placeholder="Nome"
                    value={props.fields.nome.clone()}
                    onchange={props.on_nome_change.clone()}
                    disabled={props.submitting}
                />
                {field_error(&props.errors, "nome")}
            </div>

            <div class="form-group">
                <label for="descricao">{"Descrição"}</label>
                <input
                    type="text"
                    id="descricao"
                    placeholder="Descrição"
                    value={props.fields.descricao.clone()}
                    onchange={props.on_descricao_change.clone()}
                    disabled={props.submitting}
                />
                {field_error(&props.errors, "descricao")}
            </div>

            <div class="form-group">
                <label for="data-nascimento">{"Data de nascimento"}</label>
                <input
                    type="date"
                    id="data-nascimento"
                    value={props.fields.data_nascimento.clone()}
                    onchange={props.on_data_nascimento_change.clone()}
                    disabled={props.submitting}
                />
                {field_error(&props.errors, "data_nascimento")}
            </div>

            <div class="form-group">
                <label for="especie">{"Espécie"}</label>
                <input
                    type="text"
                    id="especie"
                    placeholder="Espécie"
                    value={props.fields.especie.clone()}
                    onchange={props.on_especie_change.clone()}
                    disabled={props.submitting}
                />
                {field_error(&props.errors, "especie")}
            </div>

            <div class="form-group">
                <label for="habitat">{"Habitat"}</label>
                <input
                    type="text"
                    id="habitat"
                    placeholder="Habitat"
                    value={props.fields.habitat.clone()}
                    onchange={props.on_habitat_change.clone()}
                    disabled={props.submitting}
                />
                {field_error(&props.errors, "habitat")}
            </div>

            <div class="form-group">
                <label for="pais-origem">{"País de origem"}</label>
                <input
                    type="text"
                    id="pais-origem"
                    placeholder="País"
                    value={props.fields.pais_origem.clone()}
                    onchange={props.on_pais_origem_change.clone()}
                    disabled={props.submitting}
                />
                {field_error(&props.errors, "pais_origem")}
            </div>

            <button
                type="submit"
                class="btn btn-primary"
                disabled={props.submitting}
            >
                {if props.submitting {
                    "Salvando..."
                } else if props.editing {
                    "Atualizar"
                } else {
                    "Cadastrar"
                }}
            </button>
        </form>
    }
}
