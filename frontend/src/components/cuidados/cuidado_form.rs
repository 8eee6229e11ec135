use yew::prelude::*;
use shared::{Animal, CareKind, CuidadoFormData, FieldErrors};

#[derive(Properties, PartialEq)]
pub struct CuidadoFormProps {
    // Form state
    pub fields: CuidadoFormData,
    pub errors: FieldErrors,
    pub submitting: bool,
    pub editing: bool,
    pub animais: Vec<Animal>,

    // Event handlers
    pub on_animal_change: Callback<Event>,
    pub on_nome_change: Callback<Event>,
    pub on_descricao_change: Callback<Event>,
    pub on_frequencia_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

fn field_error(errors: &FieldErrors, field: &str) -> Html {
    match errors.get(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

#[function_component(CuidadoForm)]
pub fn cuidado_form(props: &CuidadoFormProps) -> Html {
    html! {
        <form class="cuidado-form" onsubmit={
            let on_submit = props.on_submit.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                on_submit.emit(());
            })
        }>
            <div class="form-group">
                <label for="cuidado-animal">{"Animal"}</label>
                <select
                    id="cuidado-animal"
                    value={props.fields.animal_id.clone()}
                    onchange={props.on_animal_change.clone()}
                    disabled={props.submitting}
                >
                    <option value="">{"Selecione um animal"}</option>
                    {for props.animais.iter().map(|animal| {
                        html! {
                            <option
                                value={animal.id.clone()}
                                selected={animal.id == props.fields.animal_id}
                            >
                                {&animal.nome}
                            </option>
                        }
                    })}
                </select>
                {field_error(&props.errors, "animal_id")}
            </div>

            <div class="form-group">
                <label for="cuidado-nome">{"Tipo de Cuidado"}</label>
                <select
                    id="cuidado-nome"
                    value={props.fields.nome.clone()}
                    onchange={props.on_nome_change.clone()}
                    disabled={props.submitting}
                >
                    <option value="">{"Selecione o cuidado"}</option>
                    {for CareKind::ALL.iter().map(|kind| {
                        html! {
                            <option
                                value={kind.label()}
                                selected={kind.label() == props.fields.nome}
                            >
                                {kind.label()}
                            </option>
                        }
                    })}
                </select>
                {field_error(&props.errors, "nome")}
            </div>

            <div class="form-group">
                <label for="cuidado-descricao">{"Descrição"}</label>
                <input
                    type="text"
                    id="cuidado-descricao"
                    placeholder="Descrição"
                    value={props.fields.descricao.clone()}
                    onchange={props.on_descricao_change.clone()}
                    disabled={props.submitting}
                />
                {field_error(&props.errors, "descricao")}
            </div>

            <div class="form-group">
                <label for="cuidado-frequencia">{"Frequência"}</label>
                <input
                    type="text"
                    id="cuidado-frequencia"
                    placeholder="Frequência (diária, semanal...)"
                    value={props.fields.frequencia.clone()}
                    onchange={props.on_frequencia_change.clone()}
                    disabled={props.submitting}
                />
                {field_error(&props.errors, "frequencia")}
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
