use yew::prelude::*;
use shared::{Animal, Cuidado, CuidadoFormData, FieldErrors};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct CuidadoFormState {
    pub fields: CuidadoFormData,
    pub errors: FieldErrors,
    pub submitting: bool,
}

pub struct UseCuidadoFormResult {
    pub state: CuidadoFormState,
    pub actions: UseCuidadoFormActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCuidadoFormActions {
    pub on_animal_change: Callback<Event>,
    pub on_nome_change: Callback<Event>,
    pub on_descricao_change: Callback<Event>,
    pub on_frequencia_change: Callback<Event>,
    pub submit: Callback<()>,
}

/// Form controller for the care-record form. In create mode the animal
/// reference is pre-filled from the selected scope; in edit mode every field
/// comes from the record. Updates never send the animal reference.
#[hook]
pub fn use_cuidado_form(
    api_client: &ApiClient,
    editing: Option<Cuidado>,
    selected_animal_id: String,
    animais: Vec<Animal>,
    on_success: Callback<()>,
) -> UseCuidadoFormResult {
    let fields = use_state(CuidadoFormData::default);
    let errors = use_state(FieldErrors::default);
    let submitting = use_state(|| false);

    // Re-initialize when the editing record or the scope changes: edit mode
    // pre-fills from the record, create mode starts clean with the scope's
    // animal pre-selected
    use_effect_with((editing.clone(), selected_animal_id.clone()), {
        let fields = fields.clone();
        let errors = errors.clone();

        move |(editing, selected_animal_id): &(Option<Cuidado>, String)| {
            match editing {
                Some(cuidado) => {
                    fields.set(CuidadoFormData::from(cuidado));
                }
                None => {
                    fields.set(CuidadoFormData {
                        animal_id: selected_animal_id.clone(),
                        ..CuidadoFormData::default()
                    });
                }
            }
            errors.set(FieldErrors::new());
            || ()
        }
    });

    let on_animal_change = {
        let fields = fields.clone();
        use_callback((), move |e: Event, _| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut updated = (*fields).clone();
            updated.animal_id = select.value();
            fields.set(updated);
        })
    };

    let on_nome_change = {
        let fields = fields.clone();
        use_callback((), move |e: Event, _| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut updated = (*fields).clone();
            updated.nome = select.value();
            fields.set(updated);
        })
    };

    let on_descricao_change = {
        let fields = fields.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*fields).clone();
            updated.descricao = input.value();
            fields.set(updated);
        })
    };

    let on_frequencia_change = {
        let fields = fields.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*fields).clone();
            updated.frequencia = input.value();
            fields.set(updated);
        })
    };

    let submit = {
        let api_client = api_client.clone();
        let fields = fields.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let on_success = on_success.clone();

        use_callback((editing, animais), move |_, deps: &(Option<Cuidado>, Vec<Animal>)| {
            let (editing, animais) = deps.clone();
            let api_client = api_client.clone();
            let fields = fields.clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            let on_success = on_success.clone();

            spawn_local(async move {
                // Invalid input never reaches the backend
                let validated = match (*fields).validate(&animais) {
                    Ok(validated) => validated,
                    Err(field_errors) => {
                        errors.set(field_errors);
                        return;
                    }
                };

                errors.set(FieldErrors::new());
                submitting.set(true);

                match api_client.save_cuidado(validated.save_for(editing.as_ref())).await {
                    Ok(()) => {
                        fields.set(CuidadoFormData::default());
                        on_success.emit(());
                    }
                    Err(e) => {
                        // The unsaved input stays in the form
                        gloo::console::error!("Erro ao salvar cuidado:", e);
                    }
                }

                submitting.set(false);
            });
        })
    };

    let state = CuidadoFormState {
        fields: (*fields).clone(),
        errors: (*errors).clone(),
        submitting: *submitting,
    };

    let actions = UseCuidadoFormActions {
        on_animal_change,
        on_nome_change,
        on_descricao_change,
        on_frequencia_change,
        submit,
    };

    UseCuidadoFormResult { state, actions }
}
