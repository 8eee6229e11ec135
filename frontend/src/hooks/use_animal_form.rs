use yew::prelude::*;
use shared::{Animal, AnimalFormData, FieldErrors};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct AnimalFormState {
    pub fields: AnimalFormData,
    pub errors: FieldErrors,
    pub submitting: bool,
}

pub struct UseAnimalFormResult {
    pub state: AnimalFormState,
    pub actions: UseAnimalFormActions,
}

#[derive(Clone, PartialEq)]
pub struct UseAnimalFormActions {
    pub on_nome_change: Callback<Event>,
    pub on_descricao_change: Callback<Event>,
    pub on_data_nascimento_change: Callback<Event>,
    pub on_especie_change: Callback<Event>,
    pub on_habitat_change: Callback<Event>,
    pub on_pais_origem_change: Callback<Event>,
    pub submit: Callback<()>,
}

/// Form controller for the animal form. Pre-fills from the record selected
/// for editing; a successful submission resets the fields and emits
/// `on_success` so the list refetches.
#[hook]
pub fn use_animal_form(
    api_client: &ApiClient,
    editing: Option<Animal>,
    on_success: Callback<()>,
) -> UseAnimalFormResult {
    let fields = use_state(AnimalFormData::default);
    let errors = use_state(FieldErrors::default);
    let submitting = use_state(|| false);

    // Pre-fill every field when a record is selected for editing
    use_effect_with(editing.clone(), {
        let fields = fields.clone();
        let errors = errors.clone();

        move |editing: &Option<Animal>| {
            if let Some(animal) = editing {
                fields.set(AnimalFormData::from(animal));
                errors.set(FieldErrors::new());
            }
            || ()
        }
    });

    let on_nome_change = {
        let fields = fields.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*fields).clone();
            updated.nome = input.value();
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

    let on_data_nascimento_change = {
        let fields = fields.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*fields).clone();
            updated.data_nascimento = input.value();
            fields.set(updated);
        })
    };

    let on_especie_change = {
        let fields = fields.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*fields).clone();
            updated.especie = input.value();
            fields.set(updated);
        })
    };

    let on_habitat_change = {
        let fields = fields.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*fields).clone();
            updated.habitat = input.value();
            fields.set(updated);
        })
    };

    let on_pais_origem_change = {
        let fields = fields.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*fields).clone();
            updated.pais_origem = input.value();
            fields.set(updated);
        })
    };

    let submit = {
        let api_client = api_client.clone();
        let fields = fields.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let on_success = on_success.clone();

        use_callback(editing, move |_, editing: &Option<Animal>| {
            let api_client = api_client.clone();
            let fields = fields.clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            let editing = editing.clone();
            let on_success = on_success.clone();

            spawn_local(async move {
                // Invalid input never reaches the backend
                let validated = match (*fields).validate() {
                    Ok(validated) => validated,
                    Err(field_errors) => {
                        errors.set(field_errors);
                        return;
                    }
                };

                errors.set(FieldErrors::new());
                submitting.set(true);

                match api_client.save_animal(validated.save_for(editing.as_ref())).await {
                    Ok(()) => {
                        fields.set(AnimalFormData::default());
                        on_success.emit(());
                    }
                    Err(e) => {
                        // The unsaved input stays in the form
                        gloo::console::error!("Erro ao salvar animal:", e);
                    }
                }

                submitting.set(false);
            });
        })
    };

    let state = AnimalFormState {
        fields: (*fields).clone(),
        errors: (*errors).clone(),
        submitting: *submitting,
    };

    let actions = UseAnimalFormActions {
        on_nome_change,
        on_descricao_change,
        on_data_nascimento_change,
        on_especie_change,
        on_habitat_change,
        on_pais_origem_change,
        submit,
    };

    UseAnimalFormResult { state, actions }
}
