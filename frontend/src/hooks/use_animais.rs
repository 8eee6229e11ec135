use yew::prelude::*;
use shared::Animal;
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct AnimaisState {
    pub animais: Vec<Animal>,
    pub loading: bool,
    pub editing_animal: Option<Animal>,
}

pub struct UseAnimaisResult {
    pub state: AnimaisState,
    pub actions: UseAnimaisActions,
}

#[derive(Clone, PartialEq)]
pub struct UseAnimaisActions {
    pub refresh: Callback<()>,
    pub select_for_edit: Callback<Animal>,
    pub clear_editing: Callback<()>,
    pub delete_animal: Callback<String>,
}

/// List controller for the animal collection: load on mount, refetch after
/// every mutation, track the record being edited.
#[hook]
pub fn use_animais(api_client: &ApiClient) -> UseAnimaisResult {
    let animais = use_state(Vec::<Animal>::new);
    let loading = use_state(|| true);
    let editing_animal = use_state(|| Option::<Animal>::None);

    // Refresh replaces the collection wholesale; on failure the previous
    // contents stay visible and the error is only logged
    let refresh = {
        let api_client = api_client.clone();
        let animais = animais.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let animais = animais.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.list_animals().await {
                    Ok(data) => {
                        animais.set(data);
                    }
                    Err(e) => {
                        gloo::console::error!("Erro ao buscar animais:", e);
                    }
                }

                loading.set(false);
            });
        })
    };

    let select_for_edit = {
        let editing_animal = editing_animal.clone();
        use_callback((), move |animal: Animal, _| {
            editing_animal.set(Some(animal));
        })
    };

    let clear_editing = {
        let editing_animal = editing_animal.clone();
        use_callback((), move |_, _| {
            editing_animal.set(None);
        })
    };

    // Reload happens only after a successful delete acknowledgment
    let delete_animal = {
        let api_client = api_client.clone();
        let refresh = refresh.clone();

        use_callback((), move |id: String, _| {
            let api_client = api_client.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match api_client.delete_animal(&id).await {
                    Ok(()) => {
                        refresh.emit(());
                    }
                    Err(e) => {
                        gloo::console::error!("Erro ao deletar animal:", e);
                    }
                }
            });
        })
    };

    // Initial load
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = AnimaisState {
        animais: (*animais).clone(),
        loading: *loading,
        editing_animal: (*editing_animal).clone(),
    };

    let actions = UseAnimaisActions {
        refresh,
        select_for_edit,
        clear_editing,
        delete_animal,
    };

    UseAnimaisResult { state, actions }
}
