use yew::prelude::*;
use shared::{Animal, Cuidado};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct CuidadosState {
    /// Animals available as the scope selector options
    pub animais: Vec<Animal>,
    /// Currently selected scope; empty means no animal selected
    pub selected_animal_id: String,
    pub cuidados: Vec<Cuidado>,
    pub loading: bool,
    pub editing_cuidado: Option<Cuidado>,
}

pub struct UseCuidadosResult {
    pub state: CuidadosState,
    pub actions: UseCuidadosActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCuidadosActions {
    pub refresh: Callback<()>,
    pub select_animal: Callback<String>,
    pub select_for_edit: Callback<Cuidado>,
    pub clear_editing: Callback<()>,
    pub delete_cuidado: Callback<String>,
}

/// List controller for care records, scoped to the selected animal. The
/// animal list itself is fetched once on mount and only feeds the selector.
#[hook]
pub fn use_cuidados(api_client: &ApiClient) -> UseCuidadosResult {
    let animais = use_state(Vec::<Animal>::new);
    let selected_animal_id = use_state(String::new);
    let cuidados = use_state(Vec::<Cuidado>::new);
    let loading = use_state(|| false);
    let editing_cuidado = use_state(|| Option::<Cuidado>::None);

    // An empty scope empties the collection without a remote call
    let refresh = {
        let api_client = api_client.clone();
        let selected_animal_id = selected_animal_id.clone();
        let cuidados = cuidados.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let animal_id = (*selected_animal_id).clone();
            if animal_id.is_empty() {
                cuidados.set(Vec::new());
                return;
            }

            let api_client = api_client.clone();
            let cuidados = cuidados.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.list_cuidados(&animal_id).await {
                    Ok(data) => {
                        cuidados.set(data);
                    }
                    Err(e) => {
                        gloo::console::error!("Erro ao buscar cuidados:", e);
                    }
                }

                loading.set(false);
            });
        })
    };

    let select_animal = {
        let selected_animal_id = selected_animal_id.clone();
        use_callback((), move |animal_id: String, _| {
            selected_animal_id.set(animal_id);
        })
    };

    let select_for_edit = {
        let editing_cuidado = editing_cuidado.clone();
        use_callback((), move |cuidado: Cuidado, _| {
            editing_cuidado.set(Some(cuidado));
        })
    };

    let clear_editing = {
        let editing_cuidado = editing_cuidado.clone();
        use_callback((), move |_, _| {
            editing_cuidado.set(None);
        })
    };

    // Reload happens only after a successful delete acknowledgment
    let delete_cuidado = {
        let api_client = api_client.clone();
        let refresh = refresh.clone();

        use_callback((), move |id: String, _| {
            let api_client = api_client.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match api_client.delete_cuidado(&id).await {
                    Ok(()) => {
                        refresh.emit(());
                    }
                    Err(e) => {
                        gloo::console::error!("Erro ao deletar cuidado:", e);
                    }
                }
            });
        })
    };

    // Load the animal list once on mount
    use_effect_with((), {
        let api_client = api_client.clone();
        let animais = animais.clone();

        move |_| {
            spawn_local(async move {
                match api_client.list_animals().await {
                    Ok(data) => {
                        animais.set(data);
                    }
                    Err(e) => {
                        gloo::console::error!("Erro ao buscar animais:", e);
                    }
                }
            });
            || ()
        }
    });

    // Changing the scope discards the old collection and any in-progress
    // edit before loading the new one (runs on mount too, with the empty
    // selection)
    use_effect_with(selected_animal_id.clone(), {
        let cuidados = cuidados.clone();
        let editing_cuidado = editing_cuidado.clone();
        let refresh = refresh.clone();

        move |_| {
            cuidados.set(Vec::new());
            editing_cuidado.set(None);
            refresh.emit(());
            || ()
        }
    });

    let state = CuidadosState {
        animais: (*animais).clone(),
        selected_animal_id: (*selected_animal_id).clone(),
        cuidados: (*cuidados).clone(),
        loading: *loading,
        editing_cuidado: (*editing_cuidado).clone(),
    };

    let actions = UseCuidadosActions {
        refresh,
        select_animal,
        select_for_edit,
        clear_editing,
        delete_cuidado,
    };

    UseCuidadosResult { state, actions }
}
