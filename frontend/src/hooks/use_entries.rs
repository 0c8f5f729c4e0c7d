use std::rc::Rc;

use shared::{Entry, OnUpdate};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "use_entries";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntriesState {
    pub entries: Vec<Entry>,
    pub loading: bool,
    pub error: Option<String>,
}

pub enum EntriesAction {
    Loading,
    Loaded(Vec<Entry>),
    Failed(String),
    /// An entry came back from a successful update
    Replaced(Entry),
}

impl Reducible for EntriesState {
    type Action = EntriesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            EntriesAction::Loading => {
                next.loading = true;
                next.error = None;
            }
            EntriesAction::Loaded(entries) => {
                next.entries = entries;
                next.loading = false;
            }
            EntriesAction::Failed(error) => {
                next.loading = false;
                next.error = Some(error);
            }
            EntriesAction::Replaced(entry) => {
                if let Some(slot) = next.entries.iter_mut().find(|e| e.id == entry.id) {
                    *slot = entry;
                }
            }
        }
        next.into()
    }
}

pub struct UseEntriesResult {
    pub state: EntriesState,
    pub actions: UseEntriesActions,
}

#[derive(Clone, PartialEq)]
pub struct UseEntriesActions {
    pub refresh_entries: Callback<()>,
    /// Update function for `EditEntryDialog`; replaces the row on success
    pub on_update: OnUpdate,
}

#[hook]
pub fn use_entries(api_client: &ApiClient) -> UseEntriesResult {
    let state = use_reducer(|| EntriesState {
        loading: true,
        ..EntriesState::default()
    });

    let refresh_entries = {
        let api_client = api_client.clone();
        let dispatcher = state.dispatcher();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();

            spawn_local(async move {
                dispatcher.dispatch(EntriesAction::Loading);

                match api_client.list_entries().await {
                    Ok(entries) => {
                        Logger::debug_with_component(COMPONENT, &format!("Loaded {} entries", entries.len()));
                        dispatcher.dispatch(EntriesAction::Loaded(entries));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Failed to fetch entries: {}", e));
                        dispatcher.dispatch(EntriesAction::Failed(e));
                    }
                }
            });
        })
    };

    // Built once so the dialogs' props stay equal across renders
    let on_update = {
        let api_client = api_client.clone();
        let dispatcher = state.dispatcher();

        use_memo((), move |_| {
            OnUpdate::new(move |id, patch| {
                let api_client = api_client.clone();
                let dispatcher = dispatcher.clone();

                async move {
                    let result = api_client.update_entry(&id, &patch).await;
                    if let Ok(Some(entry)) = &result {
                        dispatcher.dispatch(EntriesAction::Replaced(entry.clone()));
                    }
                    result
                }
            })
        })
    };

    {
        let refresh_entries = refresh_entries.clone();
        use_effect_with((), move |_| {
            refresh_entries.emit(());
            || ()
        });
    }

    UseEntriesResult {
        state: (*state).clone(),
        actions: UseEntriesActions {
            refresh_entries,
            on_update: (*on_update).clone(),
        },
    }
}
