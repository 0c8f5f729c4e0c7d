use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::EntryTable;
use hooks::{use_entries, UseEntriesResult};
use services::api::ApiClient;
use services::logging::Logger;
use shared::UpdateError;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let UseEntriesResult { state, actions } = use_entries(&api_client);
    let update_error = use_state(|| Option::<String>::None);

    let on_error = {
        let update_error = update_error.clone();
        Callback::from(move |error: UpdateError| {
            Logger::error_with_component("App", &format!("Entry update failed: {}", error));
            update_error.set(Some(error.to_string()));
        })
    };

    let on_refresh = {
        let refresh_entries = actions.refresh_entries.clone();
        let update_error = update_error.clone();
        Callback::from(move |_: MouseEvent| {
            update_error.set(None);
            refresh_entries.emit(());
        })
    };

    html! {
        <div class="app">
            <header class="header">
                <h1>{"Gastos e Ingresos"}</h1>
                <button class="btn btn-secondary" onclick={on_refresh} disabled={state.loading}>
                    {"Actualizar"}
                </button>
            </header>

            {if let Some(error) = state.error.as_ref().or((*update_error).as_ref()) {
                html! { <div class="form-message error">{error}</div> }
            } else {
                html! {}
            }}

            <EntryTable
                entries={state.entries.clone()}
                loading={state.loading}
                on_update={actions.on_update.clone()}
                on_error={on_error}
            />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
