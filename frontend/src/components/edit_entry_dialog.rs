use shared::{DialogPhase, EditDialogState, Entry, EntryType, OnUpdate, SubmitOutcome, UpdateError, UpdateTicket};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::services::logging::Logger;

const COMPONENT: &str = "EditEntryDialog";

#[derive(Properties, PartialEq)]
pub struct EditEntryDialogProps {
    pub entry: Entry,
    pub on_update: OnUpdate,
    /// Receives rejected updates; they are logged when this is not set
    #[prop_or_default]
    pub on_error: Option<Callback<UpdateError>>,
}

#[function_component(EditEntryDialog)]
pub fn edit_entry_dialog(props: &EditEntryDialogProps) -> Html {
    let dialog = use_mut_ref(|| EditDialogState::new(props.entry.clone()));
    let refresh = use_force_update();
    let backdrop_ref = use_node_ref();
    let is_open = dialog.borrow().is_open();

    // Later openings start from the latest entry
    use_effect_with(props.entry.clone(), {
        let dialog = dialog.clone();
        move |entry| {
            dialog.borrow_mut().set_entry(entry.clone());
            || ()
        }
    });

    // Focus the backdrop on open so Escape reaches it before any field is touched
    use_effect_with(is_open, {
        let backdrop_ref = backdrop_ref.clone();
        move |is_open| {
            if *is_open {
                if let Some(backdrop) = backdrop_ref.cast::<HtmlElement>() {
                    let _ = backdrop.focus();
                }
            }
            || ()
        }
    });

    let on_open = {
        let dialog = dialog.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            dialog.borrow_mut().open();
            refresh.force_update();
        })
    };

    let cancel = {
        let dialog = dialog.clone();
        let refresh = refresh.clone();
        Callback::from(move |()| {
            if dialog.borrow_mut().cancel() {
                refresh.force_update();
            }
        })
    };

    let on_cancel = cancel.reform(|_: MouseEvent| ());

    let on_backdrop_click = {
        let cancel = cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cancel.emit(());
        })
    };

    let on_backdrop_keydown = {
        let cancel = cancel.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cancel.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_type_change = {
        let dialog = dialog.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<EntryType>() {
                Ok(entry_type) => {
                    dialog.borrow_mut().set_entry_type(entry_type);
                    refresh.force_update();
                }
                Err(e) => Logger::warn_with_component(COMPONENT, &e.to_string()),
            }
        })
    };

    let on_category_change = {
        let dialog = dialog.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dialog.borrow_mut().set_category(&select.value());
            refresh.force_update();
        })
    };

    let on_amount_input = {
        let dialog = dialog.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dialog.borrow_mut().set_amount(input.value());
            refresh.force_update();
        })
    };

    let on_date_input = {
        let dialog = dialog.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dialog.borrow_mut().set_date(input.value());
            refresh.force_update();
        })
    };

    let on_description_input = {
        let dialog = dialog.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dialog.borrow_mut().set_description(input.value());
            refresh.force_update();
        })
    };

    let on_save = {
        let dialog = dialog.clone();
        let refresh = refresh.clone();
        let on_update = props.on_update.clone();
        let on_error = props.on_error.clone();

        Callback::from(move |_: MouseEvent| {
            // Incomplete draft or an update already in flight
            let Some(ticket) = UpdateTicket::acquire(&dialog) else {
                Logger::debug_with_component(COMPONENT, "Save ignored");
                return;
            };

            let entry_id = ticket.request().id.clone();
            Logger::info_with_component(COMPONENT, &format!("Updating entry {}", entry_id));
            refresh.force_update();

            let refresh = refresh.clone();
            let on_update = on_update.clone();
            let on_error = on_error.clone();

            spawn_local(async move {
                let outcome = ticket.run(&on_update).await;
                refresh.force_update();

                match outcome {
                    Ok(SubmitOutcome::Saved(_)) => {
                        Logger::info_with_component(COMPONENT, &format!("Entry {} updated", entry_id));
                    }
                    Ok(SubmitOutcome::Declined) => {
                        Logger::warn_with_component(COMPONENT, &format!("Update of entry {} was declined", entry_id));
                    }
                    Ok(SubmitOutcome::NotSubmitted) => {}
                    Err(error) => match &on_error {
                        Some(on_error) => on_error.emit(error),
                        None => Logger::error_with_component(
                            COMPONENT,
                            &format!("Update of entry {} failed: {}", entry_id, error),
                        ),
                    },
                }
            });
        })
    };

    let trigger = html! {
        <button type="button" class="btn btn-ghost edit-entry-trigger" title="Editar" onclick={on_open}>
            {"✏️"}
        </button>
    };

    let state = dialog.borrow();
    let Some(draft) = state.draft().cloned() else {
        return trigger;
    };
    let is_updating = state.phase() == DialogPhase::Updating;
    let category_options = state.category_options();
    drop(state);

    html! {
        <>
            {trigger}
            <div
                ref={backdrop_ref}
                class="edit-entry-modal-backdrop"
                tabindex="-1"
                onclick={on_backdrop_click}
                onkeydown={on_backdrop_keydown}
            >
                <div class="edit-entry-modal" role="dialog" aria-modal="true" onclick={on_modal_click}>
                    <div class="edit-entry-modal-header">
                        <h3 class="edit-entry-title">{"Editar Entrada"}</h3>
                        <p class="edit-entry-description">{"Modifica los datos de la entrada seleccionada."}</p>
                    </div>

                    <div class="edit-entry-form">
                        <div class="form-group">
                            <label for="edit-type">{"Tipo"}</label>
                            <select id="edit-type" onchange={on_type_change} disabled={is_updating}>
                                {for EntryType::ALL.iter().map(|entry_type| html! {
                                    <option
                                        value={entry_type.as_str()}
                                        selected={*entry_type == draft.entry_type}
                                    >
                                        {entry_type.label()}
                                    </option>
                                })}
                            </select>
                        </div>

                        <div class="form-group">
                            <label for="edit-category">{"Categoría"}</label>
                            <select id="edit-category" onchange={on_category_change} disabled={is_updating}>
                                <option value="" disabled=true selected={draft.category.is_empty()}></option>
                                {for category_options.iter().map(|category| html! {
                                    <option
                                        value={*category}
                                        selected={*category == draft.category}
                                    >
                                        {*category}
                                    </option>
                                })}
                            </select>
                        </div>

                        <div class="form-group">
                            <label for="edit-amount">{"Monto"}</label>
                            <input
                                id="edit-amount"
                                type="number"
                                value={draft.amount.clone()}
                                oninput={on_amount_input}
                                disabled={is_updating}
                            />
                        </div>

                        <div class="form-group">
                            <label for="edit-date">{"Fecha"}</label>
                            <input
                                id="edit-date"
                                type="date"
                                value={draft.date.clone()}
                                oninput={on_date_input}
                                disabled={is_updating}
                            />
                        </div>

                        <div class="form-group">
                            <label for="edit-description">{"Descripción"}</label>
                            <input
                                id="edit-description"
                                type="text"
                                placeholder="Opcional"
                                value={draft.description.clone()}
                                oninput={on_description_input}
                                disabled={is_updating}
                            />
                        </div>
                    </div>

                    <div class="edit-entry-buttons">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={on_cancel}
                            disabled={is_updating}
                        >
                            {"Cancelar"}
                        </button>
                        <button
                            type="button"
                            class="btn btn-primary"
                            onclick={on_save}
                            disabled={is_updating}
                        >
                            {if is_updating {
                                "Actualizando..."
                            } else {
                                "Guardar Cambios"
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </>
    }
}
