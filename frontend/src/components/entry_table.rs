use yew::prelude::*;
use shared::{Entry, EntryType, OnUpdate, UpdateError};

use super::{DateDisplay, EditEntryDialog};

#[derive(Properties, PartialEq)]
pub struct EntryTableProps {
    pub entries: Vec<Entry>,
    pub loading: bool,
    pub on_update: OnUpdate,
    #[prop_or_default]
    pub on_error: Option<Callback<UpdateError>>,
}

#[function_component(EntryTable)]
pub fn entry_table(props: &EntryTableProps) -> Html {
    html! {
        <section class="entries-section">
            <h2>{"Entradas"}</h2>

            {if props.loading {
                html! { <div class="loading">{"Cargando entradas..."}</div> }
            } else if props.entries.is_empty() {
                html! { <div class="empty">{"No hay entradas"}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="entries-table">
                            <thead>
                                <tr>
                                    <th>{"Fecha"}</th>
                                    <th>{"Categoría"}</th>
                                    <th>{"Descripción"}</th>
                                    <th>{"Monto"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.entries.iter().map(|entry| {
                                    let amount_class = match entry.entry_type {
                                        EntryType::Expense => "amount negative",
                                        EntryType::Income => "amount positive",
                                    };

                                    html! {
                                        <tr key={entry.id.clone()}>
                                            <td class="date">
                                                <DateDisplay date={entry.date.clone()} />
                                            </td>
                                            <td class="category">{&entry.category}</td>
                                            <td class="description">
                                                {entry.description.clone().unwrap_or_default()}
                                            </td>
                                            <td class={amount_class}>{entry.formatted_amount()}</td>
                                            <td class="actions">
                                                <EditEntryDialog
                                                    entry={entry.clone()}
                                                    on_update={props.on_update.clone()}
                                                    on_error={props.on_error.clone()}
                                                />
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
