//! Generic admin table for master-data kinds
//!
//! Renders list, search, create/edit dialog and delete confirmation from a
//! column schema. Knows nothing about storage: rows come in through `state`,
//! writes leave through the `on_*` callbacks and their results come back
//! through the `*_state` signals.

pub mod cell;
pub mod dialog;
pub mod field_input;
pub mod form;
pub mod search;

use contracts::shared::column_schema::ColumnDef;
use contracts::shared::master_data::{LoadState, SubmitState};
use contracts::shared::record_values::{record_id, RecordValues};
use leptos::prelude::*;
use thaw::*;

use cell::{cell_display, yes_no, CellDisplay};
use dialog::{accepts_submit, settle, DialogMode, Settle};
use field_input::FieldInput;
use form::{blank_form, prefill_form};
use search::filter_records;

const SEARCH_DEBOUNCE_MS: u32 = 200;

#[component]
pub fn MasterTable(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: MaybeProp<String>,
    #[prop(into)] state: Signal<LoadState<RecordValues>>,
    columns: Vec<ColumnDef>,
    on_create: Callback<RecordValues>,
    on_update: Callback<(String, RecordValues)>,
    on_delete: Callback<String>,
    #[prop(into)] create_state: Signal<SubmitState>,
    #[prop(into)] update_state: Signal<SubmitState>,
    #[prop(into)] delete_state: Signal<SubmitState>,
) -> impl IntoView {
    let columns = StoredValue::new(columns);

    // ============================================================================
    // Search
    // ============================================================================

    let search_input = RwSignal::new(String::new());
    let query = RwSignal::new(String::new());
    let search_seq = StoredValue::new(0u64);

    Effect::new(move |_| {
        let text = search_input.get();
        let seq = search_seq.get_value() + 1;
        search_seq.set_value(seq);
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if search_seq.get_value() == seq {
                query.set(text);
            }
        });
    });

    let visible_rows = Memo::new(move |_| {
        let query = query.get();
        state.with(|s| columns.with_value(|cols| filter_records(s.rows(), cols, &query)))
    });

    // ============================================================================
    // Create / edit dialog
    // ============================================================================

    let dialog_open = RwSignal::new(false);
    let dialog_mode = RwSignal::new(DialogMode::Create);
    let form_state = RwSignal::new(RecordValues::new());
    // Bumped on every open so the form controls start from the new draft
    let form_version = RwSignal::new(0u32);
    let awaiting = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let active_submit = move || match dialog_mode.get() {
        DialogMode::Create => create_state.get(),
        DialogMode::Edit { .. } => update_state.get(),
    };

    Effect::new(move |_| {
        let submit = active_submit();
        match settle(awaiting.get_untracked(), &submit) {
            Settle::Wait => {}
            Settle::Close => {
                awaiting.set(false);
                form_error.set(None);
                dialog_open.set(false);
            }
            Settle::Retry(e) => {
                awaiting.set(false);
                form_error.set(Some(e));
            }
        }
    });

    let open_create = move |_| {
        dialog_mode.set(DialogMode::Create);
        form_state.set(columns.with_value(|cols| blank_form(cols)));
        form_error.set(None);
        awaiting.set(false);
        form_version.update(|v| *v += 1);
        dialog_open.set(true);
    };

    let open_edit = move |record: RecordValues| {
        let Some(id) = record_id(&record) else {
            log::warn!("record without id cannot be edited");
            return;
        };
        dialog_mode.set(DialogMode::Edit { id });
        form_state.set(columns.with_value(|cols| prefill_form(cols, &record)));
        form_error.set(None);
        awaiting.set(false);
        form_version.update(|v| *v += 1);
        dialog_open.set(true);
    };

    let submit_form = move |_| {
        let submit = match dialog_mode.get_untracked() {
            DialogMode::Create => create_state.get_untracked(),
            DialogMode::Edit { .. } => update_state.get_untracked(),
        };
        if !accepts_submit(awaiting.get_untracked(), &submit) {
            return;
        }
        let values = form_state.get_untracked();
        form_error.set(None);
        awaiting.set(true);
        match dialog_mode.get_untracked() {
            DialogMode::Create => on_create.run(values),
            DialogMode::Edit { id } => on_update.run((id, values)),
        }
    };

    let cancel_dialog = move |_| {
        awaiting.set(false);
        dialog_open.set(false);
    };

    let dialog_title = {
        let title = title.clone();
        move || match dialog_mode.get() {
            DialogMode::Create => format!("Add to {}", title),
            DialogMode::Edit { .. } => format!("Edit {}", title),
        }
    };

    // ============================================================================
    // Delete confirmation
    // ============================================================================

    let pending_delete = RwSignal::new(None::<String>);
    let confirm_open = RwSignal::new(false);

    let ask_delete = move |id: String| {
        pending_delete.set(Some(id));
        confirm_open.set(true);
    };

    let confirm_delete = move |_| {
        if let Some(id) = pending_delete.get_untracked() {
            on_delete.run(id);
        }
        pending_delete.set(None);
        confirm_open.set(false);
    };

    let cancel_delete = move |_| {
        pending_delete.set(None);
        confirm_open.set(false);
    };

    // ============================================================================
    // View
    // ============================================================================

    let header_cells = move || {
        columns.with_value(|cols| {
            cols.iter()
                .map(|c| {
                    let label = c.label.clone();
                    view! { <TableHeaderCell min_width=100.0>{label}</TableHeaderCell> }
                })
                .collect_view()
        })
    };

    let render_row = move |record: RecordValues| {
        let id = record_id(&record).unwrap_or_default();
        let cells = columns.with_value(|cols| {
            cols.iter()
                .map(|c| {
                    let content = match cell_display(record.get(&c.key)) {
                        CellDisplay::Badge(b) => {
                            let color = if b { BadgeColor::Success } else { BadgeColor::Informative };
                            view! {
                                <Badge appearance=BadgeAppearance::Tint color=color>
                                    {yes_no(b)}
                                </Badge>
                            }
                            .into_any()
                        }
                        CellDisplay::Dash => view! { <span class="text-muted">"-"</span> }.into_any(),
                        CellDisplay::Text(t) => view! { <span>{t}</span> }.into_any(),
                    };
                    view! {
                        <TableCell>
                            <TableCellLayout>{content}</TableCellLayout>
                        </TableCell>
                    }
                })
                .collect_view()
        });

        view! {
            <TableRow>
                {cells}
                <TableCell>
                    <TableCellLayout>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| open_edit(record.clone())
                        >
                            "Edit"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            disabled=Signal::derive(move || delete_state.get().is_busy())
                            on_click=move |_| ask_delete(id.clone())
                        >
                            "Delete"
                        </Button>
                    </TableCellLayout>
                </TableCell>
            </TableRow>
        }
    };

    let body = move || match state.get() {
        LoadState::Loading => view! {
            <div class="master-table__status">
                <Spinner label="Loading..." />
            </div>
        }
        .into_any(),
        LoadState::Error(e) => view! {
            <MessageBar intent=MessageBarIntent::Error>
                <MessageBarBody>{format!("Failed to load data: {}", e)}</MessageBarBody>
            </MessageBar>
        }
        .into_any(),
        LoadState::Empty => view! {
            <div class="master-table__status">"No data"</div>
        }
        .into_any(),
        LoadState::Loaded(_) => {
            let rows = visible_rows.get();
            if rows.is_empty() {
                view! {
                    <div class="master-table__status">"No data matches the search"</div>
                }
                .into_any()
            } else {
                view! {
                    <Table>
                        <TableHeader>
                            <TableRow>
                                {header_cells()}
                                <TableHeaderCell min_width=140.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {rows.into_iter().map(render_row).collect_view()}
                        </TableBody>
                    </Table>
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="master-table">
            <div class="page__header">
                <div class="page__header-left">
                    <h2 class="page__title">{title.clone()}</h2>
                    {move || description.get().map(|d| view! { <p class="page__subtitle">{d}</p> })}
                </div>
                <div class="page__header-right">
                    <div style="width: 280px;">
                        <Input value=search_input placeholder="Search..." />
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=open_create>
                        "Add"
                    </Button>
                </div>
            </div>

            <div class="page__content">{body}</div>

            <Dialog open=dialog_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>{dialog_title}</DialogTitle>
                        <DialogContent>
                            {move || {
                                form_version.track();
                                columns
                                    .get_value()
                                    .into_iter()
                                    .map(|column| view! { <FieldInput column=column form=form_state /> })
                                    .collect_view()
                            }}
                            {move || form_error.get().map(|e| view! {
                                <MessageBar intent=MessageBarIntent::Error>
                                    <MessageBarBody>{e}</MessageBarBody>
                                </MessageBar>
                            })}
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=cancel_dialog>
                                "Cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                loading=Signal::derive(move || active_submit().is_busy())
                                disabled=Signal::derive(move || active_submit().is_busy())
                                on_click=submit_form
                            >
                                "Save"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>

            <Dialog open=confirm_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Are you sure?"</DialogTitle>
                        <DialogContent>
                            "This record will be permanently deleted."
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=cancel_delete>
                                "Cancel"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=confirm_delete>
                                "Delete"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </div>
    }
}
