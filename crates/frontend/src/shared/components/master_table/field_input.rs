use contracts::shared::column_schema::{ColumnDef, ColumnType};
use contracts::shared::record_values::RecordValues;
use leptos::prelude::*;
use serde_json::Value;
use thaw::Switch;

use super::cell::yes_no;
use super::form::{coerce_number, input_text, is_checked};

/// One labelled form control for `column`, bound to its key in `form`
#[component]
pub fn FieldInput(column: ColumnDef, form: RwSignal<RecordValues>) -> impl IntoView {
    let key = column.key.clone();
    let input_id = format!("master-field-{}", column.key);
    let label = if column.required {
        format!("{} *", column.label)
    } else {
        column.label.clone()
    };
    let placeholder = column.placeholder.clone().unwrap_or_default();

    let control = match column.column_type {
        ColumnType::Text => {
            let read_key = key.clone();
            view! {
                <input
                    id=input_id.clone()
                    class="form__input"
                    type="text"
                    placeholder=placeholder
                    required=column.required
                    prop:value=move || form.with(|f| input_text(f.get(&read_key)))
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        form.update(|f| {
                            f.insert(key.clone(), Value::String(text));
                        });
                    }
                />
            }
            .into_any()
        }
        ColumnType::Textarea => {
            let initial = form.with_untracked(|f| input_text(f.get(&key)));
            view! {
                <textarea
                    id=input_id.clone()
                    class="form__textarea"
                    rows=3
                    placeholder=placeholder
                    required=column.required
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        form.update(|f| {
                            f.insert(key.clone(), Value::String(text));
                        });
                    }
                >
                    {initial}
                </textarea>
            }
            .into_any()
        }
        ColumnType::Number => {
            // Raw text is kept so partial input like "1." survives re-render
            let raw = RwSignal::new(form.with_untracked(|f| input_text(f.get(&key))));
            view! {
                <input
                    id=input_id.clone()
                    class="form__input"
                    type="number"
                    step=if column.integer { "1" } else { "any" }
                    placeholder=placeholder
                    required=column.required
                    prop:value=move || raw.get()
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        let value = coerce_number(&text);
                        raw.set(text);
                        form.update(|f| {
                            f.insert(key.clone(), value);
                        });
                    }
                />
            }
            .into_any()
        }
        ColumnType::Boolean => {
            let checked = RwSignal::new(form.with_untracked(|f| is_checked(f.get(&key))));
            Effect::new(move |_| {
                let on = checked.get();
                form.update(|f| {
                    f.insert(key.clone(), Value::Bool(on));
                });
            });
            view! {
                <div class="form__switch">
                    <Switch checked=checked />
                    <span class="form__switch-state">{move || yes_no(checked.get())}</span>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=input_id>
                {label}
            </label>
            {control}
        </div>
    }
}
