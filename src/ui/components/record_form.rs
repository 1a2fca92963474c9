use dioxus::prelude::*;

use crate::domain::entities::draft::{DraftField, RecordDraft};
use crate::domain::entities::record::RecordFields;

const INPUT_STYLE: &str = "border: 1px solid #bbb; border-radius: 4px; padding: 4px 6px;";
const BUTTON_STYLE: &str =
    "border: 1px solid #bbb; background: #fff; padding: 4px 12px; border-radius: 6px; cursor: pointer;";
const PRIMARY_BUTTON_STYLE: &str =
    "border: 1px solid #4f46e5; background: #4f46e5; color: #fff; padding: 4px 12px; border-radius: 6px; cursor: pointer;";

#[component]
fn DraftInput(
    field: DraftField,
    input_type: &'static str,
    required: bool,
    mut draft: Signal<RecordDraft>,
) -> Element {
    let label = field.label();
    let value = draft.read().text(field).to_string();

    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 2px;",
            span { "{label}" }
            input {
                style: INPUT_STYLE,
                r#type: input_type,
                required: required,
                value: "{value}",
                oninput: move |event| {
                    draft.write().set_text(field, event.value());
                },
            }
        }
    }
}

/// Edits a [`RecordDraft`] owned by the caller. Submitting hands typed fields
/// back through `on_submit`; the form never writes to the store itself.
#[component]
pub fn RecordForm(
    mut draft: Signal<RecordDraft>,
    is_edit: bool,
    on_submit: EventHandler<RecordFields>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut missing = use_signal(Vec::<DraftField>::new);
    let for_sale = draft.read().for_sale;
    let submit_label = if is_edit { "Update Domain" } else { "Add Domain" };
    let missing_labels = missing
        .read()
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ");

    rsx! {
        form {
            style: "display: flex; flex-direction: column; gap: 8px; max-width: 480px;",
            onsubmit: move |event| {
                event.prevent_default();
                let current = draft();
                let blanks = current.missing_required();
                if !blanks.is_empty() {
                    missing.set(blanks);
                    return;
                }
                missing.set(Vec::new());
                on_submit.call(current.to_fields());
            },
            DraftInput { field: DraftField::Item, input_type: "text", required: true, draft: draft }
            DraftInput { field: DraftField::Provider, input_type: "text", required: true, draft: draft }
            DraftInput { field: DraftField::BuyPrice, input_type: "text", required: true, draft: draft }
            DraftInput { field: DraftField::BoughtDate, input_type: "date", required: true, draft: draft }
            label {
                style: "display: flex; align-items: center; gap: 8px; cursor: pointer;",
                input {
                    r#type: "checkbox",
                    checked: for_sale,
                    onclick: move |_| {
                        let next = !draft.read().for_sale;
                        draft.write().for_sale = next;
                    }
                }
                span { "For Sale" }
            }
            DraftInput { field: DraftField::SellingPrice, input_type: "text", required: false, draft: draft }
            DraftInput { field: DraftField::SoldDate, input_type: "date", required: false, draft: draft }
            if !missing_labels.is_empty() {
                p { style: "color: #b91c1c; margin: 0;", "Required: {missing_labels}" }
            }
            div {
                style: "display: flex; justify-content: flex-end; gap: 8px;",
                button {
                    r#type: "button",
                    style: BUTTON_STYLE,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    r#type: "submit",
                    style: PRIMARY_BUTTON_STYLE,
                    "{submit_label}"
                }
            }
        }
    }
}
