use std::path::PathBuf;

use dioxus::prelude::*;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::entities::draft::RecordDraft;
use crate::domain::entities::record::{RecordFields, RecordId};
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::components::import_button::ImportButton;
use crate::ui::components::record_form::RecordForm;
use crate::ui::components::record_list::RecordList;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::import_service::ImportService;
use crate::{format_money, root_container_style};

const ADD_BUTTON_STYLE: &str =
    "border: 1px solid #4f46e5; background: #4f46e5; color: #fff; padding: 4px 12px; border-radius: 6px; cursor: pointer;";

fn show_error_dialog(title: &str, description: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();

    let AppState {
        mut store,
        mut form_open,
        mut editing_id,
        mut draft,
        mut busy,
        mut status,
    } = AppState::new(&config);

    let import_service = ImportService::new();

    let records = store.read().records().to_vec();
    let total_domains = store.read().count();
    let total_buy_price = format_money(store.read().total_buy_price());
    let is_edit = editing_id().is_some();
    let form_title = if is_edit { "Edit Domain" } else { "Add New Domain" };
    let status_text = status.read().clone();

    let mut close_form = move || {
        form_open.set(false);
        editing_id.set(None);
        draft.set(RecordDraft::default());
    };

    let handle_submit = move |fields: RecordFields| {
        let item = fields.item.clone();
        let result = match editing_id() {
            Some(id) => store.write().update(id, fields).map(|found| found.then_some(id)),
            None => store.write().add(fields).map(Some),
        };
        match result {
            Ok(Some(_)) if is_edit => *status.write() = format!("Updated {item}"),
            Ok(Some(_)) => *status.write() = format!("Added {item}"),
            Ok(None) => *status.write() = format!("{item} no longer exists"),
            Err(err) => *status.write() = format!("{err}"),
        }
        close_form();
    };

    let handle_edit = move |id: RecordId| {
        let record = store.read().get(id).cloned();
        if let Some(record) = record {
            draft.set(RecordDraft::from_record(&record));
            editing_id.set(Some(id));
            form_open.set(true);
        }
    };

    let handle_delete = move |id: RecordId| {
        let Some(item) = store.read().get(id).map(|record| record.item.clone()) else {
            return;
        };
        let confirm = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Delete domain")
            .set_description(format!("Delete {item}?"))
            .set_buttons(MessageButtons::YesNo)
            .show();
        if confirm != MessageDialogResult::Yes {
            return;
        }

        match store.write().remove(id) {
            Ok(true) => *status.write() = format!("Deleted {item}"),
            Ok(false) => {}
            Err(err) => *status.write() = format!("{err}"),
        }
        if editing_id() == Some(id) {
            close_form();
        }
    };

    let handle_import = move |path: PathBuf| {
        *busy.write() = true;
        *status.write() = format!("Importing {}", path.display());

        match run_blocking(|| import_service.import(&path)) {
            Ok(imported) => match store.write().add_batch(imported) {
                Ok(added) => {
                    info!(added, path = %path.display(), "imported domains");
                    *status.write() = format!("Imported {added} domains from {}", path.display());
                }
                Err(err) => *status.write() = format!("{err}"),
            },
            Err(err) => {
                let message = format!("Import failed: {err:#}");
                *status.write() = message.clone();
                show_error_dialog("Import failed", &message);
            }
        }

        *busy.write() = false;
    };

    rsx! {
        div {
            style: "{root_container_style()}",
            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                h1 { style: "margin: 0; font-size: 24px;", "Domain Manager" }
                div {
                    style: "display: flex; gap: 8px;",
                    ImportButton { disabled: busy(), on_pick: handle_import }
                    button {
                        disabled: busy(),
                        style: ADD_BUTTON_STYLE,
                        onclick: move |_| {
                            draft.set(RecordDraft::default());
                            editing_id.set(None);
                            form_open.set(true);
                        },
                        "Add New Domain"
                    }
                }
            }

            div {
                style: "display: flex; justify-content: space-between; background: #f3f4f6; padding: 8px 12px; border-radius: 6px; font-weight: 600;",
                span { "Total Domains: {total_domains}" }
                span { "Total Buy Price: {total_buy_price}" }
            }

            if form_open() {
                div {
                    style: "border: 1px solid #ddd; border-radius: 6px; padding: 12px;",
                    h2 { style: "margin-top: 0; font-size: 18px;", "{form_title}" }
                    RecordForm {
                        draft: draft,
                        is_edit: is_edit,
                        on_submit: handle_submit,
                        on_cancel: move |_| close_form(),
                    }
                }
            }

            RecordList {
                records: records,
                on_edit: handle_edit,
                on_delete: handle_delete,
            }

            div { style: "color: #555;", "{status_text}" }
        }
    }
}
