use std::path::PathBuf;

use dioxus::prelude::*;
use rfd::FileDialog;

use crate::infra::import::{DELIMITED_EXTENSIONS, WORKBOOK_EXTENSIONS};

pub fn pick_import_file() -> Option<PathBuf> {
    FileDialog::new()
        .add_filter("Spreadsheet", WORKBOOK_EXTENSIONS)
        .add_filter("Delimited text", DELIMITED_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
}

#[component]
pub fn ImportButton(disabled: bool, on_pick: EventHandler<PathBuf>) -> Element {
    rsx! {
        button {
            disabled: disabled,
            style: "border: 1px solid #16a34a; background: #16a34a; color: #fff; padding: 4px 12px; border-radius: 6px; cursor: pointer;",
            onclick: move |_| {
                if let Some(path) = pick_import_file() {
                    on_pick.call(path);
                }
            },
            "Upload Domains"
        }
    }
}
