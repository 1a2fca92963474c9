pub mod import_button;
pub mod record_form;
pub mod record_list;
