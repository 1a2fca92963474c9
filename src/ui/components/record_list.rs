use dioxus::prelude::*;

use crate::domain::entities::record::{DomainRecord, RecordId};
use crate::domain::entities::sort::{SortColumn, SortState};
use crate::{
    format_money, format_optional_money, format_optional_text, record_row_style,
    table_cell_style, table_container_style, table_header_cell_style, yes_no,
};

const ACTION_BUTTON_STYLE: &str =
    "border: 1px solid #bbb; background: #fff; padding: 2px 8px; border-radius: 4px; cursor: pointer; margin-right: 4px;";

#[component]
fn RecordRow(
    record: DomainRecord,
    on_edit: EventHandler<RecordId>,
    on_delete: EventHandler<RecordId>,
) -> Element {
    let id = record.id;
    let buy_price = format_money(record.buy_price);
    let for_sale = yes_no(record.for_sale);
    let selling_price = format_optional_money(record.selling_price);
    let sold_date = format_optional_text(record.sold_date.as_deref());

    rsx! {
        tr {
            style: "{record_row_style(record.for_sale)}",
            td { style: "{table_cell_style()}", "{record.item}" }
            td { style: "{table_cell_style()}", "{record.provider}" }
            td { style: "{table_cell_style()} text-align: right;", "{buy_price}" }
            td { style: "{table_cell_style()}", "{record.bought_date}" }
            td { style: "{table_cell_style()}", "{for_sale}" }
            td { style: "{table_cell_style()} text-align: right;", "{selling_price}" }
            td { style: "{table_cell_style()}", "{sold_date}" }
            td {
                style: "{table_cell_style()} white-space: nowrap;",
                button {
                    style: ACTION_BUTTON_STYLE,
                    title: "Edit",
                    onclick: move |_| on_edit.call(id),
                    "Edit"
                }
                button {
                    style: ACTION_BUTTON_STYLE,
                    title: "Delete",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}

/// Sortable table over every record. Sorting only reorders what is shown.
#[component]
pub fn RecordList(
    records: Vec<DomainRecord>,
    on_edit: EventHandler<RecordId>,
    on_delete: EventHandler<RecordId>,
) -> Element {
    let mut sort = use_signal(SortState::default);
    let state = sort();
    let sorted: Vec<DomainRecord> = state.apply(&records).into_iter().cloned().collect();
    let column_count = SortColumn::ALL.len() + 1;

    rsx! {
        div {
            style: "{table_container_style()}",
            table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                thead {
                    tr {
                        for column in SortColumn::ALL {
                            th {
                                key: "{column.header()}",
                                style: "{table_header_cell_style()}",
                                onclick: move |_| {
                                    let next = sort().toggle(column);
                                    sort.set(next);
                                },
                                "{column.header()}"
                                if state.column == column {
                                    span { style: "margin-left: 4px;", "{state.direction.indicator()}" }
                                }
                            }
                        }
                        th { style: "{table_header_cell_style()} cursor: default;", "Actions" }
                    }
                }
                tbody {
                    if sorted.is_empty() {
                        tr {
                            td {
                                colspan: "{column_count}",
                                style: "{table_cell_style()} text-align: center; color: #666;",
                                "No domains yet"
                            }
                        }
                    }
                    for record in sorted {
                        RecordRow {
                            key: "{record.id}",
                            record: record.clone(),
                            on_edit: on_edit,
                            on_delete: on_delete,
                        }
                    }
                }
            }
        }
    }
}
