use std::cmp::Ordering;

use crate::domain::entities::record::{
    DomainRecord, HEADER_BOUGHT_DATE, HEADER_BUY_PRICE, HEADER_FOR_SALE, HEADER_ITEM,
    HEADER_PROVIDER, HEADER_SELLING_PRICE, HEADER_SOLD_DATE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Item,
    Provider,
    BuyPrice,
    BoughtDate,
    ForSale,
    SellingPrice,
    SoldDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortColumn {
    /// Table column order. Header text doubles as the import header.
    pub const ALL: [SortColumn; 7] = [
        SortColumn::Item,
        SortColumn::Provider,
        SortColumn::BuyPrice,
        SortColumn::BoughtDate,
        SortColumn::ForSale,
        SortColumn::SellingPrice,
        SortColumn::SoldDate,
    ];

    pub fn header(self) -> &'static str {
        match self {
            SortColumn::Item => HEADER_ITEM,
            SortColumn::Provider => HEADER_PROVIDER,
            SortColumn::BuyPrice => HEADER_BUY_PRICE,
            SortColumn::BoughtDate => HEADER_BOUGHT_DATE,
            SortColumn::ForSale => HEADER_FOR_SALE,
            SortColumn::SellingPrice => HEADER_SELLING_PRICE,
            SortColumn::SoldDate => HEADER_SOLD_DATE,
        }
    }

    #[allow(dead_code)]
    pub fn from_header(header: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|column| column.header() == header)
    }

    fn compare(self, a: &DomainRecord, b: &DomainRecord) -> Ordering {
        match self {
            SortColumn::Item => a.item.cmp(&b.item),
            SortColumn::Provider => a.provider.cmp(&b.provider),
            SortColumn::BuyPrice => a.buy_price.total_cmp(&b.buy_price),
            SortColumn::BoughtDate => a.bought_date.cmp(&b.bought_date),
            SortColumn::ForSale => a.for_sale.cmp(&b.for_sale),
            SortColumn::SellingPrice => match (a.selling_price, b.selling_price) {
                (Some(left), Some(right)) => left.total_cmp(&right),
                (left, right) => left.is_some().cmp(&right.is_some()),
            },
            SortColumn::SoldDate => a.sold_date.cmp(&b.sold_date),
        }
    }
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: SortColumn::Item,
            direction: SortDirection::Asc,
        }
    }
}

impl SortState {
    /// Header click: flip on the active column, otherwise switch and reset to
    /// ascending.
    pub fn toggle(self, column: SortColumn) -> Self {
        if column == self.column {
            Self {
                column,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                column,
                direction: SortDirection::Asc,
            }
        }
    }

    /// Sorted view over `records`. Stable in both directions, so equal keys
    /// keep their stored order.
    pub fn apply<'a>(&self, records: &'a [DomainRecord]) -> Vec<&'a DomainRecord> {
        let mut view: Vec<&DomainRecord> = records.iter().collect();
        let column = self.column;
        match self.direction {
            SortDirection::Asc => view.sort_by(|a, b| column.compare(a, b)),
            SortDirection::Desc => view.sort_by(|a, b| column.compare(a, b).reverse()),
        }
        view
    }
}
