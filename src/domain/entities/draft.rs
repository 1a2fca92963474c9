use crate::domain::entities::record::{
    parse_buy_price, parse_selling_price, DomainRecord, RecordFields,
};

/// Free-form text state behind the record form. Nothing here is typed until
/// [`RecordDraft::to_fields`] runs on submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordDraft {
    pub item: String,
    pub provider: String,
    pub buy_price: String,
    pub bought_date: String,
    pub for_sale: bool,
    pub selling_price: String,
    pub sold_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Item,
    Provider,
    BuyPrice,
    BoughtDate,
    SellingPrice,
    SoldDate,
}

impl DraftField {
    pub fn label(self) -> &'static str {
        match self {
            DraftField::Item => "Domain Name",
            DraftField::Provider => "Provider",
            DraftField::BuyPrice => "Buy Price",
            DraftField::BoughtDate => "Bought Date",
            DraftField::SellingPrice => "Selling Price",
            DraftField::SoldDate => "Sold Date",
        }
    }
}

impl RecordDraft {
    pub fn from_record(record: &DomainRecord) -> Self {
        Self {
            item: record.item.clone(),
            provider: record.provider.clone(),
            buy_price: record.buy_price.to_string(),
            bought_date: record.bought_date.clone(),
            for_sale: record.for_sale,
            selling_price: record
                .selling_price
                .map(|price| price.to_string())
                .unwrap_or_default(),
            sold_date: record.sold_date.clone().unwrap_or_default(),
        }
    }

    pub fn set_text(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Item => &mut self.item,
            DraftField::Provider => &mut self.provider,
            DraftField::BuyPrice => &mut self.buy_price,
            DraftField::BoughtDate => &mut self.bought_date,
            DraftField::SellingPrice => &mut self.selling_price,
            DraftField::SoldDate => &mut self.sold_date,
        };
        *slot = value;
    }

    pub fn text(&self, field: DraftField) -> &str {
        match field {
            DraftField::Item => &self.item,
            DraftField::Provider => &self.provider,
            DraftField::BuyPrice => &self.buy_price,
            DraftField::BoughtDate => &self.bought_date,
            DraftField::SellingPrice => &self.selling_price,
            DraftField::SoldDate => &self.sold_date,
        }
    }

    pub fn missing_required(&self) -> Vec<DraftField> {
        [
            DraftField::Item,
            DraftField::Provider,
            DraftField::BuyPrice,
            DraftField::BoughtDate,
        ]
        .into_iter()
        .filter(|field| self.text(*field).trim().is_empty())
        .collect()
    }

    pub fn to_fields(&self) -> RecordFields {
        let sold_date = self.sold_date.trim();
        RecordFields {
            item: self.item.trim().to_string(),
            provider: self.provider.trim().to_string(),
            buy_price: parse_buy_price(&self.buy_price),
            bought_date: self.bought_date.trim().to_string(),
            for_sale: self.for_sale,
            selling_price: parse_selling_price(&self.selling_price),
            sold_date: (!sold_date.is_empty()).then(|| sold_date.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> RecordDraft {
        RecordDraft {
            item: "example.com".to_string(),
            provider: "NameCo".to_string(),
            buy_price: "12.50".to_string(),
            bought_date: "2023-01-01".to_string(),
            for_sale: false,
            selling_price: String::new(),
            sold_date: String::new(),
        }
    }

    #[test]
    fn submit_converts_prices_and_drops_empty_optionals() {
        let fields = sample_draft().to_fields();

        assert_eq!(fields.item, "example.com");
        assert_eq!(fields.provider, "NameCo");
        assert_eq!(fields.buy_price, 12.5);
        assert_eq!(fields.bought_date, "2023-01-01");
        assert!(!fields.for_sale);
        assert_eq!(fields.selling_price, None, "empty selling price must be absent, not 0");
        assert_eq!(fields.sold_date, None);
    }

    #[test]
    fn submit_with_garbage_buy_price_yields_zero() {
        let draft = RecordDraft {
            buy_price: "abc".to_string(),
            ..sample_draft()
        };

        assert_eq!(draft.to_fields().buy_price, 0.0);
    }

    #[test]
    fn submit_with_unparseable_selling_price_is_absent() {
        let draft = RecordDraft {
            selling_price: "later".to_string(),
            ..sample_draft()
        };

        assert_eq!(draft.to_fields().selling_price, None);
    }

    #[test]
    fn submit_keeps_zero_selling_price_when_typed() {
        let draft = RecordDraft {
            selling_price: "0".to_string(),
            sold_date: "2024-05-01".to_string(),
            for_sale: true,
            ..sample_draft()
        };

        let fields = draft.to_fields();
        assert_eq!(fields.selling_price, Some(0.0));
        assert_eq!(fields.sold_date.as_deref(), Some("2024-05-01"));
        assert!(fields.for_sale);
    }

    #[test]
    fn edit_prefill_renders_numbers_as_text_and_absent_as_empty() {
        let record = DomainRecord::new(RecordFields {
            item: "prefill.com".to_string(),
            provider: "NameCo".to_string(),
            buy_price: 12.5,
            bought_date: "2023-01-01".to_string(),
            for_sale: true,
            selling_price: None,
            sold_date: None,
        });

        let draft = RecordDraft::from_record(&record);

        assert_eq!(draft.buy_price, "12.5");
        assert_eq!(draft.selling_price, "");
        assert_eq!(draft.sold_date, "");
        assert!(draft.for_sale);

        let record = DomainRecord::new(RecordFields {
            buy_price: 10.0,
            selling_price: Some(99.99),
            sold_date: Some("2024-01-02".to_string()),
            ..RecordFields::default()
        });
        let draft = RecordDraft::from_record(&record);
        assert_eq!(draft.buy_price, "10");
        assert_eq!(draft.selling_price, "99.99");
        assert_eq!(draft.sold_date, "2024-01-02");
    }

    #[test]
    fn unchanged_prefill_resubmits_the_same_prices() {
        for price in [0.1234567, 1e20, 19.999999999, 12.5, 0.0] {
            let record = DomainRecord::new(RecordFields {
                item: "same.com".to_string(),
                provider: "NameCo".to_string(),
                buy_price: price,
                bought_date: "2023-01-01".to_string(),
                for_sale: true,
                selling_price: Some(price),
                sold_date: None,
            });

            let fields = RecordDraft::from_record(&record).to_fields();

            assert_eq!(fields.buy_price, record.buy_price, "buy price {price}");
            assert_eq!(fields.selling_price, record.selling_price, "selling price {price}");
        }
    }

    #[test]
    fn missing_required_lists_blank_fields() {
        let draft = RecordDraft {
            item: "  ".to_string(),
            bought_date: String::new(),
            ..sample_draft()
        };

        assert_eq!(
            draft.missing_required(),
            vec![DraftField::Item, DraftField::BoughtDate]
        );
        assert!(sample_draft().missing_required().is_empty());
    }

    #[test]
    fn set_text_routes_to_matching_field() {
        let mut draft = RecordDraft::default();
        draft.set_text(DraftField::SellingPrice, "5".to_string());
        draft.set_text(DraftField::Provider, "Reg".to_string());

        assert_eq!(draft.selling_price, "5");
        assert_eq!(draft.provider, "Reg");
        assert_eq!(draft.text(DraftField::Provider), "Reg");
    }
}
