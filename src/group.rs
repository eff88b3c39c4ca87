//! Core product group record and the entry form that produces it
use super::error::ValidationError;
use super::ids;
use super::utils::{format_money, parse_money_or_zero};

/// A batch of identical inventory units sharing one letter identifier.
///
/// Price components are kept in the raw textual form they were entered in;
/// only `total` is a derived value, computed once at write time and never
/// recomputed afterwards.
#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, PartialEq, Eq)]
pub struct ProductGroup {
    #[n(0)]
    pub group_id: String, // single uppercase letter, unique in the store
    #[n(1)]
    pub title: String, // lowercased on write
    #[n(2)]
    pub price: String,
    #[n(3)]
    pub taxes: String,
    #[n(4)]
    pub ads: String,
    #[n(5)]
    pub discount: String,
    #[n(6)]
    pub total: String, // fixed-2 decimal, (price + taxes + ads) - discount
    #[n(7)]
    pub category: String, // lowercased on write
    #[n(8)]
    pub initial_count: u32,
    #[n(9)]
    pub current_count: u32,
    #[n(10)]
    pub product_ids: Vec<String>, // front of the list is sold first
}

impl ProductGroup {
    /// Unit value in cents, read back from the persisted `total`.
    pub fn total_cents(&self) -> i64 {
        parse_money_or_zero(&self.total)
    }

    /// Shape check applied to records coming back from the store. A record
    /// failing this is skipped on load, not fatal to the whole collection.
    pub fn is_well_formed(&self) -> bool {
        ids::is_valid_group_id(&self.group_id)
            && !self.title.is_empty()
            && !self.price.is_empty()
            && !self.category.is_empty()
            && self.current_count as usize == self.product_ids.len()
    }
}

// Entry form for both create and update. Field values arrive as the raw
// strings the form holds; numbers are parsed when the total is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupForm {
    title: String,
    price: String,
    taxes: String,
    ads: String,
    discount: String,
    category: String,
    count: u32,
}

impl Default for GroupForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            price: String::new(),
            taxes: String::new(),
            ads: String::new(),
            discount: String::new(),
            category: String::new(),
            count: 1,
        }
    }
}

impl GroupForm {
    /// Construct a blank form, the basis for a new group.
    pub fn new() -> Self {
        Self::default()
    }
    pub fn set_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }
    pub fn set_price(mut self, price: &str) -> Self {
        self.price = price.to_string();
        self
    }
    pub fn set_taxes(mut self, taxes: &str) -> Self {
        self.taxes = taxes.to_string();
        self
    }
    pub fn set_ads(mut self, ads: &str) -> Self {
        self.ads = ads.to_string();
        self
    }
    pub fn set_discount(mut self, discount: &str) -> Self {
        self.discount = discount.to_string();
        self
    }
    pub fn set_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }
    pub fn set_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Derived total in cents: `(price + taxes + ads) - discount`.
    /// Unparseable components count as zero; the result may go negative
    /// when the discount dominates.
    pub fn total_cents(&self) -> i64 {
        parse_money_or_zero(&self.price) + parse_money_or_zero(&self.taxes)
            + parse_money_or_zero(&self.ads)
            - parse_money_or_zero(&self.discount)
    }

    /// Checks required fields and the count range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.price.is_empty() {
            return Err(ValidationError::EmptyPrice);
        }
        if self.category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        if self.count == 0 || self.count >= 1000 {
            return Err(ValidationError::CountOutOfRange(self.count));
        }
        Ok(())
    }

    /// Validate, then materialise a fresh group under the given identifier.
    pub fn finalise(&self, group_id: String) -> Result<ProductGroup, ValidationError> {
        self.validate()?;
        let product_ids = ids::unit_ids(&group_id, self.count);
        Ok(ProductGroup {
            group_id,
            title: self.title.to_lowercase(),
            price: self.price.clone(),
            taxes: self.taxes.clone(),
            ads: self.ads.clone(),
            discount: self.discount.clone(),
            total: format_money(self.total_cents()),
            category: self.category.to_lowercase(),
            initial_count: self.count,
            current_count: self.count,
            product_ids,
        })
    }

    /// Validate, then overwrite an existing group in place. Descriptive
    /// fields always change; counts and unit ids are regenerated only when
    /// the entered count differs from the group's initial count, which
    /// discards any partially-sold state for that group.
    pub fn apply_to(&self, group: &mut ProductGroup) -> Result<(), ValidationError> {
        self.validate()?;
        group.title = self.title.to_lowercase();
        group.price = self.price.clone();
        group.taxes = self.taxes.clone();
        group.ads = self.ads.clone();
        group.discount = self.discount.clone();
        group.total = format_money(self.total_cents());
        group.category = self.category.to_lowercase();

        if group.initial_count != self.count {
            group.initial_count = self.count;
            group.current_count = self.count;
            group.product_ids = ids::unit_ids(&group.group_id, self.count);
        }
        Ok(())
    }

    /// Prefill a form from an existing group, for the update flow.
    pub fn from_group(group: &ProductGroup) -> Self {
        Self {
            title: group.title.clone(),
            price: group.price.clone(),
            taxes: group.taxes.clone(),
            ads: group.ads.clone(),
            discount: group.discount.clone(),
            category: group.category.clone(),
            count: group.initial_count,
        }
    }
}
