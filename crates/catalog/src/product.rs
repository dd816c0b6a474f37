use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopkeep_core::{CatalogError, CatalogResult, CombinationId, ProductId};

/// Commercial type of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Standard,
    Pack,
    Combinations,
    Virtual,
}

impl ProductType {
    /// Every known type, in declaration order.
    pub const ALL: [ProductType; 4] = [
        ProductType::Standard,
        ProductType::Pack,
        ProductType::Combinations,
        ProductType::Virtual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Standard => "standard",
            ProductType::Pack => "pack",
            ProductType::Combinations => "combinations",
            ProductType::Virtual => "virtual",
        }
    }

    pub fn is_virtual(&self) -> bool {
        *self == ProductType::Virtual
    }

    pub fn is_pack(&self) -> bool {
        *self == ProductType::Pack
    }

    pub fn has_combinations(&self) -> bool {
        *self == ProductType::Combinations
    }
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(ProductType::Standard),
            "pack" => Ok(ProductType::Pack),
            "combinations" => Ok(ProductType::Combinations),
            "virtual" => Ok(ProductType::Virtual),
            other => Err(CatalogError::validation(format!(
                "unknown product type '{other}'"
            ))),
        }
    }
}

/// Field names accepted by [`crate::store::ProductStore::partial_update`].
///
/// A partial update names exactly the fields that changed; everything else on
/// the stored record is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    Name,
    Reference,
    Price,
    Active,
    Type,
    IsVirtual,
    CacheIsPack,
    CacheDefaultAttribute,
}

/// Catalog product record.
///
/// `is_virtual` and `cache_is_pack` are denormalized from `product_type`, and
/// `cache_default_attribute` is only meaningful for combination products; the
/// mutators below are the only way to touch those fields, so the record can
/// never drift out of sync in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    reference: String,
    /// Price in smallest currency unit (e.g. cents).
    price: u64,
    active: bool,
    product_type: ProductType,
    is_virtual: bool,
    cache_is_pack: bool,
    cache_default_attribute: Option<CombinationId>,
    updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        reference: impl Into<String>,
        product_type: ProductType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            reference: reference.into(),
            price: 0,
            active: false,
            product_type,
            is_virtual: product_type.is_virtual(),
            cache_is_pack: product_type.is_pack(),
            cache_default_attribute: None,
            updated_at: created_at,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn is_virtual(&self) -> bool {
        self.is_virtual
    }

    pub fn cache_is_pack(&self) -> bool {
        self.cache_is_pack
    }

    pub fn cache_default_attribute(&self) -> Option<CombinationId> {
        self.cache_default_attribute
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn rename(&mut self, name: impl Into<String>) -> ProductField {
        self.name = name.into();
        ProductField::Name
    }

    pub fn set_price(&mut self, price: u64) -> ProductField {
        self.price = price;
        ProductField::Price
    }

    pub fn set_active(&mut self, active: bool) -> ProductField {
        self.active = active;
        ProductField::Active
    }

    /// Switch the commercial type, syncing the denormalized fields.
    ///
    /// Returns the exact field list a partial update must name: the type and
    /// both cache flags always, plus `cache_default_attribute` (cleared)
    /// unless the new type carries combinations.
    pub fn change_type(&mut self, new_type: ProductType) -> Vec<ProductField> {
        self.product_type = new_type;
        self.is_virtual = new_type.is_virtual();
        self.cache_is_pack = new_type.is_pack();

        let mut fields = vec![
            ProductField::Type,
            ProductField::IsVirtual,
            ProductField::CacheIsPack,
        ];
        if !new_type.has_combinations() {
            self.cache_default_attribute = None;
            fields.push(ProductField::CacheDefaultAttribute);
        }
        fields
    }

    /// Point the record at its default combination (or clear the pointer).
    ///
    /// A non-combination product can only hold `None`.
    pub fn set_default_combination(
        &mut self,
        combination: Option<CombinationId>,
    ) -> CatalogResult<Vec<ProductField>> {
        if combination.is_some() && !self.product_type.has_combinations() {
            return Err(CatalogError::validation(format!(
                "product {} is of type '{}' and cannot have a default combination",
                self.id, self.product_type
            )));
        }
        self.cache_default_attribute = combination;
        Ok(vec![ProductField::CacheDefaultAttribute])
    }

    /// Refresh the modification timestamp. Intended for stores on write.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }

    /// Copy exactly the named fields from `src`, leaving the rest untouched.
    ///
    /// This is the write side of a partial update. It copies fields verbatim,
    /// including the denormalized ones, so a store applying it should verify
    /// the result with [`Product::derived_fields_consistent`] before
    /// committing.
    pub fn copy_fields(&mut self, src: &Product, fields: &[ProductField]) {
        for field in fields {
            match field {
                ProductField::Name => self.name = src.name.clone(),
                ProductField::Reference => self.reference = src.reference.clone(),
                ProductField::Price => self.price = src.price,
                ProductField::Active => self.active = src.active,
                ProductField::Type => self.product_type = src.product_type,
                ProductField::IsVirtual => self.is_virtual = src.is_virtual,
                ProductField::CacheIsPack => self.cache_is_pack = src.cache_is_pack,
                ProductField::CacheDefaultAttribute => {
                    self.cache_default_attribute = src.cache_default_attribute;
                }
            }
        }
    }

    /// Whether the denormalized fields agree with the type.
    pub fn derived_fields_consistent(&self) -> bool {
        self.is_virtual == self.product_type.is_virtual()
            && self.cache_is_pack == self.product_type.is_pack()
            && (self.product_type.has_combinations() || self.cache_default_attribute.is_none())
    }
}
