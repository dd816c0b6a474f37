//! Combination (product-variant) domain module.
//!
//! Combinations are the concrete variants of a combination-type product, one
//! per attribute tuple (e.g. color=red, size=XL). This crate holds the
//! combination record, the attribute-group registry, and the services that
//! generate, edit, list and delete combinations while keeping the owning
//! product's default-combination pointer honest.

pub mod attributes;
pub mod combination;
pub mod delete;
pub mod edit;
pub mod generate;
pub mod list;

#[cfg(test)]
pub(crate) mod testing;

pub use attributes::{Attribute, AttributeGroup, AttributeStore};
pub use combination::{Combination, CombinationStore, NewCombination};
pub use delete::CombinationDeletion;
pub use edit::{CombinationEdit, CombinationEditor};
pub use generate::CombinationGenerator;
pub use list::{CombinationFilters, CombinationLister, CombinationPage};
