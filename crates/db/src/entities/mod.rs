//! `SeaORM` entities for the catalogue tables.

pub mod product_attribute_values;
pub mod product_attributes;
pub mod products;
