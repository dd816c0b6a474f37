pub mod attributes;
pub mod combinations;
pub mod packs;
pub mod products;
pub mod stock;
pub mod virtual_assets;
