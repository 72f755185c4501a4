pub mod product;
pub mod category;
pub mod material;
pub mod movement;
