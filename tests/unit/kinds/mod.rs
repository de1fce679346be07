pub mod house;
pub mod rail;
pub mod tree;
