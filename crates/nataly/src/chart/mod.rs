pub mod house;
pub mod natal;

pub use house::House;
pub use natal::NatalChart;
