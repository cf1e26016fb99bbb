pub mod generator;
pub mod params;

pub use generator::generate_table;
pub use params::GenerateParams;
