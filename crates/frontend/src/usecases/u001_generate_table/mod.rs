pub mod api;
pub mod controller;
pub mod error;
pub mod state;
pub mod table;
pub mod validation;
pub mod view;

pub use controller::GenerateController;
pub use error::GenerateError;
pub use view::GenerateWidget;
