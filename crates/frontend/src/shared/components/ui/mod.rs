pub mod button;
pub mod input;
pub mod radio;

pub use button::Button;
pub use input::NumberInput;
pub use radio::{Radio, RadioGroup};
