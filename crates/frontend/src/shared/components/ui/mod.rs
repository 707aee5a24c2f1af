pub mod button;
pub mod checkbox;
pub mod input;
pub mod radio;
pub mod select;
pub mod slider;
pub mod textarea;

pub use button::Button;
pub use checkbox::{Checkbox, CheckboxGroup};
pub use input::Input;
pub use radio::{Radio, RadioGroup};
pub use select::Select;
pub use slider::Slider;
pub use textarea::Textarea;
