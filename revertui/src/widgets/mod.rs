pub mod button_group;
pub mod combobox;
pub mod numeric;
pub mod path_field;
pub mod slider;
pub mod string_field;
pub mod toggle;

pub use button_group::{ButtonGroupField, ButtonGroupLayout, GroupChange};
pub use combobox::{ComboBoxField, ComboBoxLayout, ComboBoxState};
pub use numeric::NumericInputState;
pub use path_field::{ellipsize_left, PathField, PathFieldLayout};
pub use slider::{range_label_offsets, NumType, SliderField, SliderLayout};
pub use string_field::{StringField, StringFieldLayout};
pub use toggle::{ToggleField, ToggleLayout};
