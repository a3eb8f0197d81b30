// Widget renderer modules
pub mod button_group;
pub mod combobox;
pub mod layout;
pub mod path_field;
pub mod slider;
pub mod string_field;
pub mod toggle;

// Re-export all widget renderers
pub use button_group::render_button_group;
pub use combobox::render_combo_box;
pub use layout::{center_line, render_label, render_revert, split_field_row, FieldRow};
pub use path_field::render_path_field;
pub use slider::render_slider;
pub use string_field::render_string_field;
pub use toggle::render_toggle;
