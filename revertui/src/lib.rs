//! Revertible form controls for ratatui.
//!
//! Each control binds a live value to a default fixed at construction,
//! tracks a dirty flag, and exposes a one-step revert affordance. Widget
//! state and event handling live in [`widgets`]; drawing over ratatui
//! primitives lives in [`render`]; the shared state machine is
//! [`value::RevertibleValue`].

pub mod binding;
pub mod config;
pub mod events;
pub mod render;
pub mod value;
pub mod widgets;

pub use binding::{Binding, BindingError};
pub use config::{Theme, UiConfig, WidgetConfig};
pub use events::{
    ButtonGroupEvent, ComboBoxEvent, PathFieldEvent, SliderEvent, StringFieldEvent, ToggleEvent,
};
pub use value::RevertibleValue;
pub use widgets::{
    ButtonGroupField, ComboBoxField, GroupChange, NumType, PathField, SliderField, StringField,
    ToggleField,
};
