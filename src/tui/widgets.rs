pub mod add_button;
pub mod category_picker;
pub mod item_input;
pub mod key_hints;
pub mod sections;
