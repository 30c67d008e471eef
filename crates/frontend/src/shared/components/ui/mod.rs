pub mod checkbox;

pub use checkbox::MenuItemCheckbox;
