pub mod button;
pub mod form_field;

pub use button::Button;
pub use form_field::FormField;
