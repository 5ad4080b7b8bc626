pub mod contact_form;

pub use contact_form::{validate_form, ConsoleForm, FormResult};
