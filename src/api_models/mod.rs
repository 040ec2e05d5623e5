pub mod form;

pub use form::{CalculateForm, CategoryField, IndexQuery, LangQuery, Notice, ScanMode};
