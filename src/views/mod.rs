pub mod page;

pub use page::{render_page, FormView};
