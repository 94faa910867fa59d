//! Patient roster view.
//!
//! Pipeline: Filter (name/NIK search) → Sort (name, NIK or admission date) → Paginate

mod query;
mod state;
mod view;

pub use query::*;
pub use state::*;
pub use view::*;
