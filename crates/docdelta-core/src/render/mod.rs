//! Plain-text renderings of diff results for terminals and review notes.

pub mod inline;
pub mod rows;
pub mod summary;

pub use inline::render_inline;
pub use rows::render_rows;
pub use summary::render_summary;
