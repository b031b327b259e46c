//! The fixed rule catalog.
//!
//! Line rules (`S001`..`S009`) look at one physical line at a time, the blank
//! run tracker (`S006`) folds over the line stream, and tree rules
//! (`S010`..`S012`) inspect the parsed [`crate::syntax::SyntaxTree`].

mod blank;
mod line;
mod naming;
pub mod tree;

pub use blank::BlankRun;
pub use line::{
    Construct, LineRules, has_bad_indentation, has_todo, has_trailing_semicolon, is_too_long,
    lacks_inline_comment_spacing,
};
pub use naming::{is_camel_case, is_snake_case};
