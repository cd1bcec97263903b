//! Canonical ("universal") asset format
//!
//! Source assets carry an optional front matter block (between `---` delimiters)
//! followed by a markdown body. Platform transforms read the parsed fields and
//! re-emit whatever block their platform expects.

mod frontmatter;

pub use frontmatter::{Frontmatter, parse_frontmatter_and_body, render_frontmatter};
