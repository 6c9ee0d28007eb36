//! # Token Kinds
//!
//! Each lexical category owns its match pattern here.
//!
//! ## Types
//!
//! - **`Comment`**: `MARKER = '#'` - whole-line check, nothing else runs on the line
//! - **`Uri`**: `<...>` - first `>` after a `<` closes it
//! - **`StringLiteral`**: `"..."` - no escape handling
//! - **`PrefixedName`**: `ns:local` with ASCII word boundaries
//! - **`LanguageTag`**: `@tag`
//! - **`Keyword`**: `a`, `true`, `false`
//!
//! ## Design Principle
//!
//! The pass code asks these types for their regex and never spells out a
//! pattern itself.

pub mod comment;
pub mod keyword;
pub mod language_tag;
pub mod prefixed_name;
pub mod string_literal;
pub mod uri;

pub use comment::Comment;
pub use keyword::Keyword;
pub use language_tag::LanguageTag;
pub use prefixed_name::PrefixedName;
pub use string_literal::StringLiteral;
pub use uri::Uri;
