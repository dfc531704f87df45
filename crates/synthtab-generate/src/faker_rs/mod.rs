//! Adapter over the `fake` crate for locale-aware synthetic text.

mod adapter;
pub mod locales;

pub use adapter::{FakeRsAdapter, FakerKind, flatten_lines};
pub use locales::LocaleKey;
