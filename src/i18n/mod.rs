//! Localization store.
//!
//! Every display string the page and the chat widget show lives in a static
//! [`Bundle`] per [`Language`]. Lookup is total over the enumerated language
//! set, so there is no runtime validation path.

mod bundle;
mod language;

pub use bundle::{
    AboutStrings, Bundle, ChatStrings, FaqItem, FaqStrings, FeatureItem, FeaturesStrings,
    HeroStrings, NavStrings, resolve,
};
pub use language::{Language, print_languages};
