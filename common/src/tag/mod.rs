//! Language tag grammar and canonicalisation.
//!
//! [`LocaleId::parse`] checks a tag against the `unicode_locale_id` grammar and
//! splits it into components; [`LocaleId::canonicalize`] rewrites the result
//! into canonical form using host alias tables.

mod canonicalizer;
mod locale_id;
mod parser;
mod subtags;

pub use canonicalizer::{canonicalize_keyword_value, canonicalize_unicode_locale_id};
pub use locale_id::{
    Extension, Keyword, LanguageId, LocaleId, OtherExtension, TransformedExtension,
    TransformedField, UnicodeExtension,
};
pub use parser::is_structurally_valid_language_tag;
pub use subtags::{
    is_language_subtag, is_region_subtag, is_script_subtag, is_unicode_key,
    is_variant_subtag, is_well_formed_unicode_type,
};
