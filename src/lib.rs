mod interfaces;
/// This module is automatically generated from /resources/*.proto
mod proto_gen;
mod canonicalizer;
mod generated;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;
pub(crate) mod regex_util;
pub(crate) mod string_util;

pub use canonicalizer::{
    CanonicalPhoneNumber, MetadataError, MetadataStore, NumberLengthType, PHONE_NUMBER_CANONICALIZER,
    ParseError, PhoneNumberCanonicalizer, PhoneNumberType, ValidationError, normalize,
};
pub use proto_gen::phonemetadata::{
    CountryMetadata, CountryMetadataCollection, NationalNumberRule, PhoneNumberDesc,
};

#[cfg(test)]
mod tests;
