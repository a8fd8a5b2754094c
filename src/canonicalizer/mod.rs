mod canonical_phone_number;
mod canonicalizer;
mod country_code;
mod helper_constants;
mod helper_functions;
mod international_prefix;
mod metadata_store;
mod national_number;
mod normalizer;
mod phone_number_regexps_and_mappings;
mod validator;
pub mod enums;
pub mod errors;
pub(self) mod helper_types;

use std::sync::LazyLock;

pub use canonical_phone_number::CanonicalPhoneNumber;
pub use canonicalizer::PhoneNumberCanonicalizer;
pub use enums::{NumberLengthType, PhoneNumberType};
pub use errors::{MetadataError, ParseError, ValidationError};
pub use metadata_store::MetadataStore;
pub use normalizer::normalize;

/// Canonicalizer over the compiled-in metadata, built on first use.
pub static PHONE_NUMBER_CANONICALIZER: LazyLock<PhoneNumberCanonicalizer> = LazyLock::new(|| {
    PhoneNumberCanonicalizer::new()
});
