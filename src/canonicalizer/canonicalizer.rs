// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{borrow::Cow, collections::HashSet};

use log::{trace, warn};

use super::{
    CanonicalPhoneNumber, MetadataStore, ParseError, PhoneNumberType,
    country_code::strip_country_code,
    helper_constants::MAX_LENGTH_COUNTRY_CODE,
    helper_functions::{get_supported_types_for_metadata, strip_plus_sign},
    helper_types::{KnownCountries, ParseCandidates},
    normalizer::normalize,
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
};
use crate::{
    i18n, interfaces::MatcherApi, proto_gen::phonemetadata::CountryMetadata,
    regex_based_matcher::RegexBasedMatcher,
};

pub type Result<T> = std::result::Result<T, ParseError>;

pub struct PhoneNumberCanonicalizer {
    /// An API for validation checking.
    pub(super) matcher_api: Box<dyn MatcherApi>,

    /// Helper class holding useful regular expressions.
    pub(super) reg_exps: PhoneNumberRegExpsAndMappings,

    /// Country table every stage reads from.
    pub(super) store: MetadataStore,
}

impl PhoneNumberCanonicalizer {
    /// Builds a canonicalizer over the compiled-in metadata.
    pub(super) fn new() -> Self {
        let store = match MetadataStore::compiled() {
            Err(err) => {
                let err_message = format!("Could not parse compiled-in metadata: {:?}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
            Ok(store) => store,
        };
        Self::new_for_metadata(store)
    }

    /// Builds a canonicalizer over an injected table.
    pub fn new_for_metadata(store: MetadataStore) -> Self {
        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            reg_exps: PhoneNumberRegExpsAndMappings::new(),
            store,
        }
    }

    pub fn metadata_store(&self) -> &MetadataStore {
        &self.store
    }

    /// Parses a number dialed inside `country`, trunk prefix included.
    ///
    /// Falls back to the normalized digits, untouched, if the transformed
    /// number doesn't validate.
    pub fn from_national(&self, country: &str, text: &str) -> Result<CanonicalPhoneNumber> {
        let metadata = self.metadata_for_iso_code(country)?;
        let normalized = normalize(text);
        let digits = strip_plus_sign(&normalized);
        let transformed = self.parse_national(metadata, digits);
        Ok(ParseCandidates::new(
            CanonicalPhoneNumber::new(metadata.id(), transformed),
            CanonicalPhoneNumber::new(metadata.id(), digits),
        )
        .select(|candidate| self.validate(candidate, None)))
    }

    /// Parses a number known to belong to `country`, written in any form:
    /// national, with `+` and calling code, or with this country's exit
    /// code.
    ///
    /// The calling code is stripped speculatively: some national numbers
    /// start with the digits of their own calling code, so an invalid
    /// result falls back to the normalized input.
    pub fn from_iso_code(&self, country: &str, text: &str) -> Result<CanonicalPhoneNumber> {
        let metadata = self.metadata_for_iso_code(country)?;
        let normalized = normalize(text);
        let stripped = self.strip_international_prefix(&normalized, Some(metadata));
        let national_number = strip_country_code(stripped.phone_number, metadata.country_code());
        let transformed = self.parse_national(metadata, &national_number);
        Ok(ParseCandidates::new(
            CanonicalPhoneNumber::new(metadata.id(), transformed),
            CanonicalPhoneNumber::new(metadata.id(), strip_plus_sign(&normalized)),
        )
        .select(|candidate| self.validate(candidate, None)))
    }

    /// Parses a number for a calling code that may be shared by several
    /// countries. The country is picked from the number itself, so only
    /// lengths are checked before accepting the transformation.
    pub fn from_country_code(&self, country_calling_code: &str, text: &str) -> Result<CanonicalPhoneNumber> {
        let country_calling_code = self.parse_calling_code(country_calling_code)?;
        let normalized = normalize(text);
        let stripped = self.strip_international_prefix(&normalized, None);
        let national_number = strip_country_code(stripped.phone_number, country_calling_code);
        self.resolve_for_calling_code(
            country_calling_code,
            &national_number,
            strip_plus_sign(&normalized),
            None,
        )
    }

    /// Parses free text, using whatever is known about where it was dialed
    /// from (`caller`) and where it goes (`destination`). An explicit
    /// destination always decides the country; the caller only tells which
    /// exit code and trunk prefix to expect.
    pub fn from_raw(
        &self,
        text: &str,
        caller: Option<&str>,
        destination: Option<&str>,
    ) -> Result<CanonicalPhoneNumber> {
        let known = match (caller, destination) {
            (None, None) => KnownCountries::Nothing,
            (Some(caller), None) => KnownCountries::CallerOnly(self.metadata_for_iso_code(caller)?),
            (None, Some(destination)) => {
                KnownCountries::DestinationOnly(self.metadata_for_iso_code(destination)?)
            }
            (Some(caller), Some(destination)) => KnownCountries::Both {
                caller: self.metadata_for_iso_code(caller)?,
                destination: self.metadata_for_iso_code(destination)?,
            },
        };
        self.resolve(text, known)
    }

    fn resolve(&self, text: &str, known: KnownCountries) -> Result<CanonicalPhoneNumber> {
        let normalized = normalize(text);
        let original = strip_plus_sign(&normalized);
        trace!("Resolving '{}' knowing {:?}", normalized, known);
        match known {
            KnownCountries::Nothing => {
                let stripped = self.strip_international_prefix(&normalized, None);
                self.resolve_extracted_country_code(&stripped.phone_number, original)
            }
            KnownCountries::DestinationOnly(destination) => {
                let stripped = self.strip_international_prefix(&normalized, None);
                self.resolve_for_destination(stripped.phone_number, original, destination)
            }
            KnownCountries::Both { caller, destination } => {
                let stripped = self.strip_international_prefix(&normalized, Some(caller));
                self.resolve_for_destination(stripped.phone_number, original, destination)
            }
            KnownCountries::CallerOnly(caller) => {
                let stripped = self.strip_international_prefix(&normalized, Some(caller));
                if stripped.was_dialed_internationally() {
                    return self.resolve_extracted_country_code(&stripped.phone_number, original);
                }
                // Dialed domestically: the destination shares the caller's
                // calling code, and the caller's own transform already ran.
                let national_number = self.parse_national(caller, &stripped.phone_number);
                let metadata = self.guess_country(caller.country_code(), &national_number)?;
                let transformed = if metadata.id() == caller.id() {
                    national_number
                } else {
                    self.parse_national(metadata, &national_number)
                };
                Ok(select_by_length(self, metadata, transformed, original))
            }
        }
    }

    fn resolve_extracted_country_code(&self, phone_number: &str, original: &str) -> Result<CanonicalPhoneNumber> {
        let country_calling_code = self.extract_country_code(phone_number)?;
        let national_number = strip_country_code(Cow::Borrowed(phone_number), country_calling_code);
        self.resolve_for_calling_code(country_calling_code, &national_number, original, None)
    }

    fn resolve_for_destination(
        &self,
        phone_number: Cow<'_, str>,
        original: &str,
        destination: &CountryMetadata,
    ) -> Result<CanonicalPhoneNumber> {
        let country_calling_code = destination.country_code();
        let national_number = strip_country_code(phone_number, country_calling_code);
        self.resolve_for_calling_code(country_calling_code, &national_number, original, Some(destination))
    }

    /// Shared tail of every calling code based path. `pinned` skips
    /// disambiguation when the country is already known.
    fn resolve_for_calling_code(
        &self,
        country_calling_code: i32,
        national_number: &str,
        original: &str,
        pinned: Option<&CountryMetadata>,
    ) -> Result<CanonicalPhoneNumber> {
        let metadata = match pinned {
            Some(metadata) => metadata,
            None => self.guess_country(country_calling_code, national_number)?,
        };
        let transformed = self.parse_national(metadata, national_number);
        Ok(select_by_length(self, metadata, transformed, original))
    }

    fn guess_country(&self, country_calling_code: i32, national_number: &str) -> Result<&CountryMetadata> {
        let candidates = self.store.get_metadatas_for_country_code(country_calling_code);
        self.find_best_match(national_number, &candidates)
            .ok_or(ParseError::InvalidCountryCode)
    }

    fn metadata_for_iso_code(&self, country: &str) -> Result<&CountryMetadata> {
        i18n::RegionCode::normalize(country)
            .and_then(|region_code| self.store.get_metadata_for_iso_code(&region_code))
            .ok_or_else(|| {
                warn!("Invalid or unknown region code provided: {}", country);
                ParseError::InvalidCountryCode
            })
    }

    fn parse_calling_code(&self, country_calling_code: &str) -> Result<i32> {
        let normalized = normalize(country_calling_code);
        let digits = strip_plus_sign(&normalized);
        if digits.is_empty() || digits.len() > MAX_LENGTH_COUNTRY_CODE {
            warn!("Invalid country calling code provided: {}", country_calling_code);
            return Err(ParseError::InvalidCountryCode);
        }
        match digits.parse::<i32>() {
            Ok(code) if self.store.has_valid_country_calling_code(code) => Ok(code),
            _ => {
                warn!("Unknown country calling code provided: {}", country_calling_code);
                Err(ParseError::InvalidCountryCode)
            }
        }
    }

    pub fn get_supported_regions(&self) -> Vec<&str> {
        self.store.get_supported_regions()
    }

    pub fn get_supported_calling_codes(&self) -> HashSet<i32> {
        self.store.get_supported_calling_codes()
    }

    /// Region codes sharing `country_calling_code`, main country first.
    pub fn get_region_codes_for_country_calling_code(&self, country_calling_code: i32) -> Vec<&str> {
        self.store.get_region_codes_for_country_calling_code(country_calling_code)
    }

    pub fn get_supported_types_for_region(&self, region_code: &str) -> Option<HashSet<PhoneNumberType>> {
        self.metadata_for_iso_code(region_code)
            .ok()
            .map(get_supported_types_for_metadata)
    }

    /// Returns the country calling code for a specific region. For example, this
    /// would be 1 for the United States, and 64 for New Zealand.
    pub fn get_country_code_for_region(&self, region_code: &str) -> Option<i32> {
        self.metadata_for_iso_code(region_code)
            .ok()
            .map(|metadata| metadata.country_code())
    }
}

/// The guessed country owns both candidates. Only lengths are checked, since
/// the country itself is a guess.
fn select_by_length(
    canonicalizer: &PhoneNumberCanonicalizer,
    metadata: &CountryMetadata,
    transformed: Cow<'_, str>,
    original: &str,
) -> CanonicalPhoneNumber {
    ParseCandidates::new(
        CanonicalPhoneNumber::new(metadata.id(), transformed),
        CanonicalPhoneNumber::new(metadata.id(), original),
    )
    .select(|candidate| canonicalizer.validate_length(candidate))
}
