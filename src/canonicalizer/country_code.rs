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

use std::borrow::Cow;

use log::{error, trace};

use crate::{proto_gen::phonemetadata::CountryMetadata, regex_util::RegexConsume, string_util::strip_cow_prefix};

use super::{
    ParseError, PhoneNumberCanonicalizer, PhoneNumberType,
    helper_constants::MAX_LENGTH_COUNTRY_CODE,
};

/// Removes `country_calling_code` from the start of `phone_number` if and
/// only if it is there. When nothing is stripped the same Cow comes back, so
/// callers can compare lengths to find out.
pub(super) fn strip_country_code<'a>(phone_number: Cow<'a, str>, country_calling_code: i32) -> Cow<'a, str> {
    let mut buf = itoa::Buffer::new();
    let (stripped, _) = strip_cow_prefix(phone_number, buf.format(country_calling_code));
    stripped
}

impl PhoneNumberCanonicalizer {
    /// Finds the calling code at the start of `phone_number` by trying
    /// prefixes of growing length against the known codes.
    pub(super) fn extract_country_code(&self, phone_number: &str) -> Result<i32, ParseError> {
        // Country codes do not begin with a '0'.
        if phone_number.is_empty() || phone_number.starts_with('0') {
            trace!("No calling code can start '{}'", phone_number);
            return Err(ParseError::InvalidCountryCode);
        }
        let max_length = MAX_LENGTH_COUNTRY_CODE.min(phone_number.len());
        for i in 1..=max_length {
            let Ok(potential_country_code) = phone_number[..i].parse::<i32>() else {
                break;
            };
            if self.store.has_valid_country_calling_code(potential_country_code) {
                trace!("Extracted calling code {} from '{}'", potential_country_code, phone_number);
                return Ok(potential_country_code);
            }
        }
        trace!("No known calling code at the start of '{}'", phone_number);
        Err(ParseError::InvalidCountryCode)
    }

    /// Picks the country among those sharing one calling code.
    ///
    /// Candidates are walked in store order (main country first). A country
    /// with leading digits wins if they match the start of the number; one
    /// without wins if its patterns recognize the number. If nothing wins,
    /// the main country is returned. `None` only for an empty candidate list.
    pub(super) fn find_best_match<'m>(
        &self,
        national_number: &str,
        candidates: &[&'m CountryMetadata],
    ) -> Option<&'m CountryMetadata> {
        if candidates.len() == 1 {
            return candidates.first().copied();
        }
        for metadata in candidates {
            if metadata.has_leading_digits() {
                match self.reg_exps.regexp_cache.get_regex(metadata.leading_digits()) {
                    Ok(leading_digits) => {
                        if leading_digits.matches_start(national_number) {
                            trace!("'{}' matches leading digits of {}", national_number, metadata.id());
                            return Some(*metadata);
                        }
                    }
                    Err(err) => {
                        error!("Invalid leading digits {} for {}: {}", metadata.leading_digits(), metadata.id(), err)
                    }
                }
            } else if self.get_number_type_helper(national_number, metadata) != PhoneNumberType::Unknown {
                trace!("'{}' is a known number type of {}", national_number, metadata.id());
                return Some(*metadata);
            }
        }
        trace!("No better match for '{}', using the main country", national_number);
        candidates.first().copied()
    }
}
