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

use log::trace;

use crate::proto_gen::phonemetadata::{CountryMetadata, PhoneNumberDesc};

use super::{
    CanonicalPhoneNumber, NumberLengthType, PhoneNumberCanonicalizer, PhoneNumberType, ValidationError,
    helper_functions::{desc_has_data, get_number_desc_by_type, test_number_length, test_number_length_with_unknown_type},
};

impl PhoneNumberCanonicalizer {
    /// Checks a number against its country's rules.
    ///
    /// Without a type the length must be one of the country's possible
    /// lengths and the number must match one of its number types. With a type
    /// only that type's lengths and pattern are used; `FixedLineOrMobile`
    /// accepts either. Unknown countries and types without data are never
    /// valid.
    pub fn validate(&self, phone_number: &CanonicalPhoneNumber, phone_number_type: Option<PhoneNumberType>) -> bool {
        let Some(metadata) = self.store.get_metadata_for_iso_code(phone_number.country()) else {
            trace!("No metadata for {}, {:?} is invalid", phone_number.country(), phone_number);
            return false;
        };
        let national_number = phone_number.national_significant_number();
        match phone_number_type {
            None => {
                is_possible_length(test_number_length_with_unknown_type(national_number, metadata))
                    && self.get_number_type_helper(national_number, metadata) != PhoneNumberType::Unknown
            }
            Some(PhoneNumberType::FixedLineOrMobile) => {
                self.is_valid_for_type(national_number, metadata, PhoneNumberType::FixedLine)
                    || self.is_valid_for_type(national_number, metadata, PhoneNumberType::Mobile)
            }
            Some(phone_number_type) => self.is_valid_for_type(national_number, metadata, phone_number_type),
        }
    }

    /// Checks only the possible lengths of the number's country. Anything
    /// [`validate`](Self::validate) accepts without a type passes here too.
    pub fn validate_length(&self, phone_number: &CanonicalPhoneNumber) -> bool {
        self.store
            .get_metadata_for_iso_code(phone_number.country())
            .map(|metadata| {
                is_possible_length(test_number_length_with_unknown_type(
                    phone_number.national_significant_number(),
                    metadata,
                ))
            })
            .unwrap_or(false)
    }

    /// Gets the type of a valid phone number.
    pub fn get_number_type(&self, phone_number: &CanonicalPhoneNumber) -> PhoneNumberType {
        let Some(metadata) = self.store.get_metadata_for_iso_code(phone_number.country()) else {
            return PhoneNumberType::Unknown;
        };
        self.get_number_type_helper(phone_number.national_significant_number(), metadata)
    }

    /// Tells how the length of the number compares to what its country
    /// allows, e.g. [`ValidationError::TooShort`].
    pub fn test_number_length(
        &self,
        phone_number: &CanonicalPhoneNumber,
    ) -> Result<NumberLengthType, ValidationError> {
        let metadata = self
            .store
            .get_metadata_for_iso_code(phone_number.country())
            .ok_or(ValidationError::InvalidCountryCode)?;
        test_number_length_with_unknown_type(phone_number.national_significant_number(), metadata)
    }

    fn is_valid_for_type(
        &self,
        national_number: &str,
        metadata: &CountryMetadata,
        phone_number_type: PhoneNumberType,
    ) -> bool {
        let desc = get_number_desc_by_type(metadata, phone_number_type);
        if !desc_has_data(desc) {
            trace!("{} has no data for {:?}", metadata.id(), phone_number_type);
            return false;
        }
        is_possible_length(test_number_length(national_number, metadata, phone_number_type))
            && self.matcher_api.match_national_number(national_number, desc)
    }

    pub(super) fn get_number_type_helper(
        &self,
        national_number: &str,
        metadata: &CountryMetadata
    ) -> PhoneNumberType {
        if !self.is_number_matching_desc(national_number, metadata.general_desc.get_or_default()) {
            trace!("Number '{national_number}' type unknown - doesn't match general national number pattern");
            return PhoneNumberType::Unknown
        }
        if self.is_number_matching_desc(national_number, metadata.premium_rate.get_or_default()) {
            trace!("Number '{national_number}' is a premium number.");
            return PhoneNumberType::PremiumRate;
        }
        if self.is_number_matching_desc(national_number, metadata.toll_free.get_or_default()) {
            trace!("Number '{national_number}' is a toll-free number.");
            return PhoneNumberType::TollFree;
        }
        if self.is_number_matching_desc(national_number, metadata.shared_cost.get_or_default()) {
            trace!("Number '{national_number}' is a shared cost number.");
            return PhoneNumberType::SharedCost;
        }
        if self.is_number_matching_desc(national_number, metadata.voip.get_or_default()) {
            trace!("Number '{national_number}' is a VOIP (Voice over IP) number.");
            return PhoneNumberType::VoIP;
        }
        if self.is_number_matching_desc(national_number, metadata.personal_number.get_or_default()) {
            trace!("Number '{national_number}' is a personal number.");
            return PhoneNumberType::PersonalNumber;
        }
        if self.is_number_matching_desc(national_number, metadata.pager.get_or_default()) {
            trace!("Number '{national_number}' is a pager number.");
            return PhoneNumberType::Pager;
        }
        if self.is_number_matching_desc(national_number, metadata.uan.get_or_default()) {
            trace!("Number '{national_number}' is a UAN.");
            return PhoneNumberType::UAN;
        }
        if self.is_number_matching_desc(national_number, metadata.voicemail.get_or_default()) {
            trace!("Number '{national_number}' is a voicemail number.");
            return PhoneNumberType::VoiceMail;
        }

        let is_fixed_line = self.is_number_matching_desc(national_number, metadata.fixed_line.get_or_default());
        if is_fixed_line {
            if metadata.same_mobile_and_fixed_line_pattern() {
                trace!("Number '{national_number}': fixed-line and mobile patterns equal, \
                 number is fixed-line or mobile");
                return PhoneNumberType::FixedLineOrMobile;
            }
            else if self.is_number_matching_desc(national_number, metadata.mobile.get_or_default()) {
                trace!("Number '{national_number}': Fixed-line and mobile patterns differ, but number is \
                        still fixed-line or mobile"
                );
                return PhoneNumberType::FixedLineOrMobile;
            }
            trace!("Number '{national_number}' is a fixed line number.");
            return PhoneNumberType::FixedLine;
        }
        // Otherwise, test to see if the number is mobile. Only do this if certain
        // that the patterns for mobile and fixed line aren't the same.
        if !metadata.same_mobile_and_fixed_line_pattern()
            && self.is_number_matching_desc(national_number, metadata.mobile.get_or_default()) {
            trace!("Number '{national_number}' is a mobile number.");
            return PhoneNumberType::Mobile;
        }
        trace!("Number '{national_number}' type unknown - doesn't match any specific number type pattern.");
        return PhoneNumberType::Unknown;
    }

    fn is_number_matching_desc(
        &self,
        national_number: &str,
        number_desc: &PhoneNumberDesc
    ) -> bool {
        // Check if any possible number lengths are present; if so, we use them to
        // avoid checking the validation pattern if they don't match. If they are
        // absent, this means they match the general description, which we have
        // already checked before checking a specific number type.
        let actual_length = national_number.len() as i32;
        if number_desc.possible_length.len() > 0 && !number_desc.possible_length.contains(&actual_length) {
            return false;
        }
        self.matcher_api.match_national_number(national_number, number_desc)
    }
}

fn is_possible_length(result: Result<NumberLengthType, ValidationError>) -> bool {
    matches!(result, Ok(NumberLengthType::IsPossible))
}
