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

use std::collections::HashSet;

use strum::IntoEnumIterator;

use crate::proto_gen::phonemetadata::{CountryMetadata, PhoneNumberDesc};

use super::{
    NumberLengthType, PhoneNumberType, ValidationError,
    helper_constants::{PLUS_SIGN, WAIT_FOR_TONE},
};

/// Returns a pointer to the description inside the metadata of the appropriate
/// type.
pub(super) fn get_number_desc_by_type(
    metadata: &CountryMetadata,
    phone_number_type: PhoneNumberType,
) -> &PhoneNumberDesc {
    match phone_number_type {
        PhoneNumberType::PremiumRate => metadata.premium_rate.get_or_default(),
        PhoneNumberType::TollFree => metadata.toll_free.get_or_default(),
        PhoneNumberType::Mobile => metadata.mobile.get_or_default(),
        PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile => metadata.fixed_line.get_or_default(),
        PhoneNumberType::SharedCost => metadata.shared_cost.get_or_default(),
        PhoneNumberType::VoIP => metadata.voip.get_or_default(),
        PhoneNumberType::PersonalNumber => metadata.personal_number.get_or_default(),
        PhoneNumberType::Pager => metadata.pager.get_or_default(),
        PhoneNumberType::UAN => metadata.uan.get_or_default(),
        PhoneNumberType::VoiceMail => metadata.voicemail.get_or_default(),
        // Instead of the default case, we only match `Unknown`
        PhoneNumberType::Unknown => metadata.general_desc.get_or_default(),
    }
}

/// The normalized number without its leading plus sign: the digits-only
/// form the revert heuristic falls back to.
pub(super) fn strip_plus_sign(normalized_number: &str) -> &str {
    normalized_number.strip_prefix(PLUS_SIGN).unwrap_or(normalized_number)
}

/// National prefix of the country as it appears in a normalized number.
pub(super) fn get_national_prefix_for_parsing(metadata: &CountryMetadata) -> String {
    metadata.national_prefix().replace(WAIT_FOR_TONE, "")
}

/// Returns `true` if there is any possible number data set for a particular
/// PhoneNumberDesc.
pub(super) fn desc_has_possible_number_data(desc: &PhoneNumberDesc) -> bool {
    // If this is empty, it means numbers of this type inherit from the "general
    // desc" -> the value "-1" means that no numbers exist for this type.
    return desc.possible_length.len() != 1
        || desc
            .possible_length
            .get(0)
            .map(|l| *l != -1)
            .unwrap_or(false);
}

/// Returns `true` if there is any data set for a particular PhoneNumberDesc.
pub(super) fn desc_has_data(desc: &PhoneNumberDesc) -> bool {
    // Checking most properties since we don't know what's present, since a custom
    // metadata table may have stripped just one of them. We don't bother checking
    // the PossibleLengthsLocalOnly, since if this is the only thing that's present
    // we don't really support the type at all.
    return desc.has_example_number()
        || (desc.possible_length.len() > 0 && desc_has_possible_number_data(desc))
        || desc.has_national_number_pattern();
}

/// Returns the types we have metadata for based on the CountryMetadata object
/// passed in.
pub(super) fn get_supported_types_for_metadata(
    metadata: &CountryMetadata,
) -> HashSet<PhoneNumberType> {
    PhoneNumberType::iter()
        // Never return FIXED_LINE_OR_MOBILE (it is a convenience type, and
        // represents that a particular number type can't be
        // determined) or UNKNOWN (the non-type).
        .filter(|number_type| {
            !matches!(
                number_type,
                PhoneNumberType::FixedLineOrMobile | PhoneNumberType::Unknown
            )
        })
        .filter(|number_type| desc_has_data(get_number_desc_by_type(metadata, *number_type)))
        .collect()
}

/// Helper method to check a number against possible lengths for this number
/// type, and determine whether it matches, or is too short or too long.
pub(super) fn test_number_length(
    phone_number: &str,
    phone_metadata: &CountryMetadata,
    phone_number_type: PhoneNumberType,
) -> Result<NumberLengthType, ValidationError> {
    let general_desc = phone_metadata.general_desc.get_or_default();
    let desc_for_type = get_number_desc_by_type(phone_metadata, phone_number_type);
    // Where a sub-description (e.g. fixed-line) has the same possibleLengths as
    // the parent, this is missing, so we fall back to the general desc (where no
    // numbers of the type exist at all, there is one possible length (-1) which
    // is guaranteed not to match the length of any real phone number).
    let mut possible_lengths = if desc_for_type.possible_length.is_empty() {
        general_desc.possible_length.clone()
    } else {
        desc_for_type.possible_length.clone()
    };

    let mut local_lengths = desc_for_type.possible_length_local_only.clone();
    if phone_number_type == PhoneNumberType::FixedLineOrMobile {
        let fixed_line_desc = get_number_desc_by_type(phone_metadata, PhoneNumberType::FixedLine);
        if !desc_has_possible_number_data(fixed_line_desc) {
            // The rare case has been encountered where no fixedLine data is available
            // (true for some non-geographical entities), so we just check mobile.
            return test_number_length(phone_number, phone_metadata, PhoneNumberType::Mobile);
        } else {
            let mobile_desc = get_number_desc_by_type(phone_metadata, PhoneNumberType::Mobile);
            if desc_has_possible_number_data(mobile_desc) {
                // Merge the mobile data in if there was any. Empty mobile lengths
                // mean "same as the general desc".
                let len_to_append = if mobile_desc.possible_length.is_empty() {
                    &general_desc.possible_length
                } else {
                    &mobile_desc.possible_length
                };
                possible_lengths.extend_from_slice(len_to_append);

                if local_lengths.is_empty() {
                    local_lengths = mobile_desc.possible_length_local_only.clone();
                } else {
                    local_lengths.extend_from_slice(&mobile_desc.possible_length_local_only);
                }
            }
        }
    }
    possible_lengths.sort_unstable();
    possible_lengths.dedup();

    // If the type is not suported at all (indicated by the possible lengths
    // containing -1 at this point) or the metadata declares no lengths we
    // return invalid length.
    let (Some(&minimum_length), Some(&maximum_length)) = (possible_lengths.first(), possible_lengths.last()) else {
        return Err(ValidationError::InvalidLength);
    };
    if minimum_length == -1 {
        return Err(ValidationError::InvalidLength);
    }

    let actual_length = phone_number.len() as i32;
    // This is safe because there is never an overlap beween the possible lengths
    // and the local-only lengths.
    if local_lengths.contains(&actual_length) {
        return Ok(NumberLengthType::IsPossibleLocalOnly);
    }

    if minimum_length == actual_length {
        return Ok(NumberLengthType::IsPossible);
    } else if minimum_length > actual_length {
        return Err(ValidationError::TooShort);
    } else if maximum_length < actual_length {
        return Err(ValidationError::TooLong);
    }
    // We skip the first element; we've already checked it.
    return if possible_lengths[1..].contains(&actual_length) {
        Ok(NumberLengthType::IsPossible)
    } else {
        Err(ValidationError::InvalidLength)
    };
}

/// Helper method to check a number against possible lengths for this region,
/// based on the metadata being passed in, and determine whether it matches, or
/// is too short or too long.
pub(super) fn test_number_length_with_unknown_type(
    phone_number: &str,
    phone_metadata: &CountryMetadata,
) -> Result<NumberLengthType, ValidationError> {
    return test_number_length(phone_number, phone_metadata, PhoneNumberType::Unknown);
}
