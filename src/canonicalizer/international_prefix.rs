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
use regex::Regex;

use crate::{proto_gen::phonemetadata::CountryMetadata, regex_util::RegexConsume};

use super::{
    PhoneNumberCanonicalizer,
    enums::CountryCodeSource,
    helper_constants::{PLUS_SIGN, WAIT_FOR_TONE},
    helper_types::PhoneNumberWithCountryCodeSource,
};

/// Strips the IDD from the start of the number if present. Returns `None`
/// when the pattern does not match at the start, or when what follows it
/// can't be a country calling code (nothing left, or a leading zero).
pub(super) fn parse_prefix_as_idd<'a>(idd_pattern: &Regex, phone_number: &'a str) -> Option<&'a str> {
    let idd = idd_pattern.find_start(phone_number)?;
    if idd.end() == 0 {
        return None;
    }
    let remainder = &phone_number[idd.end()..];
    // Country calling codes never begin with 0.
    if remainder.is_empty() || remainder.starts_with('0') {
        trace!("Exit code {} is followed by '{}', not a calling code", idd.as_str(), remainder);
        return None;
    }
    Some(remainder)
}

impl PhoneNumberCanonicalizer {
    /// Removes a leading `+`, or the exit code dialed from `caller`'s country
    /// (a generic one when the caller is unknown), from a normalized number.
    ///
    /// Nothing here fails: when no prefix is found the number comes back
    /// borrowed and unchanged with [`CountryCodeSource::FromDefaultCountry`].
    pub(super) fn strip_international_prefix<'a>(
        &self,
        phone_number: &'a str,
        caller: Option<&CountryMetadata>,
    ) -> PhoneNumberWithCountryCodeSource<'a> {
        if let Some(stripped) = phone_number.strip_prefix(PLUS_SIGN) {
            trace!("Stripped plus sign from '{}'", phone_number);
            return PhoneNumberWithCountryCodeSource::new(
                Cow::Borrowed(stripped),
                CountryCodeSource::FromNumberWithPlusSign,
            );
        }

        let stripped = match caller {
            Some(metadata) => self
                .get_international_prefix_pattern(metadata)
                .and_then(|idd_pattern| parse_prefix_as_idd(&idd_pattern, phone_number)),
            None => parse_prefix_as_idd(&self.reg_exps.generic_international_prefix_pattern, phone_number),
        };

        match stripped {
            Some(stripped) => {
                trace!("Stripped international prefix from '{}', left '{}'", phone_number, stripped);
                PhoneNumberWithCountryCodeSource::new(
                    Cow::Borrowed(stripped),
                    CountryCodeSource::FromNumberWithIdd,
                )
            }
            None => PhoneNumberWithCountryCodeSource::new(
                Cow::Borrowed(phone_number),
                CountryCodeSource::FromDefaultCountry,
            ),
        }
    }

    fn get_international_prefix_pattern(&self, metadata: &CountryMetadata) -> Option<std::sync::Arc<Regex>> {
        let international_prefix = metadata.international_prefix().replace(WAIT_FOR_TONE, "");
        if international_prefix.is_empty() {
            return None;
        }
        self.reg_exps
            .regexp_cache
            .get_regex(&international_prefix)
            .inspect_err(|err| {
                error!("Invalid international prefix {} for {}: {}", international_prefix, metadata.id(), err)
            })
            .ok()
    }
}
