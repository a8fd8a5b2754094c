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

use crate::{proto_gen::phonemetadata::CountryMetadata, string_util::strip_cow_prefix};

use super::{PhoneNumberCanonicalizer, helper_functions::get_national_prefix_for_parsing};

/// Strips the country's trunk prefix from the start of the number. The flag
/// tells whether one was there.
pub(super) fn remove_national_prefix<'a>(
    phone_number: Cow<'a, str>,
    metadata: &CountryMetadata,
) -> (Cow<'a, str>, bool) {
    strip_cow_prefix(phone_number, &get_national_prefix_for_parsing(metadata))
}

fn has_national_prefix(metadata: &CountryMetadata) -> bool {
    !get_national_prefix_for_parsing(metadata).is_empty()
}

impl PhoneNumberCanonicalizer {
    /// Applies the first national number rule whose pattern spans the whole
    /// number, e.g. inserting a mobile token. Capture groups are substituted
    /// into the replacement positionally: `$1`, `$2`... each take one digit,
    /// so `$19` is group 1 followed by a `9`. Returns the input when no rule
    /// matches.
    pub(super) fn transform_national_number_using_rules<'a>(
        &self,
        phone_number: Cow<'a, str>,
        metadata: &CountryMetadata,
    ) -> Cow<'a, str> {
        for rule in &metadata.national_number_rule {
            if rule.pattern().is_empty() {
                continue;
            }
            let pattern = match self.reg_exps.regexp_cache.get_full_match_regex(rule.pattern()) {
                Ok(pattern) => pattern,
                Err(err) => {
                    error!("Invalid national number rule {} for {}: {}", rule.pattern(), metadata.id(), err);
                    continue;
                }
            };
            let Some(captures) = pattern.captures(&phone_number) else {
                continue;
            };
            // `$n` reads as many digits as follow it in `expand`, so pin each
            // reference to a single group first.
            let replacement = self
                .reg_exps
                .group_reference_pattern
                .replace_all(rule.replacement(), "$${${1}}");
            let mut transformed = String::with_capacity(phone_number.len() + replacement.len());
            captures.expand(&replacement, &mut transformed);
            trace!("Rule {} rewrote '{}' to '{}'", rule.pattern(), phone_number, transformed);
            return Cow::Owned(transformed);
        }
        phone_number
    }

    /// Turns a nationally dialed number into an NSN candidate for `metadata`.
    ///
    /// Rules are applied only after a trunk prefix was removed, or when the
    /// country has none: without it the area code boundary is unknown. If the
    /// input already is a well-formed NSN and the result is not, the input is
    /// returned.
    pub(super) fn parse_national<'a>(&self, metadata: &CountryMetadata, phone_number: &'a str) -> Cow<'a, str> {
        let (national_number, prefix_removed) = remove_national_prefix(Cow::Borrowed(phone_number), metadata);
        if !prefix_removed && has_national_prefix(metadata) {
            trace!("No national prefix in '{}' for {}, leaving it as is", phone_number, metadata.id());
            return national_number;
        }
        let transformed = self.transform_national_number_using_rules(national_number, metadata);

        let general_desc = metadata.general_desc.get_or_default();
        if transformed != phone_number
            && self.matcher_api.match_national_number(phone_number, general_desc)
            && !self.matcher_api.match_national_number(&transformed, general_desc)
        {
            trace!(
                "'{}' is a valid number for {} but '{}' is not, keeping it",
                phone_number, metadata.id(), transformed
            );
            return Cow::Borrowed(phone_number);
        }
        transformed
    }
}
