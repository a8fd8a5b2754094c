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

use log::trace;

use crate::proto_gen::phonemetadata::CountryMetadata;

use super::{CanonicalPhoneNumber, enums::CountryCodeSource};

#[derive(Debug)]
pub struct PhoneNumberWithCountryCodeSource<'a> {
    pub phone_number: Cow<'a, str>,
    pub country_code_source: CountryCodeSource
}

impl<'a> PhoneNumberWithCountryCodeSource<'a> {
    pub fn new(phone_number: Cow<'a, str>, country_code_source: CountryCodeSource) -> Self {
        Self { phone_number, country_code_source }
    }

    /// `true` when a `+` or an exit code was removed.
    pub fn was_dialed_internationally(&self) -> bool {
        !matches!(self.country_code_source, CountryCodeSource::FromDefaultCountry)
    }
}

/// What the caller of the general entry point already told us.
#[derive(Debug, Clone, Copy)]
pub enum KnownCountries<'m> {
    Nothing,
    CallerOnly(&'m CountryMetadata),
    DestinationOnly(&'m CountryMetadata),
    Both {
        caller: &'m CountryMetadata,
        destination: &'m CountryMetadata,
    },
}

/// Result of one speculative pass through the pipeline: the transformed
/// number and the untransformed one to fall back to.
#[derive(Debug)]
pub struct ParseCandidates {
    transformed: CanonicalPhoneNumber,
    fallback: CanonicalPhoneNumber,
}

impl ParseCandidates {
    pub fn new(transformed: CanonicalPhoneNumber, fallback: CanonicalPhoneNumber) -> Self {
        Self { transformed, fallback }
    }

    /// Keeps the transformed number if `is_valid` accepts it, the fallback
    /// otherwise. The fallback is returned even when it does not validate
    /// either.
    pub fn select(self, is_valid: impl Fn(&CanonicalPhoneNumber) -> bool) -> CanonicalPhoneNumber {
        if self.transformed == self.fallback || is_valid(&self.transformed) {
            return self.transformed;
        }
        trace!(
            "Transformed number {:?} is invalid, reverting to {:?}",
            self.transformed, self.fallback
        );
        self.fallback
    }
}
