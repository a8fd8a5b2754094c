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

/// A phone number reduced to the country it belongs to and its national
/// significant number (NSN).
///
/// Every parsing entry point returns one of these, even for input that does
/// not validate; call
/// [`validate`](super::PhoneNumberCanonicalizer::validate) to find out
/// whether it is usable. Values are immutable: a corrected number is a new
/// instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalPhoneNumber {
    country: String,
    national_significant_number: String,
}

impl CanonicalPhoneNumber {
    pub(crate) fn new(country: impl Into<String>, national_significant_number: impl Into<String>) -> Self {
        let national_significant_number = national_significant_number.into();
        debug_assert!(national_significant_number.bytes().all(|b| b.is_ascii_digit()));
        Self { country: country.into(), national_significant_number }
    }

    /// ISO 3166-1 alpha-2 code of the country the number was resolved to.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Digits only: no separators, exit code, calling code or trunk prefix.
    pub fn national_significant_number(&self) -> &str {
        &self.national_significant_number
    }

    pub fn into_parts(self) -> (String, String) {
        (self.country, self.national_significant_number)
    }
}
