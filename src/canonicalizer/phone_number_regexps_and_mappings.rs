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

use regex::Regex;

use crate::regexp_cache::RegexCache;

use super::helper_constants::{GENERIC_INTERNATIONAL_PREFIX, GROUP_REFERENCE};

pub(super) struct PhoneNumberRegExpsAndMappings {
    /// Patterns that come from metadata (international prefixes, leading
    /// digits, national number rules), compiled on first use.
    pub regexp_cache: RegexCache,

    /// Exit code assumed when nothing tells us where the number was dialed
    /// from.
    pub generic_international_prefix_pattern: Regex,

    /// A `$` followed by one digit in a rule replacement. Each reference
    /// takes exactly one digit, so `$19` is group 1 then a literal `9`.
    pub group_reference_pattern: Regex,
}

impl PhoneNumberRegExpsAndMappings {
    pub fn new() -> Self {
        Self {
            regexp_cache: RegexCache::with_capacity(128),
            generic_international_prefix_pattern: Regex::new(GENERIC_INTERNATIONAL_PREFIX).unwrap(),
            group_reference_pattern: Regex::new(GROUP_REFERENCE).unwrap(),
        }
    }
}
