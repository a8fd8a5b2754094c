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

use super::helper_constants::{PLUS_CHARS, PLUS_SIGN};

/// Reduces free text to ASCII digits with an optional single leading `+`.
///
/// Any Unicode decimal digit is folded to its ASCII value first. A plus sign
/// (ASCII or full-width) is kept only if it comes before the first digit;
/// everything else, letters included, is dropped. Never fails, and
/// normalizing twice gives the same result as normalizing once.
pub fn normalize(phone_number: &str) -> String {
    let folded = dec_from_char::normalize_decimals(phone_number);
    let mut normalized_number = String::with_capacity(folded.len());
    for phone_char in folded.chars() {
        if phone_char.is_ascii_digit() {
            normalized_number.push(phone_char);
        } else if normalized_number.is_empty() && PLUS_CHARS.contains(phone_char) {
            normalized_number.push_str(PLUS_SIGN);
        }
        // If neither of the above are true, we remove this character.
    }
    normalized_number
}
