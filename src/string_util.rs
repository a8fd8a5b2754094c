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

/// Strips prefix of given string Cow. The returned flag is `true` if the
/// prefix was found and stripped; otherwise the Cow is handed back untouched.
///
/// Calls `drain` if string is owned and reslices if string is borrowed.
/// An empty prefix never counts as stripped.
pub fn strip_cow_prefix<'a>(cow: Cow<'a, str>, prefix: &str) -> (Cow<'a, str>, bool) {
    if prefix.is_empty() || !cow.starts_with(prefix) {
        return (cow, false);
    }
    match cow {
        Cow::Borrowed(s) => (Cow::Borrowed(&s[prefix.len()..]), true),
        Cow::Owned(mut s) => {
            s.drain(0..prefix.len());
            (Cow::Owned(s), true)
        }
    }
}
