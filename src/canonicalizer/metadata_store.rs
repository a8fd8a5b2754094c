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

use std::collections::{HashMap, HashSet, VecDeque};

use log::trace;

use crate::{
    generated::metadata::METADATA,
    i18n,
    proto_gen::phonemetadata::{CountryMetadata, CountryMetadataCollection},
};

use super::MetadataError;

/// Read-only country table, indexed by ISO code and by calling code.
///
/// Built once and never mutated afterwards, so it can be shared between
/// threads by reference.
#[derive(Debug, Default)]
pub struct MetadataStore {
    /// A mapping from a region code to a CountryMetadata for that region.
    region_to_metadata_map: HashMap<String, CountryMetadata>,

    /// A mapping from a country calling code to the region codes that share
    /// it. Russia and Kazakhstan share the country calling code 7, and the
    /// main country for a code (here "RU") always comes first. This is
    /// implemented as a sorted vector to achieve better performance.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)>,
}

impl MetadataStore {
    /// Parses a protobuf text-format table (see
    /// `resources/metadata.textproto` for the layout).
    pub fn from_text_format(text: &str) -> Result<Self, MetadataError> {
        let collection = protobuf::text_format::parse_from_str::<CountryMetadataCollection>(text)
            .map_err(|err| MetadataError::Malformed(format!("{:?}", err)))?;
        Self::from_collection(collection)
    }

    pub fn from_collection(collection: CountryMetadataCollection) -> Result<Self, MetadataError> {
        let mut instance = Self::default();
        // Storing data in a temporary map to make it easier to find other regions
        // that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::<i32, VecDeque<String>>::new();
        for mut metadata in collection.metadata {
            let region_code = metadata.id().to_ascii_uppercase();
            if i18n::RegionCode::get_unknown() == region_code {
                continue;
            }
            if !metadata.has_country_code() {
                return Err(MetadataError::MissingCallingCode(region_code));
            }
            if !metadata
                .national_number_rule
                .iter()
                .all(|rule| is_digits_and_group_references(rule.replacement()))
            {
                return Err(MetadataError::InvalidRuleReplacement(region_code));
            }
            if instance.region_to_metadata_map.contains_key(&region_code) {
                return Err(MetadataError::DuplicateRegion(region_code));
            }
            let country_calling_code = metadata.country_code();
            let main_country_for_code = metadata.main_country_for_code();

            let regions = country_calling_code_to_region_map
                .entry(country_calling_code)
                // For most country calling codes, there will be only one region code.
                .or_insert_with(|| VecDeque::with_capacity(1));
            if main_country_for_code {
                regions.push_front(region_code.clone());
            } else {
                regions.push_back(region_code.clone());
            }
            // Canonical numbers carry the id, so keep it in the case lookups use.
            metadata.set_id(region_code.clone());
            instance.region_to_metadata_map.insert(region_code, metadata);
        }

        instance.country_calling_code_to_region_code_map.extend(
            country_calling_code_to_region_map.into_iter().map(|(k, v)| (k, Vec::from(v)))
        );
        // Sort all the pairs in ascending order according to country calling code.
        instance
            .country_calling_code_to_region_code_map
            .sort_by_key(|(a, _)| *a);
        trace!(
            "Loaded metadata for {} regions and {} calling codes",
            instance.region_to_metadata_map.len(),
            instance.country_calling_code_to_region_code_map.len()
        );
        Ok(instance)
    }

    /// The table compiled into the crate.
    pub fn compiled() -> Result<Self, MetadataError> {
        Self::from_text_format(METADATA)
    }

    /// Looks up a region by its upper-case ISO code.
    pub fn get_metadata_for_iso_code(&self, region_code: &str) -> Option<&CountryMetadata> {
        self.region_to_metadata_map.get(region_code)
    }

    /// All records sharing `country_calling_code`, main country first. Empty
    /// if the code is unknown.
    pub fn get_metadatas_for_country_code(&self, country_calling_code: i32) -> Vec<&CountryMetadata> {
        self.get_region_codes_for_country_calling_code(country_calling_code)
            .into_iter()
            // Region codes come from the same table, so the lookup can't miss.
            .filter_map(|region_code| self.region_to_metadata_map.get(region_code))
            .collect()
    }

    pub fn get_region_codes_for_country_calling_code(&self, country_calling_code: i32) -> Vec<&str> {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .map(|index| {
                self.country_calling_code_to_region_code_map[index]
                    .1
                    .iter()
                    .map(|v| v.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_valid_country_calling_code(&self, country_calling_code: i32) -> bool {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(k, _)| *k)
            .is_ok()
    }

    pub fn get_supported_regions(&self) -> Vec<&str> {
        self.region_to_metadata_map.keys().map(|k| k.as_str()).collect()
    }

    pub fn get_supported_calling_codes(&self) -> HashSet<i32> {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(k, _)| *k)
            .collect()
    }
}

/// Rule output becomes an NSN, so a replacement may only hold digits and
/// `$n` group references.
fn is_digits_and_group_references(replacement: &str) -> bool {
    let mut bytes = replacement.bytes();
    while let Some(b) = bytes.next() {
        let is_valid = match b {
            b'$' => bytes.next().is_some_and(|n| n.is_ascii_digit()),
            b => b.is_ascii_digit(),
        };
        if !is_valid {
            return false;
        }
    }
    true
}
