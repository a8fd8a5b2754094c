use crate::{
    CanonicalPhoneNumber, MetadataStore, ParseError, PhoneNumberCanonicalizer, PhoneNumberType,
    normalize,
};

use super::region_code::RegionCode;

static ONCE: std::sync::Once = std::sync::Once::new();

fn get_canonicalizer() -> PhoneNumberCanonicalizer {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );

    let store = MetadataStore::compiled().expect("Metadata should be valid");
    return PhoneNumberCanonicalizer::new_for_metadata(store);
}

fn canonical(country: &str, national_significant_number: &str) -> CanonicalPhoneNumber {
    CanonicalPhoneNumber::new(country, national_significant_number)
}

#[test]
fn french_mobile_from_iso_code() {
    let canonicalizer = get_canonicalizer();
    let number = canonicalizer.from_iso_code(RegionCode::fr(), "06 86 57 90 14").unwrap();
    assert_eq!(number, canonical(RegionCode::fr(), "686579014"));
    assert!(canonicalizer.validate(&number, None));
}

#[test]
fn french_mobile_in_international_form() {
    let canonicalizer = get_canonicalizer();
    let expected = canonical(RegionCode::fr(), "686579014");
    assert_eq!(canonicalizer.from_iso_code(RegionCode::fr(), "+33 6 86 57 90 14").unwrap(), expected);
    assert_eq!(canonicalizer.from_iso_code(RegionCode::fr(), "0033 6 86 57 90 14").unwrap(), expected);
    assert_eq!(canonicalizer.from_iso_code("fr", "+33 (0)6 86 57 90 14").unwrap(), expected);
}

#[test]
fn french_mobile_from_calling_code() {
    let canonicalizer = get_canonicalizer();
    let number = canonicalizer.from_country_code("33", "686579014").unwrap();
    assert_eq!(number, canonical(RegionCode::fr(), "686579014"));
    assert!(canonicalizer.validate(&number, None));
    assert_eq!(canonicalizer.from_country_code("+33", "06 86 57 90 14").unwrap(), number);
}

#[test]
fn french_mobile_without_hints() {
    let canonicalizer = get_canonicalizer();
    assert_eq!(
        canonicalizer.from_raw("+33686579014", None, None).unwrap(),
        canonicalizer.from_iso_code(RegionCode::fr(), "06 86 57 90 14").unwrap()
    );
}

#[test]
fn kazakh_number_starting_with_calling_code() {
    let canonicalizer = get_canonicalizer();
    let expected = canonical(RegionCode::kz(), "7710009998");

    let number = canonicalizer.from_national(RegionCode::kz(), "7710009998").unwrap();
    assert_eq!(number, expected);
    assert!(canonicalizer.validate(&number, None));

    // Stripping the presumed "7" calling code would leave nine digits.
    let number = canonicalizer.from_iso_code(RegionCode::kz(), "7710009998").unwrap();
    assert_eq!(number, expected);
    assert!(canonicalizer.validate(&number, None));

    assert_eq!(canonicalizer.from_iso_code(RegionCode::kz(), "+7 771 000 9998").unwrap(), expected);
    assert_eq!(canonicalizer.from_iso_code(RegionCode::kz(), "8 771 000 9998").unwrap(), expected);
    assert_eq!(canonicalizer.from_country_code("7", "7710009998").unwrap(), expected);
}

#[test]
fn unknown_country_is_an_error() {
    let canonicalizer = get_canonicalizer();
    assert_eq!(canonicalizer.from_iso_code(RegionCode::zz(), "123"), Err(ParseError::InvalidCountryCode));
    assert_eq!(canonicalizer.from_national(RegionCode::zz(), "123"), Err(ParseError::InvalidCountryCode));
    assert_eq!(canonicalizer.from_iso_code("FRA", "123"), Err(ParseError::InvalidCountryCode));
    assert_eq!(canonicalizer.from_country_code("999", "123"), Err(ParseError::InvalidCountryCode));
    assert_eq!(canonicalizer.from_country_code("", "123"), Err(ParseError::InvalidCountryCode));
    assert_eq!(canonicalizer.from_country_code("1234", "123"), Err(ParseError::InvalidCountryCode));
    assert_eq!(
        canonicalizer.from_raw("0686579014", Some(RegionCode::zz()), None),
        Err(ParseError::InvalidCountryCode)
    );
    assert_eq!(
        canonicalizer.from_raw("0686579014", None, Some(RegionCode::zz())),
        Err(ParseError::InvalidCountryCode)
    );
}

#[test]
fn no_calling_code_without_hints_is_an_error() {
    let canonicalizer = get_canonicalizer();
    assert_eq!(canonicalizer.from_raw("06 86 57 90 14", None, None), Err(ParseError::InvalidCountryCode));
    assert_eq!(canonicalizer.from_raw("", None, None), Err(ParseError::InvalidCountryCode));
}

#[test]
fn invalid_input_still_yields_a_number() {
    let canonicalizer = get_canonicalizer();
    let number = canonicalizer.from_national(RegionCode::fr(), "12-3").unwrap();
    assert_eq!(number, canonical(RegionCode::fr(), "123"));
    assert!(!canonicalizer.validate(&number, None));

    let number = canonicalizer.from_iso_code(RegionCode::fr(), "no digits").unwrap();
    assert_eq!(number, canonical(RegionCode::fr(), ""));
    assert!(!canonicalizer.validate(&number, None));
    assert!(!canonicalizer.validate_length(&number));
}

#[test]
fn national_rules_insert_mobile_token() {
    let canonicalizer = get_canonicalizer();
    let expected = canonical(RegionCode::ar(), "91123456789");
    assert_eq!(canonicalizer.from_national(RegionCode::ar(), "011 15 2345 6789").unwrap(), expected);
    assert_eq!(canonicalizer.from_iso_code(RegionCode::ar(), "011 15 2345 6789").unwrap(), expected);
    assert_eq!(canonicalizer.from_raw("011 15 2345 6789", Some(RegionCode::ar()), None).unwrap(), expected);
    assert_eq!(
        canonicalizer.from_national(RegionCode::ar(), "0351 15 123 4567").unwrap(),
        canonical(RegionCode::ar(), "93511234567")
    );
    assert_eq!(canonicalizer.get_number_type(&expected), PhoneNumberType::Mobile);
}

#[test]
fn trunk_prefix_that_is_also_a_leading_digit() {
    let canonicalizer = get_canonicalizer();
    let expected = canonical(RegionCode::ru(), "8001234567");
    assert_eq!(canonicalizer.from_national(RegionCode::ru(), "8 800 123 45 67").unwrap(), expected);
    assert_eq!(canonicalizer.from_raw("8 800 123 45 67", Some(RegionCode::ru()), None).unwrap(), expected);
    assert_eq!(canonicalizer.get_number_type(&expected), PhoneNumberType::TollFree);
}

#[test]
fn countries_without_trunk_prefix() {
    let canonicalizer = get_canonicalizer();
    let expected = canonical(RegionCode::it(), "0212345678");
    assert_eq!(canonicalizer.from_national(RegionCode::it(), "02 1234 5678").unwrap(), expected);
    assert_eq!(canonicalizer.from_raw("+39 02 1234 5678", None, None).unwrap(), expected);
    assert!(canonicalizer.validate(&expected, Some(PhoneNumberType::FixedLine)));

    assert_eq!(
        canonicalizer.from_iso_code(RegionCode::de(), "030 123456").unwrap(),
        canonical(RegionCode::de(), "30123456")
    );
}

#[test]
fn shared_calling_code_disambiguation() {
    let canonicalizer = get_canonicalizer();
    assert_eq!(
        canonicalizer.from_country_code("1", "613 555 0123").unwrap(),
        canonical(RegionCode::ca(), "6135550123")
    );
    assert_eq!(
        canonicalizer.from_country_code("1", "1 242 365 1234").unwrap(),
        canonical(RegionCode::bs(), "2423651234")
    );
    assert_eq!(
        canonicalizer.from_raw("+1 650 253 0000", None, None).unwrap(),
        canonical(RegionCode::us(), "6502530000")
    );
    // Matches nobody: the main country for the code.
    assert_eq!(canonicalizer.from_country_code("1", "111").unwrap().country(), RegionCode::us());
}

#[test]
fn invalid_number_keeps_the_guessed_country() {
    let canonicalizer = get_canonicalizer();
    // One digit short for the Bahamas: the digits are kept, still under BS.
    let expected = canonical(RegionCode::bs(), "1242365123");
    assert_eq!(canonicalizer.from_raw("+1 242 365 123", None, None).unwrap(), expected);
    assert_eq!(canonicalizer.from_country_code("1", "1 242 365 123").unwrap(), expected);
    assert!(!canonicalizer.validate_length(&expected));
}

#[test]
fn raw_with_caller_only() {
    let canonicalizer = get_canonicalizer();
    assert_eq!(
        canonicalizer.from_raw("06 86 57 90 14", Some(RegionCode::fr()), None).unwrap(),
        canonical(RegionCode::fr(), "686579014")
    );
    // Dialed abroad with the caller's exit code.
    assert_eq!(
        canonicalizer.from_raw("810 33 6 86 57 90 14", Some(RegionCode::ru()), None).unwrap(),
        canonical(RegionCode::fr(), "686579014")
    );
    assert_eq!(
        canonicalizer.from_raw("011 44 20 8765 4321", Some(RegionCode::us()), None).unwrap(),
        canonical(RegionCode::gb(), "2087654321")
    );
    // A domestic call may still land in another country of the same plan.
    assert_eq!(
        canonicalizer.from_raw("613 555 0123", Some(RegionCode::us()), None).unwrap(),
        canonical(RegionCode::ca(), "6135550123")
    );
    assert_eq!(
        canonicalizer.from_raw("8 771 000 9998", Some(RegionCode::kz()), None).unwrap(),
        canonical(RegionCode::kz(), "7710009998")
    );
}

#[test]
fn raw_with_destination() {
    let canonicalizer = get_canonicalizer();
    assert_eq!(
        canonicalizer.from_raw("06 86 57 90 14", None, Some(RegionCode::fr())).unwrap(),
        canonical(RegionCode::fr(), "686579014")
    );
    // The destination is never second-guessed, even when another country of
    // the same calling code would fit better.
    assert_eq!(
        canonicalizer.from_raw("+1 613 555 0123", None, Some(RegionCode::us())).unwrap(),
        canonical(RegionCode::us(), "6135550123")
    );
}

#[test]
fn raw_with_caller_and_destination() {
    let canonicalizer = get_canonicalizer();
    let expected = canonical(RegionCode::fr(), "686579014");
    assert_eq!(
        canonicalizer.from_raw("810 33 6 86 57 90 14", Some(RegionCode::ru()), Some(RegionCode::fr())).unwrap(),
        expected
    );
    assert_eq!(
        canonicalizer.from_raw("06 86 57 90 14", Some(RegionCode::gb()), Some(RegionCode::fr())).unwrap(),
        expected
    );
}

#[test]
fn raw_with_generic_exit_code() {
    let canonicalizer = get_canonicalizer();
    let number = canonicalizer.from_raw("00 44 20 8765 4321", None, None).unwrap();
    assert_eq!(number, canonical(RegionCode::gb(), "2087654321"));
    assert!(canonicalizer.validate(&number, Some(PhoneNumberType::FixedLine)));
}

#[test]
fn normalization_is_idempotent() {
    let inputs = [
        "", "+", "++", "06 86 57 90 14", "+33 (0)6 86-57-90-14", "\u{FF0B}\u{FF17} 771",
        "\u{0660}\u{0666} 86", "tel:+1-800-FLOWERS", "1+2+3",
    ];
    for input in inputs {
        let normalized = normalize(input);
        assert_eq!(normalize(&normalized), normalized, "input {:?}", input);
    }
}

fn example_numbers(canonicalizer: &PhoneNumberCanonicalizer) -> Vec<(String, i32, String)> {
    let store = canonicalizer.metadata_store();
    let mut examples = Vec::new();
    for region in store.get_supported_regions() {
        let metadata = store.get_metadata_for_iso_code(region).unwrap();
        for desc in [metadata.fixed_line.get_or_default(), metadata.mobile.get_or_default()] {
            if desc.has_example_number() {
                examples.push((region.to_owned(), metadata.country_code(), desc.example_number().to_owned()));
            }
        }
    }
    assert!(!examples.is_empty());
    examples
}

#[test]
fn round_trip_of_example_numbers() {
    let canonicalizer = get_canonicalizer();
    for (region, country_calling_code, example) in example_numbers(&canonicalizer) {
        let metadata = canonicalizer.metadata_store().get_metadata_for_iso_code(&region).unwrap();
        let national_form = format!("{}{}", metadata.national_prefix(), example);

        let number = canonicalizer.from_national(&region, &national_form).unwrap();
        assert_eq!(number, canonical(&region, &example), "national form {}", national_form);
        assert!(canonicalizer.validate(&number, None), "{:?} should be valid", number);

        let international_form = format!("+{} {}", country_calling_code, number.national_significant_number());
        let reparsed = canonicalizer.from_iso_code(&region, &international_form).unwrap();
        assert_eq!(reparsed, number, "international form {}", international_form);
    }
}

#[test]
fn calling_code_consistency() {
    let canonicalizer = get_canonicalizer();
    for (region, country_calling_code, example) in example_numbers(&canonicalizer) {
        let international_form = format!("+{}{}", country_calling_code, example);
        let number = canonicalizer.from_raw(&international_form, None, None).unwrap();
        assert_eq!(number, canonical(&region, &example), "international form {}", international_form);
    }
}

#[test]
fn length_only_validation_is_weaker() {
    let canonicalizer = get_canonicalizer();
    let mut numbers: Vec<_> = example_numbers(&canonicalizer)
        .into_iter()
        .map(|(region, _, example)| canonical(&region, &example))
        .collect();
    numbers.extend([
        canonical(RegionCode::fr(), "012345678"),
        canonical(RegionCode::fr(), "68657901"),
        canonical(RegionCode::us(), "2530000"),
        canonical(RegionCode::kz(), "710009998"),
        canonical(RegionCode::zz(), "123"),
    ]);
    for number in &numbers {
        if canonicalizer.validate(number, None) {
            assert!(canonicalizer.validate_length(number), "{:?}", number);
        }
        for phone_number_type in [PhoneNumberType::FixedLine, PhoneNumberType::Mobile] {
            if canonicalizer.validate(number, Some(phone_number_type)) {
                assert!(canonicalizer.validate_length(number), "{:?}", number);
            }
        }
    }
}

#[test]
fn supported_regions_and_codes() {
    let canonicalizer = get_canonicalizer();
    let regions = canonicalizer.get_supported_regions();
    assert!(regions.contains(&RegionCode::kz()));
    assert!(!regions.contains(&RegionCode::zz()));

    let calling_codes = canonicalizer.get_supported_calling_codes();
    assert!(calling_codes.contains(&7));
    assert!(calling_codes.contains(&54));

    assert_eq!(
        canonicalizer.get_region_codes_for_country_calling_code(7),
        vec![RegionCode::ru(), RegionCode::kz()]
    );
    assert_eq!(canonicalizer.get_region_codes_for_country_calling_code(1)[0], RegionCode::us());
    assert!(canonicalizer.get_region_codes_for_country_calling_code(999).is_empty());

    assert_eq!(canonicalizer.get_country_code_for_region(RegionCode::ar()), Some(54));
    assert_eq!(canonicalizer.get_country_code_for_region("kz"), Some(7));
    assert_eq!(canonicalizer.get_country_code_for_region(RegionCode::zz()), None);
}

#[test]
fn supported_types_for_region() {
    let canonicalizer = get_canonicalizer();
    let types = canonicalizer.get_supported_types_for_region(RegionCode::gb()).unwrap();
    assert!(types.contains(&PhoneNumberType::Pager));
    assert!(types.contains(&PhoneNumberType::UAN));
    assert!(!types.contains(&PhoneNumberType::VoiceMail));
    assert!(!types.contains(&PhoneNumberType::FixedLineOrMobile));

    let types = canonicalizer.get_supported_types_for_region(RegionCode::kz()).unwrap();
    assert!(types.contains(&PhoneNumberType::Mobile));
    assert!(!types.contains(&PhoneNumberType::TollFree));

    assert!(canonicalizer.get_supported_types_for_region(RegionCode::zz()).is_none());
}

#[test]
fn injected_metadata() {
    let table = r#"
        metadata {
            id: "xa"
            country_code: 888
            international_prefix: "99"
            national_prefix: "0"
            general_desc { national_number_pattern: "[1-9]\\d{5}" possible_length: 6 }
            fixed_line { national_number_pattern: "[1-9]\\d{5}" example_number: "123456" }
        }
    "#;
    let store = MetadataStore::from_text_format(table).unwrap();
    let canonicalizer = PhoneNumberCanonicalizer::new_for_metadata(store);

    let expected = canonical("XA", "123456");
    assert_eq!(canonicalizer.from_iso_code("XA", "0 12 34 56").unwrap(), expected);
    assert_eq!(canonicalizer.from_raw("+888 123 456", None, None).unwrap(), expected);
    assert_eq!(canonicalizer.from_raw("99 888 123 456", Some("xa"), None).unwrap(), expected);
    assert!(canonicalizer.validate(&expected, None));
    assert_eq!(canonicalizer.from_iso_code(RegionCode::fr(), "06 86 57 90 14"), Err(ParseError::InvalidCountryCode));
}

#[test]
fn domestic_call_applies_rules_once() {
    // No trunk prefix, and the rule matches its own output.
    let table = r#"
        metadata {
            id: "XC"
            country_code: 887
            general_desc { national_number_pattern: "\\d{7}" possible_length: 7 }
            fixed_line { national_number_pattern: "\\d{7}" }
            national_number_rule { pattern: "(\\d)(\\d{6})" replacement: "$2$1" }
        }
    "#;
    let store = MetadataStore::from_text_format(table).unwrap();
    let canonicalizer = PhoneNumberCanonicalizer::new_for_metadata(store);

    let expected = canonical("XC", "2345671");
    assert_eq!(canonicalizer.from_national("XC", "1234567").unwrap(), expected);
    assert_eq!(canonicalizer.from_raw("123 4567", Some("XC"), None).unwrap(), expected);
}

#[test]
fn shared_between_threads() {
    let canonicalizer = &*crate::PHONE_NUMBER_CANONICALIZER;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| canonicalizer.from_raw("+33 6 86 57 90 14", None, None)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), canonical(RegionCode::fr(), "686579014"));
        }
    });
}
