/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;
pub const PLUS_CHARS: &'static str = "+\u{FF0B}";
pub const PLUS_SIGN: &'static str = "+";

// Exit code recommended by the ITU (E.164 Annex), used when no country is
// known to tell us which international prefix the caller dialed.
pub const GENERIC_INTERNATIONAL_PREFIX: &'static str = "00";

// Tilde marks "wait for dial tone" in exit codes and national prefixes. It
// never survives normalization, so it is dropped from metadata patterns.
pub const WAIT_FOR_TONE: char = '~';

// Positional capture group reference in a national number rule replacement.
pub const GROUP_REFERENCE: &'static str = r"\$(\d)";
