//! Parsing of the `NNN-name` file naming convention.
//!
//! Artwork files carry their id as a numeric prefix and a fallback title
//! after it. Dashes in the name are turned into spaces for display:
//!
//! - `001-Still-Life.jpg` → id 1, "Still Life"
//! - `004.png` → id 4, no title
//! - `sketch.png` → no id (the file is not part of the catalog)

/// Result of parsing a file stem like `003-Blue-Harbour`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Numeric prefix, if the stem starts with one.
    pub number: Option<u32>,
    /// Name with dashes replaced by spaces. Empty for number-only stems.
    pub display_title: String,
}

pub fn parse_entry_name(stem: &str) -> ParsedName {
    let (prefix, rest) = match stem.split_once('-') {
        Some((prefix, rest)) => (prefix, Some(rest)),
        None => (stem, None),
    };

    // `u32::from_str` also takes a leading `+`, which is not a number prefix.
    let digits_only = !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit());
    match prefix.parse::<u32>().ok().filter(|_| digits_only) {
        Some(number) => ParsedName {
            number: Some(number),
            display_title: rest.unwrap_or_default().replace('-', " "),
        },
        None => ParsedName {
            number: None,
            display_title: stem.replace('-', " "),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_multi_word() {
        let p = parse_entry_name("001-Still-Life-With-Lemons");
        assert_eq!(p.number, Some(1));
        assert_eq!(p.display_title, "Still Life With Lemons");
    }

    #[test]
    fn numbered_single_word() {
        let p = parse_entry_name("005-Nocturne");
        assert_eq!(p.number, Some(5));
        assert_eq!(p.display_title, "Nocturne");
    }

    #[test]
    fn number_only() {
        let p = parse_entry_name("004");
        assert_eq!(p.number, Some(4));
        assert_eq!(p.display_title, "");
    }

    #[test]
    fn number_with_trailing_dash() {
        let p = parse_entry_name("002-");
        assert_eq!(p.number, Some(2));
        assert_eq!(p.display_title, "");
    }

    #[test]
    fn unnumbered_keeps_whole_stem() {
        let p = parse_entry_name("wip-sketch");
        assert_eq!(p.number, None);
        assert_eq!(p.display_title, "wip sketch");
    }

    #[test]
    fn prefix_must_be_all_digits() {
        let p = parse_entry_name("01a-Study");
        assert_eq!(p.number, None);
        assert_eq!(p.display_title, "01a Study");
    }

    #[test]
    fn sign_is_not_a_number_prefix() {
        let p = parse_entry_name("+3-Study");
        assert_eq!(p.number, None);
        assert_eq!(p.display_title, "+3 Study");
        assert_eq!(parse_entry_name("+4").number, None);
    }

    #[test]
    fn out_of_range_numbers_still_parse() {
        assert_eq!(parse_entry_name("000-Zero").number, Some(0));
        assert_eq!(parse_entry_name("120-Extra").number, Some(120));
    }
}
