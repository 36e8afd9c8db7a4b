use std::collections::BTreeSet;

use serde::Deserialize;

/// Normalized address strings: trimmed, non-empty, unique.
/// BTreeSet keeps iteration lexicographic, which `serialize` relies on.
pub type AddressSet = BTreeSet<String>;

/// Delimiter the operator picked for the uploaded list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Newline,
    Comma,
    Space,
    Tab,
}

impl Delimiter {
    fn as_char(self) -> char {
        match self {
            Delimiter::Newline => '\n',
            Delimiter::Comma => ',',
            Delimiter::Space => ' ',
            Delimiter::Tab => '\t',
        }
    }
}

/// Split `content` on the chosen delimiter, trim each token and drop empties.
/// Newline splitting goes through `str::lines` so `\r\n` endings work too.
pub fn parse(content: &str, delimiter: Delimiter) -> AddressSet {
    match delimiter {
        Delimiter::Newline => collect(content.lines()),
        other => collect(content.split(other.as_char())),
    }
}

/// The revoke text field is free-form: entries may be separated by commas
/// or line breaks in any mix.
pub fn parse_revoke_list(input: &str) -> AddressSet {
    collect(input.split(['\n', '\r', ',']))
}

fn collect<'a>(tokens: impl Iterator<Item = &'a str>) -> AddressSet {
    tokens
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Canonical output form: lexicographically sorted, newline-joined.
/// The output is newline-delimited regardless of the input delimiter;
/// re-parsing with `Delimiter::Newline` yields the same set.
pub fn serialize(set: &AddressSet) -> String {
    set.iter().map(String::as_str).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> AddressSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_newline() {
        let parsed = parse("1.1.1.1\n2.2.2.2\n3.3.3.3", Delimiter::Newline);
        assert_eq!(parsed, set(&["1.1.1.1", "2.2.2.2", "3.3.3.3"]));
    }

    #[test]
    fn test_parse_crlf_line_endings() {
        let parsed = parse("1.1.1.1\r\n2.2.2.2\r\n", Delimiter::Newline);
        assert_eq!(parsed, set(&["1.1.1.1", "2.2.2.2"]));
    }

    #[test]
    fn test_parse_comma_with_padding() {
        let parsed = parse(" 10.0.0.1 ,10.0.0.1, ,", Delimiter::Comma);
        assert_eq!(parsed, set(&["10.0.0.1"]));
    }

    #[test]
    fn test_parse_space_and_tab() {
        assert_eq!(
            parse("1.1.1.1  2.2.2.2", Delimiter::Space),
            set(&["1.1.1.1", "2.2.2.2"])
        );
        assert_eq!(
            parse("1.1.1.1\t2.2.2.2", Delimiter::Tab),
            set(&["1.1.1.1", "2.2.2.2"])
        );
    }

    #[test]
    fn test_parse_duplicates_collapse() {
        let parsed = parse("1.1.1.1\n1.1.1.1\n1.1.1.1", Delimiter::Newline);
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse("", Delimiter::Newline).is_empty());
        assert!(parse("\n \n\t\n", Delimiter::Newline).is_empty());
    }

    #[test]
    fn test_revoke_list_mixed_separators() {
        let parsed = parse_revoke_list("1.1.1.1, 2.2.2.2\n3.3.3.3\r\n,4.4.4.4");
        assert_eq!(parsed, set(&["1.1.1.1", "2.2.2.2", "3.3.3.3", "4.4.4.4"]));
    }

    #[test]
    fn test_serialize_sorted_newline_joined() {
        let addrs = set(&["3.3.3.3", "1.1.1.1", "2.2.2.2"]);
        assert_eq!(serialize(&addrs), "1.1.1.1\n2.2.2.2\n3.3.3.3");
    }

    #[test]
    fn test_serialize_empty_set() {
        assert_eq!(serialize(&AddressSet::new()), "");
    }

    #[test]
    fn test_round_trip() {
        let addrs = set(&["10.0.0.1", "192.168.1.5", "2001:db8::1"]);
        assert_eq!(parse(&serialize(&addrs), Delimiter::Newline), addrs);
    }
}
