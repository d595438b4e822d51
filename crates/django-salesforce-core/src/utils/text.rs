//! String utilities with Python string-method semantics.
//!
//! Salesforce column names are derived from attribute names with the same
//! rules Python's `str.islower` and `str.title` apply, so these helpers follow
//! those rules exactly rather than any Unicode word-boundary algorithm.

/// Returns `true` for titlecase letters (category Lt) such as `ǅ`.
fn is_titlecase(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

/// Returns `true` for characters that have case (upper, lower, or title).
fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || is_titlecase(c)
}

/// Appends the Unicode titlecase mapping of `c`.
///
/// Only the characters matched here map differently under titlecase than
/// under uppercase.
fn push_titlecase(out: &mut String, c: char) {
    let mapped = match c {
        '\u{00DF}' => "Ss",
        '\u{01C4}'..='\u{01C6}' => "\u{01C5}",
        '\u{01C7}'..='\u{01C9}' => "\u{01C8}",
        '\u{01CA}'..='\u{01CC}' => "\u{01CB}",
        '\u{01F1}'..='\u{01F3}' => "\u{01F2}",
        '\u{0587}' => "\u{0535}\u{0582}",
        '\u{1FB2}' => "\u{1FBA}\u{0345}",
        '\u{1FB3}' => "\u{1FBC}",
        '\u{1FB4}' => "\u{0386}\u{0345}",
        '\u{1FB7}' => "\u{0391}\u{0342}\u{0345}",
        '\u{1FC2}' => "\u{1FCA}\u{0345}",
        '\u{1FC3}' => "\u{1FCC}",
        '\u{1FC4}' => "\u{0389}\u{0345}",
        '\u{1FC7}' => "\u{0397}\u{0342}\u{0345}",
        '\u{1FF2}' => "\u{1FFA}\u{0345}",
        '\u{1FF3}' => "\u{1FFC}",
        '\u{1FF4}' => "\u{038F}\u{0345}",
        '\u{1FF7}' => "\u{03A9}\u{0342}\u{0345}",
        '\u{FB00}' => "Ff",
        '\u{FB01}' => "Fi",
        '\u{FB02}' => "Fl",
        '\u{FB03}' => "Ffi",
        '\u{FB04}' => "Ffl",
        '\u{FB05}' | '\u{FB06}' => "St",
        '\u{FB13}' => "\u{0544}\u{0576}",
        '\u{FB14}' => "\u{0544}\u{0565}",
        '\u{FB15}' => "\u{0544}\u{056B}",
        '\u{FB16}' => "\u{054E}\u{0576}",
        '\u{FB17}' => "\u{0544}\u{056D}",
        // Greek with ypogegrammeni: lower-case forms sit 8 below their titlecase form.
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            out.push(char::from_u32(u32::from(c) + 8).unwrap_or(c));
            return;
        }
        // Georgian Mkhedruli has no titlecase form.
        '\u{10D0}'..='\u{10FA}' | '\u{10FD}'..='\u{10FF}' => {
            out.push(c);
            return;
        }
        c if is_titlecase(c) => {
            out.push(c);
            return;
        }
        c => {
            out.extend(c.to_uppercase());
            return;
        }
    };
    out.push_str(mapped);
}

/// Lower-cases the capital sigma that follows the cased character `prev`
/// starting at byte `prev_start`, using the final form `ς` when no cased
/// character follows it.
fn lower_sigma(s: &str, prev_start: usize, prev: char) -> char {
    let skip = prev.to_lowercase().count();
    s[prev_start..]
        .to_lowercase()
        .chars()
        .nth(skip)
        .unwrap_or('\u{03C3}')
}

/// Returns `true` if the string has at least one cased character and none of
/// its cased characters are upper-case or title-case.
///
/// # Examples
///
/// ```
/// use django_salesforce_core::utils::text::is_lower;
///
/// assert!(is_lower("last_name"));
/// assert!(!is_lower("LastName"));
/// assert!(!is_lower("_2"));
/// ```
pub fn is_lower(s: &str) -> bool {
    let mut has_cased = false;
    for c in s.chars() {
        if c.is_uppercase() || is_titlecase(c) {
            return false;
        }
        if c.is_lowercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Title-cases a string: a cased character following an uncased one (or the
/// start of the string) takes its titlecase form, every other cased
/// character is lower-cased.
///
/// # Examples
///
/// ```
/// use django_salesforce_core::utils::text::title_case;
///
/// assert_eq!(title_case("last_name"), "Last_Name");
/// assert_eq!(title_case("field2x"), "Field2X");
/// ```
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev: Option<(usize, char)> = None;
    for (i, c) in s.char_indices() {
        if !is_cased(c) {
            result.push(c);
            prev = None;
            continue;
        }
        match prev {
            Some((start, p)) if c == '\u{03A3}' => result.push(lower_sigma(s, start, p)),
            Some(_) => result.extend(c.to_lowercase()),
            None => push_titlecase(&mut result, c),
        }
        prev = Some((i, c));
    }
    result
}

/// Capitalizes the first character of a string.
///
/// # Examples
///
/// ```
/// use django_salesforce_core::utils::text::capfirst;
///
/// assert_eq!(capfirst("email bounced reason"), "Email bounced reason");
/// ```
pub fn capfirst(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_lower() {
        assert!(is_lower("name"));
        assert!(is_lower("email_bounced_reason"));
        assert!(is_lower("field_2"));
        assert!(!is_lower("LastName"));
        assert!(!is_lower("last_Name"));
        assert!(!is_lower("ID"));
    }

    #[test]
    fn test_is_lower_without_cased_chars() {
        assert!(!is_lower(""));
        assert!(!is_lower("_"));
        assert!(!is_lower("123"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("email_bounced_reason"), "Email_Bounced_Reason");
        assert_eq!(title_case("name"), "Name");
        assert_eq!(title_case("x"), "X");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_digits_start_words() {
        assert_eq!(title_case("field2x"), "Field2X");
        assert_eq!(title_case("a1b2"), "A1B2");
    }

    #[test]
    fn test_title_case_lowers_inner_capitals() {
        assert_eq!(title_case("hELLO wORLD"), "Hello World");
    }

    #[test]
    fn test_title_case_non_ascii() {
        assert_eq!(title_case("straße_ölfeld"), "Straße_Ölfeld");
    }

    #[test]
    fn test_title_case_uses_titlecase_mapping() {
        assert_eq!(title_case("ßeta"), "Sseta");
        assert_eq!(title_case("ǆx"), "ǅx");
        assert_eq!(title_case("ǅa_b"), "ǅa_B");
        assert_eq!(title_case("ﬁeld"), "Field");
        assert_eq!(title_case("ᾳx"), "ᾼx");
        assert_eq!(title_case("ა_b"), "ა_B");
    }

    #[test]
    fn test_title_case_final_sigma() {
        assert_eq!(title_case("ΑΣ"), "Ας");
        assert_eq!(title_case("ΑΣΑ"), "Ασα");
        assert_eq!(title_case("ΑΣ_x"), "Ας_X");
    }

    #[test]
    fn test_is_lower_titlecase_letters() {
        assert!(!is_lower("ǅa"));
        assert!(!is_lower("ǅa_b"));
        assert!(is_lower("ǆx"));
        assert!(is_lower("ßeta"));
    }

    #[test]
    fn test_capfirst() {
        assert_eq!(capfirst("hello"), "Hello");
        assert_eq!(capfirst(""), "");
        assert_eq!(capfirst("Already"), "Already");
    }
}
