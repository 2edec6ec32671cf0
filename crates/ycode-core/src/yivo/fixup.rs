//! Positional fixups applied after cluster resolution.

/// Letters with a distinct final form. The final form is the uppercase letter.
pub const FINAL_FORM_LETTERS: [char; 5] = ['x', 'm', 'n', 'f', 'q'];

/// Shtumer alef: the silent carrier for a leading vowel.
pub const GLIDE: char = 'A';

/// Replace a trailing letter that has a final form with that form.
///
/// Final forms are not themselves in [`FINAL_FORM_LETTERS`], so applying
/// this twice is the same as applying it once.
pub fn apply_final_form(ycode: &mut String) {
    if let Some(last) = ycode.chars().last() {
        if FINAL_FORM_LETTERS.contains(&last) {
            ycode.pop();
            ycode.push(last.to_ascii_uppercase());
        }
    }
}

/// Whether a word needs a leading shtumer alef.
///
/// YIVO `i` and `u` are vowels, but their ycode `y` and `v` are also
/// consonants; `W` (vov yud) and `Y` (tsvey yudn) always need the carrier.
pub fn needs_glide(ycode_first: char, yivo_first: char) -> bool {
    matches!(
        (ycode_first, yivo_first),
        ('y', 'i') | ('v', 'u') | ('W', _) | ('Y', _)
    )
}

/// Prepend [`GLIDE`] when [`needs_glide`] holds for the first characters.
pub fn insert_glide(ycode: &mut String, yivo_first: char) {
    if let Some(first) = ycode.chars().next() {
        if needs_glide(first, yivo_first) {
            ycode.insert(0, GLIDE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn final_form(s: &str) -> String {
        let mut s = s.to_string();
        apply_final_form(&mut s);
        s
    }

    #[test]
    fn test_final_forms() {
        assert_eq!(final_form("kAoz"), "kAoz");
        assert_eq!(final_form("nAadn"), "nAadN");
        assert_eq!(final_form("HxM"), "HxM");
        assert_eq!(final_form("x"), "X");
        assert_eq!(final_form("Aaf"), "AaF");
        assert_eq!(final_form("krAaq"), "krAaQ");
        assert_eq!(final_form("tAom"), "tAoM");
        assert_eq!(final_form(""), "");
    }

    #[test]
    fn test_final_form_idempotent() {
        for word in ["nAadn", "x", "AyngAanqn", "wAos", "", "$Wn"] {
            let once = final_form(word);
            assert_eq!(final_form(&once), once, "{word:?}");
        }
    }

    #[test]
    fn test_needs_glide() {
        assert!(needs_glide('y', 'i'));
        assert!(needs_glide('v', 'u'));
        assert!(needs_glide('W', 'o'));
        assert!(needs_glide('Y', 'e'));
        assert!(needs_glide('Y', 'a'));
        // consonantal y and v
        assert!(!needs_glide('y', 'y'));
        assert!(!needs_glide('v', 'v'));
        assert!(!needs_glide('A', 'a'));
        assert!(!needs_glide('$', 's'));
    }

    #[test]
    fn test_insert_glide() {
        let mut s = "yngAanqN".to_string();
        insert_glide(&mut s, 'i');
        assert_eq!(s, "AyngAanqN");

        let mut s = "yerv$e".to_string();
        insert_glide(&mut s, 'y');
        assert_eq!(s, "yerv$e");

        let mut s = String::new();
        insert_glide(&mut s, 'i');
        assert_eq!(s, "");
    }
}
