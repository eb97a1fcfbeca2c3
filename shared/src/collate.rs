//! Nickname ordering close to what a browser's `ru` collator produces.
//!
//! Characters are compared by script group first (whitespace, punctuation, digits,
//! Cyrillic, Latin, everything else), then by base letter; diacritics only break ties.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Group {
    Space,
    Punctuation,
    Digit,
    Cyrillic,
    Latin,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Weight {
    group: Group,
    primary: u32,
    secondary: u8,
}

fn fold_latin(c: char) -> Option<(char, u8)> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => 'e',
        'ğ' => 'g',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'ı' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' | 'ß' => 's',
        'ť' | 'ţ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => return None,
    };
    Some((folded, 1))
}

fn weight(c: char) -> Weight {
    let plain = |group, primary: char| Weight {
        group,
        primary: primary as u32,
        secondary: 0,
    };

    if c.is_whitespace() {
        return plain(Group::Space, c);
    }
    if let Some(digit) = c.to_digit(10) {
        return Weight {
            group: Group::Digit,
            primary: digit,
            secondary: 0,
        };
    }
    if c.is_ascii_lowercase() {
        return plain(Group::Latin, c);
    }
    if let Some((base, secondary)) = fold_latin(c) {
        return Weight {
            group: Group::Latin,
            primary: base as u32,
            secondary,
        };
    }
    if c == 'ё' {
        return Weight {
            group: Group::Cyrillic,
            primary: 'е' as u32,
            secondary: 1,
        };
    }
    if ('\u{0400}'..='\u{04FF}').contains(&c) {
        return plain(Group::Cyrillic, c);
    }
    if c.is_alphanumeric() {
        return plain(Group::Other, c);
    }
    plain(Group::Punctuation, c)
}

/// Case-insensitive, locale-flavoured comparison of two display strings.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let wa: Vec<Weight> = a.chars().map(weight).collect();
    let wb: Vec<Weight> = b.chars().map(weight).collect();

    let primary = |w: &Weight| (w.group, w.primary);
    wa.iter()
        .map(primary)
        .cmp(wb.iter().map(primary))
        .then_with(|| {
            wa.iter()
                .map(|w| w.secondary)
                .cmp(wb.iter().map(|w| w.secondary))
        })
}
