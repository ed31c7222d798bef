//! Name ordering for the final tie-break of both tables.
//!
//! Names are compared the way a French reader expects: accents and case are
//! ignored first ("Étoile" sits between "Espoir" and "Ezanville"), and only
//! names that are equal after folding fall back to code-point order so the
//! ordering stays total.

use std::cmp::Ordering;

/// Compares two team or player names for ascending display order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    folded(a).cmp(folded(b)).then_with(|| a.cmp(b))
}

fn folded(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase).flat_map(fold_char)
}

/// Strips the diacritics of the Latin-1 and Latin Extended-A letters seen in
/// club and player names. Ligatures expand to two letters.
fn fold_char(c: char) -> FoldedChar {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' | 'ţ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        'æ' => return FoldedChar::Pair('a', 'e'),
        'œ' => return FoldedChar::Pair('o', 'e'),
        'ß' => return FoldedChar::Pair('s', 's'),
        other => other,
    };
    FoldedChar::Single(base)
}

enum FoldedChar {
    Single(char),
    Pair(char, char),
    Done,
}

impl Iterator for FoldedChar {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match std::mem::replace(self, FoldedChar::Done) {
            FoldedChar::Single(c) => Some(c),
            FoldedChar::Pair(first, second) => {
                *self = FoldedChar::Single(second);
                Some(first)
            }
            FoldedChar::Done => None,
        }
    }
}
