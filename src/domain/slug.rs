//! Slug suggestion from a display name.
//!
//! Slugs are advisory: the admin UI pre-fills the slug field from the name but
//! the stored slug is always the one submitted with the form.

/// Bulgarian Cyrillic to Latin transliteration table.
const CYRILLIC_TO_LATIN: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "y"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "h"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "sht"),
    ('ъ', "a"),
    ('ь', "y"),
    ('ю', "yu"),
    ('я', "ya"),
];

fn transliterate_char(c: char) -> Option<&'static str> {
    let lower = c.to_lowercase().next()?;
    CYRILLIC_TO_LATIN
        .iter()
        .find(|(cyrillic, _)| *cyrillic == lower)
        .map(|(_, latin)| *latin)
}

/// Builds a URL slug: transliterate, lower-case, collapse every run of
/// characters outside `[a-z0-9]` into one hyphen and strip edge hyphens.
pub fn generate_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    let mut push = |c: char, slug: &mut String| {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    };

    for c in name.chars() {
        match transliterate_char(c) {
            Some(latin) => latin.chars().for_each(|l| push(l, &mut slug)),
            None => c.to_lowercase().for_each(|l| push(l, &mut slug)),
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transliterates_bulgarian_names() {
        assert_eq!(generate_slug("Настолна лампа"), "nastolna-lampa");
        assert_eq!(generate_slug("Щастие и Жълто"), "shtastie-i-zhalto");
    }

    #[test]
    fn collapses_separators_and_strips_edges() {
        assert_eq!(generate_slug("  --Hello,   World!--  "), "hello-world");
        assert_eq!(generate_slug("LED 12V / 5W"), "led-12v-5w");
    }

    #[test]
    fn empty_when_nothing_survives() {
        assert_eq!(generate_slug("!!!"), "");
        assert_eq!(generate_slug(""), "");
    }
}
