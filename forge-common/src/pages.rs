//! Glyph-page file naming
//!
//! A single-page font exports `base.png`; multi-page fonts number every page from
//! its 1-based index, including the first (`base2.png` is page index 1, and page
//! index 0 of a multi-page font would be `base1.png`). The asymmetry keeps
//! single-page fonts, by far the common case, free of a numeric suffix. Existing
//! loaders depend on this exact rule, so it is compatibility surface, not
//! something to tidy up.

/// File name for page `index` out of `count` pages.
pub fn page_file_name(base: &str, index: usize, count: usize) -> String {
    if index == 0 && count == 1 {
        format!("{base}.png")
    } else {
        format!("{}{}.png", base, index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_has_no_suffix() {
        assert_eq!(page_file_name("font", 0, 1), "font.png");
    }

    #[test]
    fn two_pages_skip_suffix_one() {
        assert_eq!(page_file_name("font", 0, 2), "font1.png");
        assert_eq!(page_file_name("font", 1, 2), "font2.png");
    }

    #[test]
    fn three_pages_number_from_one() {
        let names: Vec<String> = (0..3).map(|i| page_file_name("font", i, 3)).collect();
        assert_eq!(names, ["font1.png", "font2.png", "font3.png"]);
    }
}
