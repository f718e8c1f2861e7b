/// Number of decimal digits needed to print `num`.
pub fn digits(num: u64) -> usize {
    num.to_string().len()
}

/// Width of `text` once printed, counted in chars as the `format!` padding does.
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

pub fn code_block(content: &str) -> String {
    format!("```\n{}\n```", content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(1234), 4);
    }

    #[test]
    fn width_counts_chars_not_bytes() {
        assert_eq!(text_width("Zoë"), 3);
        assert_eq!(text_width("★☆"), 2);
    }
}
