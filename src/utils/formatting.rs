//! Markup helpers for the report text (Telegram HTML parse mode).

pub fn bold(s: &str) -> String {
    format!("<b>{}</b>", s)
}

pub fn italic(s: &str) -> String {
    format!("<i>{}</i>", s)
}

/// Escape the characters the HTML parse mode treats as markup.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

/// Always plural: "1 days" is part of the chat template.
pub fn days_label(n: u32) -> String {
    format!("{} days", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_wrap_text() {
        assert_eq!(bold("Today"), "<b>Today</b>");
        assert_eq!(italic("Other"), "<i>Other</i>");
    }

    #[test]
    fn escape_leaves_plain_names_alone() {
        assert_eq!(escape_html("Анна Иванова"), "Анна Иванова");
        assert_eq!(escape_html("R&D <team>"), "R&amp;D &lt;team&gt;");
    }

    #[test]
    fn days_label_never_singularizes() {
        assert_eq!(days_label(1), "1 days");
    }
}
