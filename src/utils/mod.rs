//! Utility functions and helpers.

pub mod http;
pub mod url;

use scraper::{ElementRef, Selector};

use crate::error::{AppError, Result};

/// Parse a CSS selector, keeping the offending text in the error.
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

/// Whitespace-normalized text content of an element.
pub fn element_text(element: &ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text of the first match below `scope`, if any and non-blank.
pub fn select_text(scope: &ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector("div.Hero-titleContainer").is_ok());
        assert!(parse_selector(r#"span[itemprop="postalCode"]"#).is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(parse_selector("[[invalid").is_err());
    }

    #[test]
    fn test_select_text_normalizes_whitespace() {
        let doc =
            Html::parse_fragment("<div><span>\n  Grand   <b>Marais</b>\n</span><p> </p></div>");
        let root = doc.root_element();
        let span = parse_selector("span").unwrap();
        let p = parse_selector("p").unwrap();
        let em = parse_selector("em").unwrap();

        assert_eq!(select_text(&root, &span), Some("Grand Marais".to_string()));
        assert_eq!(select_text(&root, &p), None);
        assert_eq!(select_text(&root, &em), None);
    }
}
