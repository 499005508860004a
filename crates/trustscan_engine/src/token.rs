use scraper::{Html, Selector};
use trustscan_core::SecurityToken;

/// Form field the hosting page renders the anti-forgery token into.
pub const CSRF_FIELD_NAME: &str = "csrfmiddlewaretoken";

/// Find the first `[name=csrfmiddlewaretoken]` element carrying a non-blank `value`.
pub fn extract_security_token(html: &str) -> Option<SecurityToken> {
    let selector = Selector::parse(&format!("[name={CSRF_FIELD_NAME}]")).ok()?;
    let document = Html::parse_document(html);
    document
        .select(&selector)
        .filter_map(|element| element.value().attr("value"))
        .find_map(SecurityToken::new)
}
