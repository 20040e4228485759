//! Throttle detection for fetched listing pages
//!
//! The upstream signals rate limiting through page *content*, not HTTP
//! status: a page that structurally resembles an error notice, or an
//! entirely empty body. Telling that apart from "this user has no more
//! favorites" is what makes the pagination resilient.

use crate::scrape::{Favorite, PageOutcome};
use scraper::{Html, Selector};

/// The exact banner text the upstream serves when rate-limiting a client
pub const THROTTLE_BANNER: &str = "Sorry, we're not able to serve your requests this quickly.";

/// Cell that carries the banner on the error page. The rows of the page
/// table end up inside an implied tbody once parsed, so the cell is
/// matched by descent rather than as a direct child of the table.
const BANNER_CELL_SELECTOR: &str = "body > center > table tr:nth-child(3) > td";

/// Classifies one fetched page
///
/// Decision order:
/// 1. Zero-length body: throttled.
/// 2. Any extracted rows: a normal listing page.
/// 3. No rows but the known banner in its fixed cell: throttled.
/// 4. Otherwise the listing genuinely ended.
pub fn classify_page(html: &str, rows: Vec<Favorite>) -> PageOutcome {
    if html.is_empty() {
        return PageOutcome::Throttled;
    }

    if !rows.is_empty() {
        return PageOutcome::Rows(rows);
    }

    if has_throttle_banner(html) {
        PageOutcome::Throttled
    } else {
        PageOutcome::Empty
    }
}

fn has_throttle_banner(html: &str) -> bool {
    let document = Html::parse_document(html);

    let Ok(selector) = Selector::parse(BANNER_CELL_SELECTOR) else {
        return false;
    };

    document
        .select(&selector)
        .next()
        .map(|cell| cell.text().collect::<String>().trim() == THROTTLE_BANNER)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn throttle_page() -> String {
        format!(
            "<html><body><center><table>\
             <tr><td>logo</td></tr>\
             <tr><td>nav</td></tr>\
             <tr><td>{}</td></tr>\
             </table></center></body></html>",
            THROTTLE_BANNER
        )
    }

    fn end_of_listing_page() -> &'static str {
        "<html><body><center><table>\
         <tr><td>logo</td></tr>\
         <tr><td>nav</td></tr>\
         <tr><td></td></tr>\
         </table></center></body></html>"
    }

    fn some_rows() -> Vec<Favorite> {
        vec![Favorite::Comment {
            id: 1,
            url: "https://news.ycombinator.com/item?id=1".to_string(),
            user: "pg".to_string(),
        }]
    }

    #[test]
    fn test_zero_length_body_is_throttled() {
        assert_eq!(classify_page("", Vec::new()), PageOutcome::Throttled);
    }

    #[test]
    fn test_rows_win_over_everything() {
        // Even with a banner-shaped page, extracted rows mean a listing page
        let rows = some_rows();
        assert_eq!(
            classify_page(&throttle_page(), rows.clone()),
            PageOutcome::Rows(rows)
        );
    }

    #[test]
    fn test_banner_page_is_throttled() {
        assert_eq!(
            classify_page(&throttle_page(), Vec::new()),
            PageOutcome::Throttled
        );
    }

    #[test]
    fn test_rowless_page_without_banner_is_empty() {
        assert_eq!(
            classify_page(end_of_listing_page(), Vec::new()),
            PageOutcome::Empty
        );
    }

    #[test]
    fn test_banner_text_must_match_exactly() {
        let page = "<html><body><center><table>\
                    <tr><td>logo</td></tr>\
                    <tr><td>nav</td></tr>\
                    <tr><td>Sorry, something else went wrong.</td></tr>\
                    </table></center></body></html>";
        assert_eq!(classify_page(page, Vec::new()), PageOutcome::Empty);
    }

    #[test]
    fn test_banner_outside_fixed_cell_is_not_throttling() {
        // Banner text in a paragraph, not the third table row
        let page = format!("<html><body><p>{}</p></body></html>", THROTTLE_BANNER);
        assert_eq!(classify_page(&page, Vec::new()), PageOutcome::Empty);
    }
}
