//! Row extraction from favorites listing HTML
//!
//! Both listing flavors mark their rows with `tr.athing`; what differs is
//! which sub-elements carry the interesting fields. A row missing an
//! expected sub-element is skipped rather than failing the page, since
//! upstream markup varies slightly between story and comment listings.

use crate::scrape::{ContentMode, Favorite, SITE_URL};
use scraper::{ElementRef, Html, Selector};

/// Extracts every well-formed listing row from one page of HTML
///
/// Returns records in document order. An empty result means the page had
/// no usable rows; deciding what that *means* is the classifier's job.
pub fn extract_rows(html: &str, mode: ContentMode) -> Vec<Favorite> {
    let document = Html::parse_document(html);

    let Ok(row_selector) = Selector::parse("tr.athing") else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    for element in document.select(&row_selector) {
        match row_to_favorite(&element, mode) {
            Some(favorite) => rows.push(favorite),
            None => {
                tracing::debug!(
                    "Skipping malformed {} row (id attr: {:?})",
                    mode,
                    element.value().attr("id")
                );
            }
        }
    }

    rows
}

/// Maps one `tr.athing` element into a record, or None if any expected
/// piece is missing or malformed
fn row_to_favorite(row: &ElementRef, mode: ContentMode) -> Option<Favorite> {
    let id: u64 = row.value().attr("id")?.parse().ok()?;

    match mode {
        ContentMode::Story => {
            let link_selector = Selector::parse("a.titlelink").ok()?;
            let anchor = row.select(&link_selector).next()?;
            let url = anchor.value().attr("href")?.to_string();
            let title = anchor.text().collect::<String>().trim().to_string();

            Some(Favorite::Story {
                id,
                url,
                hn_url: format!("{}/item?id={}", SITE_URL, id),
                title,
            })
        }
        ContentMode::Comment => {
            let age_selector = Selector::parse("span.age a").ok()?;
            let permalink = row.select(&age_selector).next()?.value().attr("href")?;

            let user_selector = Selector::parse(".hnuser").ok()?;
            let user = row
                .select(&user_selector)
                .next()?
                .text()
                .collect::<String>()
                .trim()
                .to_string();

            Some(Favorite::Comment {
                id,
                // The permalink is site-relative, e.g. "item?id=9224"
                url: format!("{}/{}", SITE_URL, permalink),
                user,
            })
        }
    }
}
