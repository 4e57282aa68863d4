//! Markup extraction for the source page.
//!
//! The source lists stories as `div.mp-text` containers, each holding a
//! linked heading and a paragraph with a span of teaser text.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::models::ScrapedArticle;

/// Extract one record per `div.mp-text` container, in document order.
///
/// A container missing its heading link or teaser span yields empty strings
/// for those fields rather than failing the pass, so a partially well-formed
/// page still produces whatever records it does contain. No deduplication
/// against previously stored articles happens here.
pub fn extract_articles(html: &str) -> Vec<ScrapedArticle> {
    let document = Html::parse_document(html);
    let container_selector = Selector::parse("div.mp-text").unwrap();
    let heading_link_selector = Selector::parse("h3 > a").unwrap();
    let teaser_selector = Selector::parse("p > span").unwrap();

    let mut records = Vec::new();
    for container in document.select(&container_selector) {
        let heading_link = container.select(&heading_link_selector).next();
        let teaser = container.select(&teaser_selector).next();

        let record = ScrapedArticle {
            title: heading_link.map(element_text).unwrap_or_default(),
            link: heading_link
                .and_then(|a| a.value().attr("href"))
                .unwrap_or_default()
                .to_string(),
            description: teaser.map(element_text).unwrap_or_default(),
            is_saved: false,
        };
        debug!(title = %record.title, link = %record.link, "Extracted record");
        records.push(record);
    }

    records
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<Vec<_>>().join("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_record_per_container_in_document_order() {
        let html = r#"
            <div class="mp-text">
                <h3><a href="/one">First</a></h3>
                <p><span>first teaser</span></p>
            </div>
            <div class="mp-text">
                <h3><a href="/two">Second</a></h3>
                <p><span>second teaser</span></p>
            </div>
            <div class="mp-text">
                <h3><a href="/three">Third</a></h3>
                <p><span>third teaser</span></p>
            </div>
        "#;

        let records = extract_articles(html);
        assert_eq!(records.len(), 3);
        assert_eq!(
            records.iter().map(|r| r.title.as_str()).collect::<Vec<_>>(),
            vec!["First", "Second", "Third"]
        );
        assert_eq!(records[1].link, "/two");
        assert_eq!(records[2].description, "third teaser");
        assert!(records.iter().all(|r| !r.is_saved));
    }

    #[test]
    fn missing_heading_link_yields_empty_title_and_link() {
        let html = r#"
            <div class="mp-text">
                <p><span>teaser only</span></p>
            </div>
        "#;

        let records = extract_articles(html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "");
        assert_eq!(records[0].link, "");
        assert_eq!(records[0].description, "teaser only");
    }

    #[test]
    fn missing_teaser_yields_empty_description() {
        let html = r#"
            <div class="mp-text">
                <h3><a href="/a1">Kitchen Remodel</a></h3>
                <p><span>desc1</span></p>
            </div>
            <div class="mp-text">
                <h3><a href="/a2">Bath Redo</a></h3>
            </div>
        "#;

        let records = extract_articles(html);
        assert_eq!(
            records,
            vec![
                ScrapedArticle {
                    title: "Kitchen Remodel".to_string(),
                    link: "/a1".to_string(),
                    description: "desc1".to_string(),
                    is_saved: false,
                },
                ScrapedArticle {
                    title: "Bath Redo".to_string(),
                    link: "/a2".to_string(),
                    description: "".to_string(),
                    is_saved: false,
                },
            ]
        );
    }

    #[test]
    fn link_without_href_yields_empty_link() {
        let html = r#"
            <div class="mp-text">
                <h3><a>No Href Here</a></h3>
                <p><span>still extracted</span></p>
            </div>
        "#;

        let records = extract_articles(html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "No Href Here");
        assert_eq!(records[0].link, "");
    }

    #[test]
    fn page_without_containers_yields_nothing() {
        let html = "<html><body><h1>Maintenance</h1></body></html>";
        assert!(extract_articles(html).is_empty());
    }
}
