//! Dynamic sitemap.xml for SEO.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};

use crate::error::AppResult;
use crate::models::{CityContent, Event, Honey, LocalSource, SitemapEntry};
use crate::state::AppState;

/// Escape the five XML special characters.
fn xml_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Append one `<url>` entry.
fn push_url(
    xml: &mut String,
    base_url: &str,
    path: &str,
    last_mod: Option<DateTime<Utc>>,
    priority: &str,
    change_freq: &str,
) {
    xml.push_str("  <url>\n");
    xml.push_str(&format!(
        "    <loc>{}</loc>\n",
        xml_escape(&format!("{base_url}{path}"))
    ));
    if let Some(last_mod) = last_mod {
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            last_mod.format("%Y-%m-%d")
        ));
    }
    xml.push_str(&format!("    <changefreq>{change_freq}</changefreq>\n"));
    xml.push_str(&format!("    <priority>{priority}</priority>\n"));
    xml.push_str("  </url>\n");
}

/// Render the whole sitemap document.
fn render(
    base_url: &str,
    now: DateTime<Utc>,
    honeys: &[SitemapEntry],
    sources: &[SitemapEntry],
    events: &[SitemapEntry],
    cities: &[SitemapEntry],
) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    push_url(&mut xml, base_url, "/", Some(now), "1.0", "daily");
    push_url(&mut xml, base_url, "/browse", Some(now), "0.9", "daily");
    push_url(&mut xml, base_url, "/local", Some(now), "0.8", "weekly");
    push_url(&mut xml, base_url, "/events", Some(now), "0.8", "daily");

    for (slug, updated_at) in honeys {
        push_url(
            &mut xml,
            base_url,
            &format!("/honey/{slug}"),
            Some(*updated_at),
            "0.8",
            "weekly",
        );
    }
    for (slug, updated_at) in sources {
        push_url(
            &mut xml,
            base_url,
            &format!("/local/{slug}"),
            Some(*updated_at),
            "0.7",
            "weekly",
        );
    }
    for (slug, updated_at) in events {
        push_url(
            &mut xml,
            base_url,
            &format!("/events/{slug}"),
            Some(*updated_at),
            "0.6",
            "weekly",
        );
    }
    for (slug, updated_at) in cities {
        push_url(
            &mut xml,
            base_url,
            &format!("/honey-near/{slug}"),
            Some(*updated_at),
            "0.7",
            "monthly",
        );
    }

    xml.push_str("</urlset>");
    xml
}

/// Serve the sitemap.
async fn sitemap(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let honeys = Honey::sitemap_entries(state.db()).await?;
    let sources = LocalSource::sitemap_entries(state.db()).await?;
    let events = Event::sitemap_entries(state.db()).await?;
    let cities = CityContent::sitemap_entries(state.db()).await?;

    let xml = render(
        state.site_url(),
        Utc::now(),
        &honeys,
        &sources,
        &events,
        &cities,
    );

    Ok((
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    ))
}

/// Create the sitemap router.
pub fn router() -> Router<AppState> {
    Router::new().route("/sitemap.xml", get(sitemap))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(slug: &str) -> SitemapEntry {
        let ts = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        (slug.to_string(), ts)
    }

    #[test]
    fn xml_escape_covers_the_special_characters() {
        assert_eq!(
            xml_escape("a&b<c>d\"e'f"),
            "a&amp;b&lt;c&gt;d&quot;e&apos;f"
        );
        assert_eq!(xml_escape("plain"), "plain");
    }

    #[test]
    fn document_contains_static_and_entity_urls() {
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 0, 0, 0).unwrap();
        let xml = render(
            "https://example.com",
            now,
            &[entry("clover-honey-usa")],
            &[entry("hill-country-apiary")],
            &[entry("austin-honey-festival")],
            &[entry("austin-tx")],
        );

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/browse</loc>"));
        assert!(xml.contains("<loc>https://example.com/honey/clover-honey-usa</loc>"));
        assert!(xml.contains("<loc>https://example.com/local/hill-country-apiary</loc>"));
        assert!(xml.contains("<loc>https://example.com/events/austin-honey-festival</loc>"));
        assert!(xml.contains("<loc>https://example.com/honey-near/austin-tx</loc>"));
        assert!(xml.contains("<lastmod>2026-08-01</lastmod>"));
        assert!(xml.ends_with("</urlset>"));
    }

    #[test]
    fn base_url_with_ampersand_is_escaped() {
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 0, 0, 0).unwrap();
        let xml = render("https://example.com?a=1&b=2", now, &[], &[], &[], &[]);
        assert!(xml.contains("a=1&amp;b=2"));
        assert!(!xml.contains("a=1&b=2</loc>"));
    }
}
