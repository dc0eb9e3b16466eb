//! Sitemap generation

use crate::site::template::escape_html;
use crate::site::BuildConfig;
use chrono::NaiveDate;

/// Render `sitemap.xml` listing the root, every locale page and the privacy page
pub fn render_sitemap<'a>(
    config: &BuildConfig,
    codes: impl IntoIterator<Item = &'a str>,
    lastmod: NaiveDate,
) -> String {
    let lastmod = lastmod.format("%Y-%m-%d").to_string();
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    push_url(&mut xml, &config.root_url(), &lastmod, "1.0");
    for code in codes {
        push_url(&mut xml, &config.locale_url(code), &lastmod, "0.8");
    }
    push_url(&mut xml, &config.privacy_url(), &lastmod, "0.5");

    xml.push_str("</urlset>\n");
    xml
}

fn push_url(xml: &mut String, loc: &str, lastmod: &str, priority: &str) {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", escape_html(loc)));
    xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
    xml.push_str(&format!("    <priority>{}</priority>\n", priority));
    xml.push_str("  </url>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sitemap_lists_every_page() {
        let config = BuildConfig::default();
        let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let xml = render_sitemap(&config, ["en", "ja"], day);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert_eq!(xml.matches("<url>").count(), 4);
        assert_eq!(xml.matches("<lastmod>2024-01-02</lastmod>").count(), 4);

        let root = xml.find("<loc>https://todays-trash.web.app/</loc>").unwrap();
        let ja = xml.find("<loc>https://todays-trash.web.app/ja/</loc>").unwrap();
        let privacy = xml
            .find("<loc>https://todays-trash.web.app/privacy.html</loc>")
            .unwrap();
        assert!(root < ja && ja < privacy);
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_sitemap_escapes_urls() {
        let config = BuildConfig {
            base_url: "https://example.org/?a=1&b=2".to_string(),
            ..BuildConfig::default()
        };
        let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let xml = render_sitemap(&config, ["en"], day);

        assert!(xml.contains("<loc>https://example.org/?a=1&amp;b=2/en/</loc>"));
        assert!(!xml.contains("&b="));
    }
}
