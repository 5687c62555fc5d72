use bias_reel_blueprint::{render_document, SiteConfig, BLUEPRINT};

#[tokio::test]
async fn document_has_doctype_metadata_and_page() {
    let html = render_document(BLUEPRINT, SiteConfig::default()).await;

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(html.contains("<title>Confirmation Bias Motion Reel Blueprint</title>"));
    assert!(html.contains(
        "content=\"Motion graphics production blueprint for explaining confirmation bias in investing.\""
    ));
    assert!(html.contains("family=Plus+Jakarta+Sans:wght@"));
    assert!(html.contains("--color-accent: #70C1B3;"));
    assert!(html.contains("<main class=\"page\">"));
    assert!(html.trim_end().ends_with("</html>"));

    let head = html.find("<head>").unwrap();
    let body = html.find("<body>").unwrap();
    let style = html.find("<style>").unwrap();
    assert!(head < body && body < style);
}

#[tokio::test]
async fn config_overrides_reach_the_document() {
    let site = SiteConfig::from_json(
        r##"{
            "meta": { "lang": "hi", "title": "Bias Reel" },
            "theme": { "colors": { "accent": "#2EC4B6" }, "fonts": { "copy": "Mukta" } }
        }"##,
    )
    .unwrap();
    site.validate().unwrap();

    let html = render_document(BLUEPRINT, site).await;
    assert!(html.contains("<html lang=\"hi\">"));
    assert!(html.contains("<title>Bias Reel</title>"));
    assert!(html.contains("--color-accent: #2EC4B6;"));
    assert!(html.contains("--font-copy: \"Mukta\""));
    assert!(html.contains("family=Mukta:wght@"));
}
