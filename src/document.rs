//! Full HTML document for the static export.

use yew::prelude::*;
use yew::ServerRenderer;

use crate::app::App;
use crate::config::SiteConfig;
use crate::content::Blueprint;

pub const DOCTYPE: &str = "<!DOCTYPE html>";

#[derive(Properties, PartialEq)]
pub struct DocumentProps {
    #[prop_or_default]
    pub content: Blueprint,
    #[prop_or_default]
    pub site: SiteConfig,
}

#[function_component(Document)]
pub fn document(props: &DocumentProps) -> Html {
    let meta = &props.site.meta;
    let theme = &props.site.theme;

    html! {
        <html lang={meta.lang.clone()}>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{ meta.title.clone() }</title>
                <meta name="description" content={meta.description.clone()} />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous" />
                <link rel="stylesheet" href={theme.font_stylesheet_url()} />
            </head>
            <body>
                <App content={props.content} theme={theme.clone()} />
            </body>
        </html>
    }
}

/// Renders the complete document, doctype included, without hydration markers.
#[tracing::instrument(skip_all, fields(lang = %site.meta.lang))]
pub async fn render_document(content: Blueprint, site: SiteConfig) -> String {
    let html = ServerRenderer::<Document>::with_props(move || DocumentProps { content, site })
        .hydratable(false)
        .render()
        .await;
    tracing::debug!(bytes = html.len(), "rendered document");
    format!("{DOCTYPE}\n{html}\n")
}
