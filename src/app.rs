use yew::prelude::*;

use crate::content::Blueprint;
use crate::page::Page;
use crate::theme::{stylesheet, Theme};

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub content: Blueprint,
    #[prop_or_default]
    pub theme: Theme,
}

/// Root component: the generated stylesheet followed by the page.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <>
            <style>{ stylesheet(&props.theme) }</style>
            <Page content={props.content} />
        </>
    }
}
