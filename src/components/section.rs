use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    /// Short category label, rendered uppercase and widely tracked.
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    /// Rendered only when present; `None` leaves no node behind.
    #[prop_or_default]
    pub intro: Option<AttrValue>,
    pub children: Children,
}

/// Uniform chrome for one category of the page: a header block followed by
/// the bordered content area holding `children`.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let intro = match &props.intro {
        Some(intro) => html! { <p class="section-intro">{ intro.clone() }</p> },
        None => html! {},
    };

    html! {
        <section class="section">
            <div class="section-header">
                <p class="section-eyebrow">{ props.eyebrow.clone() }</p>
                <h2 class="section-title">{ props.title.clone() }</h2>
                { intro }
            </div>
            <div class="gradient-border">
                <div class="section-body">
                    { for props.children.iter() }
                </div>
            </div>
        </section>
    }
}
