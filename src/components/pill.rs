use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PillProps {
    pub label: AttrValue,
}

#[function_component(Pill)]
pub fn pill(props: &PillProps) -> Html {
    html! {
        <span class="pill">{ props.label.clone() }</span>
    }
}
