use shared::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub to: Route,
    pub navigate: Callback<Route>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// In-app anchor: keeps a real href but routes through history
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let onclick = {
        let navigate = props.navigate.clone();
        let to = props.to;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(to);
        })
    };

    html! {
        <a href={props.to.path()} class={props.class.clone()} {onclick}>
            {props.children.clone()}
        </a>
    }
}
