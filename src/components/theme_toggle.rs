use crate::state::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component]
pub fn ThemeToggle(props: &ThemeToggleProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" class="theme-toggle" checked={props.theme == Theme::Dark} onclick={toggle_cb} />
            <span>{"Dark mode"}</span>
        </label>
    }
}
