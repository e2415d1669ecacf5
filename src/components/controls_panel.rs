use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub save_label: AttrValue,
    pub on_save: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let save_cb = {
        let cb = props.on_save.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; gap:8px;">
        <button onclick={save_cb} style="min-width:80px;">{ props.save_label.clone() }</button>
        <button onclick={reset_cb} style="background:#3b1d1d; border:1px solid #5d2d2d; color:#fff;">{"Reset"}</button>
    </div>}
}
