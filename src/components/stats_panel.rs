use crate::util::format_number;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub cookies: f64,
    pub cps: f64,
    pub on_click: Callback<()>,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let click_cb = {
        let cb = props.on_click.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let row_style = "display:flex; align-items:baseline; gap:8px;";
    let label_style = "flex:1; font-weight:500; opacity:0.8;";
    let value_style = "min-width:90px; text-align:right; font-variant-numeric:tabular-nums; font-weight:700;";
    html! {
        <div style="display:flex; flex-direction:column; align-items:center; gap:14px; padding:16px; border:1px solid rgba(127,127,127,0.35); border-radius:12px; background:rgba(127,127,127,0.08); min-width:260px;">
            <button
                onclick={click_cb}
                aria-label="Bake a cookie"
                style="width:160px; height:160px; border-radius:50%; border:4px solid #8b5a2b; background:radial-gradient(circle at 35% 35%, #e0a96d, #b8793a); font-size:64px; cursor:pointer;"
            >
                {"🍪"}
            </button>
            <div style="display:flex; flex-direction:column; gap:6px; width:100%;">
                <div style={row_style}>
                    <span style={label_style}>{"Cookies"}</span>
                    <span style={value_style}>{ format_number(props.cookies) }</span>
                </div>
                <div style={row_style}>
                    <span style={label_style}>{"Per second"}</span>
                    <span style={value_style}>{ format_number(props.cps) }</span>
                </div>
            </div>
        </div>
    }
}
