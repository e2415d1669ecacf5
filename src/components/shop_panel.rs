use crate::model::GameState;
use crate::util::format_number;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ShopPanelProps {
    pub game: GameState,
    pub on_buy: Callback<&'static str>,
}

/// One row per upgrade: name, blurb, owned, next cost and a Buy button that
/// is disabled while the player cannot afford it.
#[function_component]
pub fn ShopPanel(props: &ShopPanelProps) -> Html {
    let rows: Vec<Html> = props
        .game
        .entries()
        .map(|(def, owned)| {
            let id = def.id;
            let cost = props.game.cost(id).unwrap_or(u64::MAX);
            let can_buy = props.game.can_afford(id);
            let buy_cb = {
                let cb = props.on_buy.clone();
                Callback::from(move |_| cb.emit(id))
            };
            html! {
                <div key={id} style="display:flex; justify-content:space-between; align-items:center; gap:12px; padding:10px 12px; border:1px solid rgba(127,127,127,0.35); border-radius:10px;">
                    <div style="display:flex; flex-direction:column; gap:2px;">
                        <div style="font-weight:700;">{ def.name }</div>
                        <div style="font-size:12px; opacity:0.75;">{ def.desc }</div>
                        <div style="display:flex; gap:12px; font-size:12px;">
                            <span>{"Owned: "}<strong>{ owned }</strong></span>
                            <span>{"Cost: "}<strong>{ format_number(cost as f64) }</strong></span>
                        </div>
                    </div>
                    <button disabled={!can_buy} onclick={buy_cb} style="min-width:70px;">{"Buy"}</button>
                </div>
            }
        })
        .collect();
    html! {
        <div style="display:flex; flex-direction:column; gap:8px; min-width:320px;">
            <h3 style="margin:0 0 4px 0; font-size:18px;">{"Shop"}</h3>
            { for rows }
        </div>
    }
}
