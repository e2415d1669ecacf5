use super::{
    controls_panel::ControlsPanel, reset_modal::ResetModal, shop_panel::ShopPanel,
    stats_panel::StatsPanel, theme_toggle::ThemeToggle,
};
use crate::config::{SAVED_FLASH_MS, TICK_MS};
use crate::model::UPGRADE_DEFS;
use crate::state::{
    GameAction, LocalStore, Session, Theme, TickDriver, apply_theme, load_game,
    load_theme, persist, save_theme,
};
use crate::util::{clog, log_failure};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

const SAVE_LABEL: &str = "Save";
const SAVED_LABEL: &str = "Saved!";

fn open_store() -> Option<LocalStore> {
    match LocalStore::open() {
        Ok(store) => Some(store),
        Err(e) => {
            clog(&format!("{e}; progress will not be kept"));
            None
        }
    }
}

fn initial_session(store: Option<&LocalStore>) -> Session {
    let Some(store) = store else {
        return Session::default();
    };
    let decoded = load_game(store, UPGRADE_DEFS);
    for issue in decoded.issues() {
        clog(&format!("save repaired: {issue}"));
    }
    Session {
        game: decoded.into_state(),
        revision: 0,
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // Opened once; a disabled localStorage is reported a single time.
    let store = use_mut_ref(open_store);
    let session = {
        let store = store.clone();
        use_reducer(move || initial_session(store.borrow().as_ref()))
    };
    let session_ref = use_mut_ref(|| session.clone());
    let theme = {
        let store = store.clone();
        use_state(move || store.borrow().as_ref().map(|s| load_theme(s)).unwrap_or_default())
    };
    let save_label = use_state(|| AttrValue::Static(SAVE_LABEL));
    let show_reset = use_state(|| false);

    // Interval closures read the latest state through this ref.
    *session_ref.borrow_mut() = session.clone();

    // Persist after every user-driven mutation (click, buy, reset).
    {
        let store = store.clone();
        let game = session.game.clone();
        use_effect_with(session.revision, move |rev| {
            if *rev > 0 {
                persist(store.borrow().as_ref(), &game);
            }
            || ()
        });
    }
    {
        use_effect_with(*theme, move |t| {
            apply_theme(*t);
            || ()
        });
    }
    // Accrual ticker; every SAVE_EVERY_TICKS-th fire also saves.
    {
        let session_ref = session_ref.clone();
        let store = store.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let mut driver = TickDriver::default();
            let tick = Closure::wrap(Box::new(move || {
                let t = driver.fire();
                let handle = session_ref.borrow().clone();
                handle.dispatch(GameAction::Accrue {
                    secs: t.accrue_secs,
                });
                if t.save {
                    persist(store.borrow().as_ref(), &handle.game);
                }
            }) as Box<dyn FnMut()>);
            let tick_id = window.as_ref().and_then(|w| {
                log_failure(
                    "could not start the accrual timer",
                    w.set_interval_with_callback_and_timeout_and_arguments_0(
                        tick.as_ref().unchecked_ref(),
                        TICK_MS,
                    ),
                )
            });
            move || {
                if let (Some(w), Some(id)) = (window, tick_id) {
                    w.clear_interval_with_handle(id);
                }
                drop(tick);
            }
        });
    }

    let on_click = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(GameAction::Click))
    };
    let on_buy = {
        let session = session.clone();
        // The reducer validates against the latest state and logs rejections.
        Callback::from(move |id: &'static str| session.dispatch(GameAction::Purchase { id }))
    };
    let on_save = {
        let session_ref = session_ref.clone();
        let store = store.clone();
        let save_label = save_label.clone();
        Callback::from(move |_| {
            persist(store.borrow().as_ref(), &session_ref.borrow().game);
            save_label.set(AttrValue::Static(SAVED_LABEL));
            if let Some(win) = web_sys::window() {
                let save_label = save_label.clone();
                let revert =
                    Closure::once_into_js(move || save_label.set(AttrValue::Static(SAVE_LABEL)));
                log_failure(
                    "save label timer not started",
                    win.set_timeout_with_callback_and_timeout_and_arguments_0(
                        revert.unchecked_ref(),
                        SAVED_FLASH_MS,
                    ),
                );
            }
        })
    };
    let open_reset = {
        let show_reset = show_reset.clone();
        Callback::from(move |_| show_reset.set(true))
    };
    let cancel_reset = {
        let show_reset = show_reset.clone();
        Callback::from(move |_| show_reset.set(false))
    };
    let confirm_reset = {
        let session = session.clone();
        let show_reset = show_reset.clone();
        Callback::from(move |_| {
            session.dispatch(GameAction::Reset);
            show_reset.set(false);
        })
    };
    let on_toggle_theme = {
        let theme = theme.clone();
        let store = store.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            if let Some(store) = store.borrow().as_ref() {
                if let Err(e) = save_theme(store, next) {
                    clog(&format!("theme not saved: {e}"));
                }
            }
            theme.set(next);
        })
    };

    let (bg, fg) = match *theme {
        Theme::Light => ("#f6f8fa", "#1f2328"),
        Theme::Dark => ("#0d1117", "#e6edf3"),
    };
    let game = session.game.clone();

    html! {
        <div style={format!("min-height:100vh; background:{bg}; color:{fg}; font-family:system-ui, sans-serif; display:flex; flex-direction:column; align-items:center; gap:18px; padding:24px; box-sizing:border-box;")}>
            <div style="display:flex; justify-content:space-between; align-items:center; width:100%; max-width:720px;">
                <h2 style="margin:0;">{"Cookie Clicker"}</h2>
                <ThemeToggle theme={*theme} on_toggle={on_toggle_theme} />
            </div>
            <div style="display:flex; flex-wrap:wrap; gap:24px; justify-content:center; align-items:flex-start;">
                <div style="display:flex; flex-direction:column; gap:12px; align-items:center;">
                    <StatsPanel cookies={game.currency()} cps={game.generation_rate()} on_click={on_click} />
                    <ControlsPanel save_label={(*save_label).clone()} on_save={on_save} on_reset={open_reset} />
                </div>
                <ShopPanel game={game} on_buy={on_buy} />
            </div>
            <ResetModal show={*show_reset} on_cancel={cancel_reset} on_confirm={confirm_reset} />
        </div>
    }
}
