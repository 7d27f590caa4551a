use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::embed::fullscreen::FullscreenState;
use crate::embed::web::{WebFullscreen, WebHost};
use crate::embed::{EmbedController, Strategy};
use crate::error::PlayerError;
use crate::model::GameEntry;
use crate::util::{alert, clog, format_rating};

#[derive(Properties, PartialEq, Clone)]
pub struct GamePlayerProps {
    pub game: GameEntry,
    pub on_close: Callback<()>,
}

const TOOL_BUTTON: &str = "display:flex; align-items:center; gap:8px; padding:8px 16px; border-radius:8px; font-size:10px; font-weight:900; cursor:pointer;";

#[function_component(GamePlayer)]
pub fn game_player(props: &GamePlayerProps) -> Html {
    let frame_ref = use_node_ref();
    let container_ref = use_node_ref();
    let controller = {
        let frame_ref = frame_ref.clone();
        use_mut_ref(move || EmbedController::new(WebHost::new(frame_ref)))
    };
    let mode = use_state(|| None::<Strategy>);
    let screen = use_mut_ref(FullscreenState::default);
    let is_fullscreen = use_state(|| false);

    // Direct embed whenever a (new) game opens; the cleanup releases whatever
    // the previous game's presentation still holds.
    {
        let controller = controller.clone();
        let mode = mode.clone();
        let url = props.game.target_url.clone();
        use_effect_with(props.game.id.clone(), move |id| {
            clog(&format!("player: open {id}"));
            if let Err(e) = controller.borrow_mut().present_url(&url, Strategy::Direct) {
                alert(&e.to_string());
            }
            mode.set(controller.borrow().mode());
            move || controller.borrow_mut().release()
        });
    }

    // Keep the fullscreen flag in step with the document, and report
    // requests the browser rejects after the fact.
    {
        let is_fullscreen = is_fullscreen.clone();
        let screen = screen.clone();
        let container_ref = container_ref.clone();
        use_effect_with((), move |_| {
            let document = web_sys::window().and_then(|w| w.document());
            let on_change = {
                let is_fullscreen = is_fullscreen.clone();
                let screen = screen.clone();
                let host = WebFullscreen::new(container_ref.clone());
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    is_fullscreen.set(screen.borrow_mut().sync(&host));
                }) as Box<dyn FnMut(_)>)
            };
            let host = WebFullscreen::new(container_ref);
            let on_error = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                is_fullscreen.set(screen.borrow_mut().sync(&host));
                alert(&PlayerError::FullscreenRefused("request denied".into()).to_string());
            }) as Box<dyn FnMut(_)>);
            if let Some(doc) = &document {
                let _ = doc.add_event_listener_with_callback(
                    "fullscreenchange",
                    on_change.as_ref().unchecked_ref(),
                );
                let _ = doc.add_event_listener_with_callback(
                    "fullscreenerror",
                    on_error.as_ref().unchecked_ref(),
                );
            }
            move || {
                if let Some(doc) = document {
                    let _ = doc.remove_event_listener_with_callback(
                        "fullscreenchange",
                        on_change.as_ref().unchecked_ref(),
                    );
                    let _ = doc.remove_event_listener_with_callback(
                        "fullscreenerror",
                        on_error.as_ref().unchecked_ref(),
                    );
                }
                drop(on_change);
                drop(on_error);
            }
        });
    }

    let present = {
        let controller = controller.clone();
        let mode = mode.clone();
        let url = props.game.target_url.clone();
        Callback::from(move |strategy: Strategy| {
            match controller.borrow_mut().present_url(&url, strategy) {
                Ok(()) => clog(&format!("player: {strategy:?}")),
                Err(e) => alert(&e.to_string()),
            }
            mode.set(controller.borrow().mode());
        })
    };
    let strategy_cb = |strategy: Strategy| -> Callback<MouseEvent> {
        let present = present.clone();
        Callback::from(move |_| present.emit(strategy))
    };
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let fullscreen_cb = {
        let host = WebFullscreen::new(container_ref.clone());
        let screen = screen.clone();
        let is_fullscreen = is_fullscreen.clone();
        Callback::from(move |_| {
            let mut screen = screen.borrow_mut();
            if let Err(e) = screen.toggle(&host) {
                alert(&e.to_string());
            }
            is_fullscreen.set(screen.is_active());
        })
    };

    let g = &props.game;
    let isolated = *mode == Some(Strategy::IsolatedDocument);
    let badge_style = if isolated {
        "padding:2px 8px; border-radius:2px; color:#fff; background:#dc2626;"
    } else {
        "padding:2px 8px; border-radius:2px; color:#fff; background:#4f46e5;"
    };
    let badge = if isolated { "Isolated".to_string() } else { g.category.name().to_string() };

    html! {
        <div style="position:fixed; inset:0; z-index:60; display:flex; flex-direction:column; background:#010409;">
            <div style="display:flex; align-items:center; justify-content:space-between; padding:12px 28px; background:rgba(13,17,23,0.95); border-bottom:1px solid #21262d;">
                <div style="display:flex; align-items:center; gap:16px;">
                    <button onclick={close_cb} title="Back to library" style="width:40px; height:40px; border-radius:8px; border:1px solid #21262d; background:none; color:#8b949e;">
                        <i class="fas fa-arrow-left"></i>
                    </button>
                    <div>
                        <h2 style="margin:0; font-size:18px; font-weight:900; font-style:italic; text-transform:uppercase; color:#fff;">{ g.title.clone() }</h2>
                        <div style="display:flex; align-items:center; gap:8px; font-size:10px; font-weight:700; text-transform:uppercase; color:#6e7681;">
                            <span style={badge_style}>{ badge }</span>
                            <span style="color:#eab308;"><i class="fas fa-star"></i>{ format!(" {}", format_rating(g.rating)) }</span>
                        </div>
                    </div>
                </div>
                <div style="display:flex; align-items:center; gap:8px;">
                    <button onclick={strategy_cb(Strategy::ReloadCycle)} title="Blank the frame and load the game again" style={format!("{TOOL_BUTTON} background:rgba(234,88,12,0.2); color:#fb923c; border:1px solid rgba(249,115,22,0.3);")}>
                        <i class="fas fa-sync-alt"></i>{"Reload"}
                    </button>
                    <button onclick={strategy_cb(Strategy::IsolatedDocument)} title="Run the game inside a local page" style={format!("{TOOL_BUTTON} background:rgba(220,38,38,0.2); color:#f87171; border:1px solid rgba(239,68,68,0.3);")}>
                        <i class="fas fa-box"></i>{"Isolate"}
                    </button>
                    <button onclick={strategy_cb(Strategy::DetachedWindow)} title="Open in a separate window" style={format!("{TOOL_BUTTON} background:rgba(49,46,129,0.4); color:#a5b4fc; border:1px solid rgba(99,102,241,0.3);")}>
                        <i class="fas fa-up-right-from-square"></i>{"Pop out"}
                    </button>
                    <button onclick={fullscreen_cb} title="Fullscreen" style="width:40px; height:40px; border-radius:8px; border:1px solid #21262d; background:none; color:#8b949e;">
                        <i class={classes!("fas", if *is_fullscreen { "fa-compress" } else { "fa-expand" })}></i>
                    </button>
                </div>
            </div>
            <div ref={container_ref} style="flex:1; position:relative; display:flex; align-items:center; justify-content:center; background:#000;">
                // src and permissions are driven by the embed controller.
                <iframe
                    ref={frame_ref}
                    title={g.title.clone()}
                    style="width:100%; height:100%; border:0;"
                />
            </div>
        </div>
    }
}
