use yew::prelude::*;

#[function_component]
pub fn LoadingScreen() -> Html {
    html! {
        <div style="min-height:100vh; background:#0d1117; display:flex; align-items:center; justify-content:center;">
            <div style="display:flex; flex-direction:column; align-items:center; gap:16px;">
                <i class="fas fa-circle-notch fa-spin" style="font-size:40px; color:#6366f1;"></i>
                <p style="margin:0; color:#8b949e; font-weight:500;">{"Loading library..."}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorScreenProps {
    pub message: String,
    pub on_retry: Callback<()>,
}

/// Shown when the catalog could not be loaded; nothing else is usable then.
#[function_component]
pub fn ErrorScreen(props: &ErrorScreenProps) -> Html {
    let retry = {
        let cb = props.on_retry.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="min-height:100vh; background:#0d1117; display:flex; align-items:center; justify-content:center;">
            <div style="background:#161b22; border:2px solid #f85149; border-radius:12px; padding:24px 32px; max-width:460px; text-align:center;">
                <h2 style="margin:0 0 12px 0; color:#f85149;">{"Couldn't load the game library"}</h2>
                <p style="margin:0 0 16px 0; font-size:13px; color:#8b949e; word-break:break-word;">{ props.message.clone() }</p>
                <button onclick={retry}>{"Try again"}</button>
            </div>
        </div>
    }
}
