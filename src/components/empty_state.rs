use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EmptyStateProps {
    pub on_clear: Callback<()>,
}

#[function_component]
pub fn EmptyState(props: &EmptyStateProps) -> Html {
    let clear = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="display:flex; flex-direction:column; align-items:center; padding:80px 0; text-align:center;">
            <div style="width:80px; height:80px; border-radius:50%; background:#161b22; display:flex; align-items:center; justify-content:center; margin-bottom:24px; font-size:28px; color:#484f58;">
                <i class="fas fa-search"></i>
            </div>
            <h3 style="margin:0 0 8px 0; font-size:20px; color:#c9d1d9;">{"No games found"}</h3>
            <p style="margin:0; max-width:300px; color:#6e7681;">{"Nothing matches your current search or category filter."}</p>
            <button onclick={clear} style="margin-top:24px; background:none; border:none; color:#818cf8; font-weight:600; cursor:pointer;">{"Clear all filters"}</button>
        </div>
    }
}
