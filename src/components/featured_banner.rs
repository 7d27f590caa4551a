use crate::model::GameEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FeaturedBannerProps {
    /// First featured entry; "Play now" opens it.
    pub game: GameEntry,
    pub on_play: Callback<GameEntry>,
}

#[function_component(FeaturedBanner)]
pub fn featured_banner(props: &FeaturedBannerProps) -> Html {
    let play = {
        let cb = props.on_play.clone();
        let game = props.game.clone();
        Callback::from(move |_| cb.emit(game.clone()))
    };
    html! {
        <section style="position:relative; height:340px; border-radius:24px; overflow:hidden;">
            <img src={props.game.thumbnail_url.clone()} alt={props.game.title.clone()} style="width:100%; height:100%; object-fit:cover;" />
            <div style="position:absolute; inset:0; display:flex; flex-direction:column; justify-content:center; padding:0 56px; background:linear-gradient(to right, #010409, rgba(1,4,9,0.6), transparent);">
                <span style="font-size:11px; font-weight:700; letter-spacing:0.2em; text-transform:uppercase; color:#818cf8; margin-bottom:14px;">{"Trending now"}</span>
                <h2 style="margin:0 0 24px 0; max-width:520px; font-size:48px; font-weight:900; line-height:1.1; color:#fff;">{ props.game.title.clone() }</h2>
                <div>
                    <button onclick={play} style="background:#4f46e5; color:#fff; font-weight:700; padding:12px 32px; border-radius:12px; border:none;">{"Play now"}</button>
                </div>
            </div>
        </section>
    }
}
