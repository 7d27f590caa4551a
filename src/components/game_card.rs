use crate::model::GameEntry;
use crate::util::format_rating;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameCardProps {
    pub game: GameEntry,
    pub on_select: Callback<GameEntry>,
}

#[function_component]
pub fn GameCard(props: &GameCardProps) -> Html {
    let onclick = {
        let cb = props.on_select.clone();
        let game = props.game.clone();
        Callback::from(move |_| cb.emit(game.clone()))
    };
    let g = &props.game;
    html! {
        <div {onclick} style="position:relative; display:flex; flex-direction:column; background:#161b22; border:1px solid #30363d; border-bottom-width:8px; border-radius:12px; overflow:hidden; cursor:pointer;">
            <div style="position:relative; aspect-ratio:4/3; margin:8px 8px 0 8px; background:#010409; border-radius:3px; overflow:hidden;">
                <img src={g.thumbnail_url.clone()} alt={g.title.clone()} style="width:100%; height:100%; object-fit:cover;" />
                <div style="position:absolute; top:4px; right:4px; background:rgba(0,0,0,0.8); padding:2px 6px; border-radius:4px; font-size:10px; font-weight:900; color:#facc15;">
                    <i class="fas fa-star"></i>{ format!(" {}", format_rating(g.rating)) }
                </div>
            </div>
            <div style="padding:12px; display:flex; flex-direction:column; gap:4px;">
                <div style="display:flex; justify-content:space-between; align-items:flex-start; gap:8px;">
                    <h3 style="margin:0; font-size:12px; font-weight:900; text-transform:uppercase; white-space:nowrap; overflow:hidden; text-overflow:ellipsis;">{ g.title.clone() }</h3>
                    <span style="flex-shrink:0; font-size:8px; font-weight:900; background:#4f46e5; color:#fff; padding:2px 6px; border-radius:2px; text-transform:uppercase;">{ g.category.name() }</span>
                </div>
                <p style="margin:0; font-size:10px; color:#8b949e; font-style:italic; line-height:1.3; height:26px; overflow:hidden;">{ g.description.clone() }</p>
            </div>
            if g.featured {
                <div style="position:absolute; top:28px; left:-20px; transform:rotate(-45deg); background:#dc2626; color:#fff; font-size:8px; font-weight:900; padding:2px 24px; letter-spacing:0.2em; text-transform:uppercase;">{"Featured"}</div>
            }
        </div>
    }
}
