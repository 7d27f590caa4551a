use super::{
    empty_state::EmptyState, featured_banner::FeaturedBanner, game_card::GameCard,
    game_player::GamePlayer, layout::Layout, status_screen::{ErrorScreen, LoadingScreen},
};
use crate::catalog;
use crate::config::FEATURED_LIMIT;
use crate::filter::{featured_games, filter_games};
use crate::model::{Catalog, Category, GameEntry};
use crate::state::{Selection, SelectionAction};
use crate::util::{clog, cwarn, game_count_label};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
enum LoadStatus {
    Loading,
    Ready(Catalog),
    Failed(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let status = use_state(|| LoadStatus::Loading);
    // Bumped by "Try again"; each value triggers exactly one fetch.
    let attempt = use_state(|| 0u32);
    let query = use_state(String::new);
    let category = use_state(|| None::<Category>);
    let selection = use_reducer(Selection::default);

    {
        let status = status.clone();
        use_effect_with(*attempt, move |_| {
            status.set(LoadStatus::Loading);
            spawn_local(async move {
                match catalog::load().await {
                    Ok(c) => {
                        clog(&format!("catalog: {} games", c.len()));
                        status.set(LoadStatus::Ready(c));
                    }
                    Err(e) => {
                        cwarn(&format!("catalog: {e}"));
                        status.set(LoadStatus::Failed(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let catalog = match &*status {
        LoadStatus::Loading => return html! { <LoadingScreen /> },
        LoadStatus::Failed(msg) => {
            let retry = {
                let attempt = attempt.clone();
                Callback::from(move |_: ()| attempt.set(*attempt + 1))
            };
            return html! { <ErrorScreen message={msg.clone()} on_retry={retry} /> };
        }
        LoadStatus::Ready(c) => c.clone(),
    };

    let on_search = {
        let query = query.clone();
        Callback::from(move |q: String| query.set(q))
    };
    let on_select_category = {
        let category = category.clone();
        Callback::from(move |c: Option<Category>| category.set(c))
    };
    let clear_filters = {
        let query = query.clone();
        let category = category.clone();
        Callback::from(move |_: ()| {
            query.set(String::new());
            category.set(None);
        })
    };
    let on_play = {
        let selection = selection.clone();
        Callback::from(move |g: GameEntry| selection.dispatch(SelectionAction::Select(g)))
    };
    let on_close = {
        let selection = selection.clone();
        Callback::from(move |_: ()| selection.dispatch(SelectionAction::Close))
    };

    let filtered = filter_games(&catalog, &query, *category);
    let featured = featured_games(&catalog, FEATURED_LIMIT);

    let heading = match (*category, query.is_empty()) {
        (Some(c), _) => format!("{c} Games"),
        (None, false) => format!("Search results for \"{}\"", *query),
        (None, true) => "Recommended for you".to_string(),
    };

    let banner = match featured.first() {
        Some(first) if category.is_none() && query.is_empty() => {
            html! { <FeaturedBanner game={(*first).clone()} on_play={on_play.clone()} /> }
        }
        _ => html! {},
    };

    let grid = if filtered.is_empty() {
        html! { <EmptyState on_clear={clear_filters.clone()} /> }
    } else {
        html! {
            <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(220px, 1fr)); gap:20px;">
                { for filtered.iter().map(|g| html! {
                    <GameCard key={g.id.clone()} game={(*g).clone()} on_select={on_play.clone()} />
                }) }
            </div>
        }
    };

    html! {
        <Layout
            query={(*query).clone()}
            selected_category={*category}
            on_search={on_search}
            on_select_category={on_select_category}
            on_reset={clear_filters}
        >
            <div style="display:flex; flex-direction:column; gap:40px;">
                { banner }
                <section>
                    <h2 style="margin:0 0 6px 0; font-size:22px; color:#fff;">{ heading }</h2>
                    <p style="margin:0 0 24px 0; font-size:13px; color:#8b949e;">
                        { format!("{} available to play right now.", game_count_label(filtered.len())) }
                    </p>
                    { grid }
                </section>
                <footer style="padding:60px 0 24px 0; text-align:center; font-size:11px; color:#6e7681;">
                    {"NovaGames. Browser games, no installs."}
                </footer>
            </div>
            {
                match selection.playing() {
                    Some(game) => html! { <GamePlayer game={game.clone()} on_close={on_close} /> },
                    None => html! {},
                }
            }
        </Layout>
    }
}
