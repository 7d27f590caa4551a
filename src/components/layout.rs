use crate::model::Category;
use crate::state::{TitleCloak, WebChrome};
use crate::util::{alert, cwarn};
use web_sys::HtmlInputElement;
use yew::prelude::*;

const HELP_TEXT: &str = "PLAYER CONTROLS:\n\
1. Stealth mode swaps this tab's title and icon; press it again to put them back.\n\
2. Reload blanks the game frame and loads the game again.\n\
3. Isolate runs the game inside a local page instead of loading it directly.\n\
4. Pop out opens the game in a separate blank window (allow popups first).";

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub query: String,
    pub selected_category: Option<Category>,
    pub on_search: Callback<String>,
    pub on_select_category: Callback<Option<Category>>,
    pub on_reset: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

#[derive(Properties, PartialEq)]
struct NavItemProps {
    icon: &'static str,
    label: AttrValue,
    active: bool,
    on_click: Callback<()>,
}

#[function_component]
fn NavItem(props: &NavItemProps) -> Html {
    let cb = props.on_click.clone();
    let style = if props.active {
        "display:flex; align-items:center; gap:10px; padding:9px 12px; border-radius:8px; cursor:pointer; background:#4f46e5; color:#fff; border:1px solid #818cf8;"
    } else {
        "display:flex; align-items:center; gap:10px; padding:9px 12px; border-radius:8px; cursor:pointer; color:#8b949e; border:1px solid transparent;"
    };
    html! {
        <li style={style} onclick={Callback::from(move |_| cb.emit(()))}>
            <i class={classes!("fas", props.icon)} style="width:18px; text-align:center;"></i>
            <span style="font-size:12px; font-weight:700; text-transform:uppercase; letter-spacing:0.05em;">{ props.label.clone() }</span>
        </li>
    }
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let cloak = use_mut_ref(TitleCloak::default);
    let disguised = use_state(|| false);

    let toggle_cloak = {
        let cloak = cloak.clone();
        let disguised = disguised.clone();
        Callback::from(move |_| {
            let Some(chrome) = WebChrome::current() else {
                cwarn("cloak: no document");
                return;
            };
            let mut cloak = cloak.borrow_mut();
            cloak.toggle(&chrome);
            disguised.set(cloak.is_disguised());
        })
    };
    let show_help = Callback::from(|_| alert(HELP_TEXT));

    let on_input = {
        let cb = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let on_brand = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let select = |c: Option<Category>| -> Callback<()> {
        let cb = props.on_select_category.clone();
        Callback::from(move |_| cb.emit(c))
    };

    let (cloak_label, cloak_icon, cloak_style) = if *disguised {
        ("Stealth active", "fa-eye-slash", "background:rgba(34,197,94,0.1); border:1px solid rgba(34,197,94,0.5); color:#4ade80;")
    } else {
        ("Stealth mode", "fa-user-secret", "background:#0d1117; border:1px solid #30363d; color:#8b949e;")
    };

    html! {
        <div style="min-height:100vh; display:flex; flex-direction:column; background:#010409; color:#e6edf3;">
            <header style="position:sticky; top:0; z-index:50; display:flex; flex-wrap:wrap; align-items:center; justify-content:space-between; gap:16px; padding:14px 28px; background:rgba(13,17,23,0.92); border-bottom:1px solid rgba(99,102,241,0.2);">
                <div style="display:flex; align-items:center; gap:12px; cursor:pointer;" onclick={on_brand}>
                    <div style="width:40px; height:40px; border-radius:8px; background:#4f46e5; display:flex; align-items:center; justify-content:center;">
                        <i class="fas fa-gamepad" style="font-size:20px;"></i>
                    </div>
                    <h1 style="margin:0; font-size:24px; font-weight:900; font-style:italic; text-transform:uppercase; color:#a5b4fc;">{"NovaGames"}</h1>
                </div>
                <input
                    type="text"
                    placeholder="Search games & apps..."
                    value={props.query.clone()}
                    oninput={on_input}
                    style="flex:0 1 380px; padding:10px 18px; border-radius:999px; background:#0d1117; border:1px solid #30363d; color:#fff; font-size:14px;"
                />
                <div style="display:flex; gap:10px; font-size:12px; font-weight:900;">
                    <button onclick={toggle_cloak} style={format!("display:flex; align-items:center; gap:8px; padding:8px 18px; border-radius:999px; text-transform:uppercase; {cloak_style}")}>
                        <i class={classes!("fas", cloak_icon)}></i>
                        { cloak_label }
                    </button>
                    <button onclick={show_help} style="padding:8px 18px; border-radius:999px; background:#4f46e5; border:1px solid #818cf8; color:#fff; text-transform:uppercase;">
                        <i class="fas fa-circle-question"></i>{" Help"}
                    </button>
                </div>
            </header>
            <div style="display:flex; flex:1; overflow:hidden;">
                <aside style="width:240px; padding:24px; display:flex; flex-direction:column; gap:28px; border-right:1px solid #21262d;">
                    <div>
                        <h3 style="margin:0 0 12px 0; font-size:10px; letter-spacing:0.2em; color:#6e7681; text-transform:uppercase;">{"Portal"}</h3>
                        <ul style="list-style:none; margin:0; padding:0; display:flex; flex-direction:column; gap:4px;">
                            <NavItem icon="fa-th-large" label="All library" active={props.selected_category.is_none()} on_click={select(None)} />
                            <NavItem icon={Category::Apps.icon()} label="Apps & tools" active={props.selected_category == Some(Category::Apps)} on_click={select(Some(Category::Apps))} />
                        </ul>
                    </div>
                    <div>
                        <h3 style="margin:0 0 12px 0; font-size:10px; letter-spacing:0.2em; color:#6e7681; text-transform:uppercase;">{"Categories"}</h3>
                        <ul style="list-style:none; margin:0; padding:0; display:flex; flex-direction:column; gap:4px;">
                            { for Category::ALL.into_iter().filter(|c| *c != Category::Apps).map(|c| html! {
                                <NavItem key={c.name()} icon={c.icon()} label={c.name()} active={props.selected_category == Some(c)} on_click={select(Some(c))} />
                            }) }
                        </ul>
                    </div>
                </aside>
                <main style="flex:1; overflow-y:auto; padding:40px;">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}
