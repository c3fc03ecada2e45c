use crate::core::routes::{ROUTE_TABLE, Route};
use crate::core::theme::ThemeMode;
use crate::i18n::TranslationBundle;
use yew::prelude::*;
use yew_router::prelude::{Link, use_route};

/// Navigation labels resolved for the active locale, in route table order.
#[derive(Clone, PartialEq)]
pub(crate) struct NavLabels {
    pub(crate) brand: String,
    pub(crate) items: Vec<(Route, String)>,
    pub(crate) theme: String,
    pub(crate) theme_light: String,
    pub(crate) theme_dark: String,
    pub(crate) locale: String,
    pub(crate) open_nav: String,
    pub(crate) close_nav: String,
}

impl NavLabels {
    pub(crate) fn from_bundle(bundle: &TranslationBundle) -> Self {
        Self {
            brand: bundle.text("shell.brand", "Trainer"),
            items: ROUTE_TABLE
                .iter()
                .map(|entry| (entry.route, bundle.text(entry.route.label_key(), entry.name)))
                .collect(),
            theme: bundle.text("shell.theme", "Theme"),
            theme_light: bundle.text("shell.theme_light", "Light"),
            theme_dark: bundle.text("shell.theme_dark", "Dark"),
            locale: bundle.text("shell.locale", "Language"),
            open_nav: bundle.text("shell.open_nav", "Open navigation"),
            close_nav: bundle.text("shell.close_nav", "Close navigation"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub(crate) children: Children,
    pub(crate) theme: ThemeMode,
    pub(crate) on_toggle_theme: Callback<()>,
    pub(crate) locale_selector: Html,
    pub(crate) nav: NavLabels,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let nav_open = use_state(|| false);
    let active = use_route::<Route>().unwrap_or(Route::NotFound);
    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_| nav_open.set(!*nav_open))
    };
    let toggle_theme = props.on_toggle_theme.reform(|_: MouseEvent| ());

    let theme_label = match props.theme {
        ThemeMode::Light => &props.nav.theme_light,
        ThemeMode::Dark => &props.nav.theme_dark,
    };

    html! {
        <div class={classes!("app-shell", format!("theme-{}", props.theme.as_str()))}>
            <aside class={classes!("sidebar", if *nav_open { "open" } else { "closed" })}>
                <div class="brand">
                    <button class="ghost mobile-only" onclick={toggle_nav.clone()} aria-label={props.nav.close_nav.clone()}>{"✕"}</button>
                    <strong>{&props.nav.brand}</strong>
                </div>
                <nav>
                    {for props.nav.items.iter().map(|(route, label)| nav_item(*route, label, active))}
                </nav>
                <div class="sidebar-footer">
                    <div class="theme-toggle">
                        <small>{&props.nav.theme}</small>
                        <button class="ghost" onclick={toggle_theme}>{theme_label}</button>
                    </div>
                    <div class="locale-toggle">
                        <small>{&props.nav.locale}</small>
                        {props.locale_selector.clone()}
                    </div>
                </div>
            </aside>
            <div class="main">
                <header class="topbar">
                    <button class="ghost mobile-only" aria-label={props.nav.open_nav.clone()} onclick={toggle_nav}>{"☰"}</button>
                </header>
                <main>
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}

fn nav_item(route: Route, label: &str, active: Route) -> Html {
    let classes = classes!(
        "nav-item",
        if active == route {
            Some("active")
        } else {
            None
        }
    );
    html! {
        <Link<Route> to={route} classes={classes}>{label}</Link<Route>>
    }
}
