use crate::components::shell::{AppShell, NavLabels};
use crate::core::routes::Route;
use crate::core::theme::ThemeMode;
use crate::features::views::{
    CalendarView, ChatbotView, HomeView, MacrosView, NotFoundView, ProfileView,
    SubscriptionsView, TrainerDashboardView,
};
use crate::i18n::{LocaleCode, TranslationBundle};
use gloo::console;
use gloo::utils::{document, window};
use preferences::{load_locale, load_theme, persist_locale, persist_theme, router_basename};
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod navigation;
mod preferences;

#[function_component(TrainerApp)]
fn trainer_app() -> Html {
    let theme = use_state(load_theme);
    let locale = use_state(load_locale);
    let basename = use_memo(|_| router_basename(), ());
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };

    let nav_labels = NavLabels::from_bundle(&bundle);

    {
        let theme = *theme;
        use_effect_with_deps(
            move |_| {
                apply_theme(theme);
                persist_theme(theme);
                || ()
            },
            theme,
        );
    }
    {
        let locale = *locale;
        use_effect_with_deps(
            move |_| {
                apply_language(locale);
                persist_locale(locale);
                || ()
            },
            locale,
        );
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |()| theme.set(theme.toggled()))
    };

    let locale_selector = {
        let locale = locale.clone();
        html! {
            <select value={locale.code().to_string()} onchange={{
                let locale = locale.clone();
                Callback::from(move |e: Event| {
                    let Some(target) = e
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                    else {
                        return;
                    };
                    if let Some(next) = LocaleCode::from_lang_tag(&target.value()) {
                        locale.set(next);
                    }
                })
            }}>
                {for LocaleCode::all().iter().map(|lc| html! {
                    <option value={lc.code()} selected={*lc == *locale}>{lc.label()}</option>
                })}
            </select>
        }
    };

    let basename = (*basename).clone().map(AttrValue::from);

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <BrowserRouter basename={basename}>
                <RouteTracker />
                <AppShell
                    theme={*theme}
                    on_toggle_theme={toggle_theme}
                    locale_selector={locale_selector}
                    nav={nav_labels}
                >
                    <Switch<Route> render={switch} />
                </AppShell>
            </BrowserRouter>
        </ContextProvider<TranslationBundle>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomeView /> },
        Route::Profile => html! { <ProfileView /> },
        Route::Subscriptions => html! { <SubscriptionsView /> },
        Route::Calendar => html! { <CalendarView /> },
        Route::Macros => html! { <MacrosView /> },
        Route::Chatbot => html! { <ChatbotView /> },
        Route::TrainerDashboard => html! { <TrainerDashboardView /> },
        Route::NotFound => html! { <NotFoundView /> },
    }
}

/// Logs each route change and mirrors it into the document title.
#[function_component(RouteTracker)]
fn route_tracker() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(crate::i18n::DEFAULT_LOCALE));
    use_effect_with_deps(
        move |(route, bundle)| {
            console::info!("route changed", route.name(), route.path());
            let brand = bundle.text("shell.brand", "Trainer");
            let label = bundle.text(route.label_key(), route.name());
            document().set_title(&format!("{label} · {brand}"));
            || ()
        },
        (route, bundle),
    );
    Html::default()
}

fn apply_theme(theme: ThemeMode) {
    if let Some(document) = window().document() {
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
    }
}

fn apply_language(locale: LocaleCode) {
    if let Some(root) = window().document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("lang", locale.code());
    }
}

/// Mount the router and the app shell onto `#root`, or `<body>` when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<TrainerApp>::with_root(root).render();
    } else {
        yew::Renderer::<TrainerApp>::new().render();
    }
}
