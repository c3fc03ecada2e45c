//! View components the router switches between.

use crate::app::navigation::{navigate_by_name, navigate_by_path};
use crate::core::routes::Route;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

const HOME_SHORTCUTS: [&str; 3] = ["Calendar", "Macros", "Chatbot"];

#[derive(Properties, PartialEq)]
struct ViewFrameProps {
    route: Route,
    #[prop_or_default]
    children: Children,
}

/// Shared page frame: eyebrow label, title and lead text keyed by route.
#[function_component(ViewFrame)]
fn view_frame(props: &ViewFrameProps) -> Html {
    let bundle = use_bundle();
    let key = view_key(props.route);
    html! {
        <section class={classes!("view", format!("view-{key}"))}>
            <div class="panel">
                <div class="panel-head">
                    <p class="eyebrow">{bundle.text(props.route.label_key(), props.route.name())}</p>
                    <h2>{bundle.text(&format!("views.{key}.title"), props.route.name())}</h2>
                    <p class="muted">{bundle.text(&format!("views.{key}.body"), "")}</p>
                </div>
                {for props.children.iter()}
            </div>
        </section>
    }
}

#[function_component(HomeView)]
pub(crate) fn home_view() -> Html {
    let bundle = use_bundle();
    let navigator = use_navigator();
    let shortcuts = HOME_SHORTCUTS.into_iter().map(|name| {
        let label = Route::from_name(name).map_or_else(
            |_| name.to_string(),
            |route| bundle.text(route.label_key(), name),
        );
        let onclick = {
            let navigator = navigator.clone();
            Callback::from(move |_| {
                if let Some(navigator) = navigator.as_ref() {
                    navigate_by_name(navigator, name);
                }
            })
        };
        html! { <button class="ghost" {onclick}>{label}</button> }
    });
    html! {
        <ViewFrame route={Route::Home}>
            <div class="shortcuts">
                <small>{bundle.text("views.home.shortcuts", "Shortcuts")}</small>
                {for shortcuts}
            </div>
        </ViewFrame>
    }
}

#[function_component(ProfileView)]
pub(crate) fn profile_view() -> Html {
    html! { <ViewFrame route={Route::Profile} /> }
}

#[function_component(SubscriptionsView)]
pub(crate) fn subscriptions_view() -> Html {
    html! { <ViewFrame route={Route::Subscriptions} /> }
}

#[function_component(CalendarView)]
pub(crate) fn calendar_view() -> Html {
    html! { <ViewFrame route={Route::Calendar} /> }
}

#[function_component(MacrosView)]
pub(crate) fn macros_view() -> Html {
    html! { <ViewFrame route={Route::Macros} /> }
}

#[function_component(ChatbotView)]
pub(crate) fn chatbot_view() -> Html {
    html! { <ViewFrame route={Route::Chatbot} /> }
}

#[function_component(TrainerDashboardView)]
pub(crate) fn trainer_dashboard_view() -> Html {
    html! { <ViewFrame route={Route::TrainerDashboard} /> }
}

#[function_component(NotFoundView)]
pub(crate) fn not_found_view() -> Html {
    let bundle = use_bundle();
    let navigator = use_navigator();
    let go_home = Callback::from(move |_| {
        if let Some(navigator) = navigator.as_ref() {
            navigate_by_path(navigator, Route::Home.path());
        }
    });
    html! {
        <ViewFrame route={Route::NotFound}>
            <button class="ghost" onclick={go_home}>{bundle.text("views.not_found.back", "Back to home")}</button>
        </ViewFrame>
    }
}

#[hook]
fn use_bundle() -> TranslationBundle {
    use_context::<TranslationBundle>().unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE))
}

const fn view_key(route: Route) -> &'static str {
    match route {
        Route::Home => "home",
        Route::Profile => "profile",
        Route::Subscriptions => "subscriptions",
        Route::Calendar => "calendar",
        Route::Macros => "macros",
        Route::Chatbot => "chatbot",
        Route::TrainerDashboard => "trainer_dashboard",
        Route::NotFound => "not_found",
    }
}
