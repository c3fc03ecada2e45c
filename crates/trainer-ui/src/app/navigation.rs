//! Programmatic navigation by route name or location path.

use crate::core::routes::{Route, resolve};
use gloo::console;
use yew_router::prelude::Navigator;

/// Push the route registered under `name`. Unknown names are logged and ignored.
pub(crate) fn navigate_by_name(navigator: &Navigator, name: &str) {
    match Route::from_name(name) {
        Ok(route) => navigator.push(&route),
        Err(err) => console::warn!("navigation rejected", err.to_string()),
    }
}

/// Push the route declared for `path`, or the fallback view when none is.
pub(crate) fn navigate_by_path(navigator: &Navigator, path: &str) {
    let route = resolve(path).unwrap_or(Route::NotFound);
    navigator.push(&route);
}
