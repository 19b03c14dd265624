use leptos::prelude::*;

use crate::shared::bubbles::spawn_bubbles;
use crate::system::pages::{AdminLoginPage, FacultyLoginPage};

/// Bubbles behind each login page, as on the server-rendered pages.
const BUBBLE_COUNT: u32 = 5;

fn is_faculty_path(path: &str) -> bool {
    path.starts_with("/faculty_login")
}

/// Root component. The server serves this bundle on both login routes, so
/// the page is picked from the current pathname; everything else stays on
/// the server side (dashboards are plain server-rendered pages).
#[component]
pub fn App() -> impl IntoView {
    spawn_bubbles(BUBBLE_COUNT);

    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();

    if is_faculty_path(&path) {
        view! { <FacultyLoginPage /> }.into_any()
    } else {
        view! { <AdminLoginPage /> }.into_any()
    }
}
