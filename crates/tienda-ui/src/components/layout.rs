use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::session::{current_role, current_user};

/// Dashboard chrome: role-aware header, content area, footer. Always
/// rendered behind a [`Guarded`](crate::components::protected::Guarded)
/// wrapper, so by the time this runs the session is known to exist.
#[component]
pub fn DashboardLayout(children: ChildrenFn) -> impl IntoView {
    let role = current_role();
    let name = current_user()
        .map(|u| u.username)
        .unwrap_or_else(|| "Usuario".to_string());

    view! {
        <div class="app-shell">
            <Header role=role name=name />
            <main class="main-content">{children()}</main>
            <Footer />
        </div>
    }
}
