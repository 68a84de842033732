use leptos::prelude::*;
use leptos_router::components::Redirect;

/// `/dashboard` index: forwards each role to its own panel. COMUN is
/// the fallback for a session with no recognizable role claim, matching
/// the closed-set contract — the role areas themselves still enforce
/// membership.
#[component]
pub fn DashboardRedirect() -> impl IntoView {
    #[allow(unused_variables)]
    let (target, setTarget) = signal(Option::<String>::None);

    #[cfg(feature = "hydrate")]
    {
        use crate::session::current_role;

        let path = current_role()
            .map(|role| role.home_path().to_string())
            .unwrap_or_else(|| "/dashboard/comun".to_string());
        setTarget.set(Some(path));
    }

    move || target.get().map(|path| view! { <Redirect path=path /> })
}
