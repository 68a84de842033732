use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use tienda_auth::{check_access, Access, Role};

use crate::session::{now_secs, BrowserStore};

/// Route wrapper around the access guard. Children render only once a
/// client-side evaluation has granted access; until then the
/// server-rendered shell shows a spinner, so storage is never touched
/// during SSR.
///
/// An empty `allowed` set requires authentication only; a non-empty set
/// additionally requires the session role to be a member.
#[component]
pub fn Guarded(
    #[prop(optional)] allowed: Vec<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let location = use_location();

    #[allow(unused_variables)]
    let (outcome, setOutcome) = signal(Option::<Access>::None);

    #[cfg(feature = "hydrate")]
    {
        let allowed = allowed.clone();
        let pathname = location.pathname;
        // Re-runs on every navigation that lands on this wrapper; the
        // decision is recomputed fresh each time, never cached.
        Effect::new(move |_| {
            let _ = pathname.get();
            let decision = check_access(&BrowserStore, &allowed, now_secs());
            setOutcome.set(Some(decision));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = allowed;

    move || match outcome.get() {
        None => view! {
            <div class="loading">
                <div class="spinner"></div>
            </div>
        }
        .into_any(),
        Some(Access::Granted) => children().into_any(),
        // Authenticated but not authorized for this area: back to the
        // neutral landing, not to login.
        Some(Access::ForbiddenRole) => view! { <Redirect path="/dashboard" /> }.into_any(),
        Some(Access::MissingCredential) | Some(Access::ExpiredCredential) => {
            let from = location.pathname.get_untracked();
            view! { <Redirect path=format!("/login?from={from}") /> }.into_any()
        }
    }
}
