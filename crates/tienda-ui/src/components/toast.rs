use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
}

/// One visible notice at a time; a new push replaces the previous one
/// and restarts the dismiss timer.
#[derive(Clone, Copy)]
pub struct ToastContext {
    current: ReadSignal<Option<Toast>>,
    set_current: WriteSignal<Option<Toast>>,
}

impl ToastContext {
    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), ToastLevel::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message.into(), ToastLevel::Error);
    }

    fn push(&self, message: String, level: ToastLevel) {
        self.set_current.set(Some(Toast { message, level }));

        let setCurrent = self.set_current;
        set_timeout(
            move || setCurrent.set(None),
            std::time::Duration::from_secs(4),
        );
    }
}

/// Provides the toast context and renders the notice container. Place
/// once near the root of the app.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let (current, setCurrent) = signal(Option::<Toast>::None);

    let ctx = ToastContext {
        current,
        set_current: setCurrent,
    };
    provide_context(ctx);

    view! {
        {children()}
        <div class="toast-region">
            {move || {
                current
                    .get()
                    .map(|toast| {
                        let class = match toast.level {
                            ToastLevel::Success => "toast toast-success",
                            ToastLevel::Error => "toast toast-error",
                        };
                        view! { <div class=class>{toast.message}</div> }
                    })
            }}
        </div>
    }
}
