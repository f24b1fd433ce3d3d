use leptos::prelude::*;

/// Page shell: full-viewport background with a centred card.
///
/// ```text
/// +------------------------------------------+
/// |            (gradient backdrop)           |
/// |    +--------------------------------+    |
/// |    |           children             |    |
/// |    +--------------------------------+    |
/// +------------------------------------------+
/// ```
///
/// Holds no state of its own.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div style="min-height: 100vh; width: 100vw; box-sizing: border-box; display: flex; align-items: center; justify-content: center; padding: 16px; background: linear-gradient(to bottom right, #eff6ff, #e0e7ff);">
            <div style="width: 100%; max-width: 896px; height: calc(100vh - 32px); box-sizing: border-box; display: flex; flex-direction: column; padding: 24px; background: #ffffff; border-radius: 12px; box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);">
                {children()}
            </div>
        </div>
    }
}
