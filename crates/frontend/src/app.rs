use crate::domain::a001_travel_chat::ui::widget::TravelChatWidget;
use crate::layout::Shell;
use crate::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    view! {
        <Shell>
            <TravelChatWidget config=config.chat />
        </Shell>
    }
}
