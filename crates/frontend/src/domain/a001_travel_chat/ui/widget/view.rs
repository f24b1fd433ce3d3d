//! Travel Chat Widget - View Component

use super::view_model::TravelChatVm;
use crate::domain::a001_travel_chat::api::HttpChatBackend;
use crate::shared::config::ChatConfig;
use crate::shared::icons::icon;
use contracts::domain::a001_travel_chat::aggregate::Message;
use leptos::prelude::*;
use thaw::*;

const GREETING: &str = "한국여행에 대해 궁금하신점을 물어보세요 !\n\
Hello, please feel free to ask anything about traveling in Korea!\n\
韓国旅行についてご質問があればお気軽にどうぞ！";

/// thaw renders `Textarea` as a wrapper `<span>` around the real
/// `<textarea>`, so sizing has to target the inner element.
const INPUT_STYLE: &str = ".travel-chat-input { width: 100%; }\n\
.travel-chat-input .thaw-textarea__textarea { height: 4.5em; line-height: 1.5; resize: none; }";

#[component]
#[allow(non_snake_case)]
pub fn TravelChatWidget(config: ChatConfig) -> impl IntoView {
    let vm = TravelChatVm::new();
    let backend = HttpChatBackend::new(&config);
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    let handle_send = Callback::new(move |_| vm.submit(&backend));

    // Keep the newest entry (or the typing indicator) in view
    Effect::new(move |_| {
        vm.session.with(|s| (s.transcript().len(), s.is_loading()));
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let is_loading = Signal::derive(move || vm.is_loading());

    view! {
        <div style="height: 100%; display: flex; flex-direction: column;">
            <h1 style="font-size: 28px; font-weight: bold; text-align: center; margin-bottom: 24px;">
                "한국 여행 AI 가이드"
            </h1>

            // Messages area
            <div
                node_ref=messages_container_ref
                style="flex: 1; min-height: 0; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; margin-bottom: 16px; padding: 16px; background: var(--colorNeutralBackground2); border-radius: 8px;"
            >
                <Show when=move || vm.session.with(|s| s.transcript().is_empty())>
                    <div style="text-align: center; padding: 40px 0; white-space: pre-line; color: var(--colorNeutralForeground3);">
                        {GREETING}
                    </div>
                </Show>

                <For
                    each=move || vm.messages().into_iter().enumerate()
                    key=|entry: &(usize, Message)| entry.0
                    children=move |(_, msg): (usize, Message)| {
                        view! { <MessageBubble msg=msg /> }
                    }
                />

                <Show when=move || is_loading.get()>
                    <div style="align-self: flex-start; max-width: 70%; padding: 10px 14px; border-radius: 12px; background: var(--colorPaletteYellowBackground2);">
                        <span>"..."</span>
                        <span style="margin-left: 8px; font-size: 13px; opacity: 0.7;">"답변 생성 중"</span>
                    </div>
                </Show>
            </div>

            // Input area
            <Flex style="gap: 12px; align-items: flex-end; margin-bottom: 16px;">
                <div style="flex: 1;">
                    <style>{INPUT_STYLE}</style>
                    <Textarea
                        value=vm.draft
                        placeholder="한국 여행에 대해 궁금한 점을 입력하세요..."
                        class="travel-chat-input"
                        disabled=is_loading
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                handle_send.run(());
                            }
                        }
                    />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=is_loading
                    on_click=move |_| handle_send.run(())
                >
                    {icon("send")}
                    {move || if is_loading.get() { " 전송 중..." } else { " 한국 여행 질문하기" }}
                </Button>
            </Flex>

            <div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.export()
                >
                    {icon("download")}
                    " 대화내용 다운로드 (.txt)"
                </Button>
            </div>

            // Error display
            {move || {
                vm.error_text()
                    .map(|e| {
                        view! {
                            <p style="margin-top: 8px; text-align: center; font-size: 14px; color: var(--colorPaletteRedForeground1);">
                                {e}
                            </p>
                        }
                    })
            }}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn MessageBubble(msg: Message) -> impl IntoView {
    let is_user = msg.is_user();
    view! {
        <div
            style=if is_user {
                "align-self: flex-end; max-width: 70%;"
            } else {
                "align-self: flex-start; max-width: 70%;"
            }
        >
            <div
                style=if is_user {
                    "background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); padding: 10px 14px; border-radius: 12px 12px 0 12px;"
                } else {
                    "background: var(--colorPaletteYellowBackground2); border: 1px solid var(--colorPaletteYellowBorder1); padding: 10px 14px; border-radius: 12px 12px 12px 0;"
                }
            >
                <div style="white-space: pre-wrap; font-size: 14px;">{msg.text}</div>
            </div>
        </div>
    }
}
