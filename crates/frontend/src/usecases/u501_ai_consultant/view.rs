use super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::usecases::u501_ai_consultant::{
    answer_or_fallback, greeting, package_context, system_instruction, ChatMessage,
    GenerateContentRequest,
};
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Floating "Konsultan Berkah" chat widget
#[component]
pub fn AiConsultant() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let is_open = RwSignal::new(false);
    let messages = RwSignal::new(vec![greeting(&ctx.agency_name_untracked())]);
    let input = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);
    let chat_end = NodeRef::<Div>::new();

    Effect::new(move |_| {
        messages.track();
        is_loading.track();
        if let Some(el) = chat_end.get() {
            el.scroll_into_view();
        }
    });

    let send = move || {
        let question = input.get_untracked().trim().to_string();
        if question.is_empty() || is_loading.get_untracked() {
            return;
        }
        input.set(String::new());
        messages.update(|m| m.push(ChatMessage::user(question.clone())));
        is_loading.set(true);

        let agency = ctx.agency_name_untracked();
        let catalogue = ctx.registry.with_untracked(|r| package_context(&r.packages));
        let request = GenerateContentRequest::ask(system_instruction(&agency, &catalogue), &question);

        spawn_local(async move {
            let result = api::ask(request).await;
            if let Err(e) = &result {
                log::error!("AI consultant: {}", e);
            }
            messages.update(|m| m.push(ChatMessage::model(answer_or_fallback(result))));
            is_loading.set(false);
        });
    };

    view! {
        <div class="ai-consultant no-print">
            <Show
                when=move || is_open.get()
                fallback=move || view! {
                    <button class="ai-consultant__toggle" on:click=move |_| is_open.set(true)>
                        <span class="ai-consultant__dot"></span>
                        {icon("chat")}
                    </button>
                }
            >
                <div class="ai-consultant__panel">
                    <div class="ai-consultant__header">
                        <div class="ai-consultant__brand">
                            <div class="ai-consultant__avatar">"AI"</div>
                            <div>
                                <h4>"Konsultan Berkah"</h4>
                                <p class="ai-consultant__status">"Online"</p>
                            </div>
                        </div>
                        <button class="ai-consultant__close" on:click=move |_| is_open.set(false)>
                            {icon("x")}
                        </button>
                    </div>

                    <div class="ai-consultant__messages">
                        {move || {
                            messages
                                .get()
                                .into_iter()
                                .map(|msg| {
                                    let row_class = if msg.is_user() { "chat-row chat-row--user" } else { "chat-row" };
                                    let bubble_class = if msg.is_user() { "chat-bubble chat-bubble--user" } else { "chat-bubble" };
                                    view! {
                                        <div class=row_class>
                                            <div class=bubble_class>{msg.text}</div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                        <Show when=move || is_loading.get()>
                            <div class="chat-row">
                                <div class="chat-bubble chat-typing">
                                    <span></span>
                                    <span></span>
                                    <span></span>
                                </div>
                            </div>
                        </Show>
                        <div node_ref=chat_end></div>
                    </div>

                    <div class="ai-consultant__input">
                        <input
                            type="text"
                            placeholder="Tanya tentang Umrah..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    send();
                                }
                            }
                        />
                        <button
                            class="ai-consultant__send"
                            disabled=move || is_loading.get()
                            on:click=move |_| send()
                        >
                            {icon("send")}
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
