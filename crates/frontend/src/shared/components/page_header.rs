use leptos::prelude::*;

/// Heading of the back-office pages (admin, payments, reports).
///
/// The subtitle may be reactive, e.g. when it mentions the agency name.
/// Children land on the right: tab lists, action buttons.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                <p class="page-header__subtitle">{move || subtitle.get().unwrap_or_default()}</p>
            </div>
            {children.map(|c| view! { <div class="page-header__actions">{c()}</div> })}
        </header>
    }
}
