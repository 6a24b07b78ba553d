use crate::web::router::Link;
use jamdate::ApiError;
use jamdate_shared::{Profile, UserRecord};
use leptos::prelude::*;

/// 优先展示服务端给出的 message
pub fn error_text(error: &ApiError) -> String {
    error
        .server_message()
        .map(str::to_string)
        .unwrap_or_else(|| error.to_string())
}

/// 从原样透传的记录里读取一个可展示的字段
pub fn field(raw: &serde_json::Value, key: &str) -> String {
    match raw.get(key) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex justify-center py-8">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

#[component]
pub fn ErrorAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div role="alert" class="alert alert-error text-sm py-2">
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

#[component]
pub fn ProfileCard(profile: Profile, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let raw = profile.raw().clone();
    let href = profile
        .id()
        .map(|id| format!("/profiles/{}", id))
        .unwrap_or_else(|| "/home".to_string());

    view! {
        <div class="card bg-base-100 shadow-md">
            <div class="card-body">
                <h2 class="card-title">
                    <Link to=href>{field(&raw, "name")}</Link>
                </h2>
                <p class="text-sm text-base-content/70">{field(&raw, "parish")}</p>
                <p>{field(&raw, "description")}</p>
                <div class="card-actions justify-end">{children.map(|c| c())}</div>
            </div>
        </div>
    }
}

#[component]
pub fn UserList(users: Vec<UserRecord>) -> impl IntoView {
    view! {
        <ul class="menu bg-base-100 rounded-box">
            {users
                .into_iter()
                .map(|user| {
                    let raw = user.raw().clone();
                    let href = user
                        .id()
                        .map(|id| format!("/users/{}", id))
                        .unwrap_or_else(|| "/home".to_string());
                    view! {
                        <li>
                            <Link to=href>
                                {field(&raw, "name")}
                                <span class="badge badge-ghost">{field(&raw, "username")}</span>
                            </Link>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
