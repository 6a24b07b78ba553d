use crate::auth::use_app;
use crate::components::common::{ErrorAlert, error_text, field};
use crate::components::nav::Page;
use crate::web::router::use_router;
use leptos::prelude::*;
use std::collections::BTreeMap;

/// 资料字段，布尔值以 "true"/"false" 字符串提交
const PROFILE_FIELDS: [(&str, &str); 13] = [
    ("description", "Description"),
    ("parish", "Parish"),
    ("biography", "Biography"),
    ("sex", "Sex"),
    ("race", "Race"),
    ("birth_year", "Birth year"),
    ("height", "Height (inches)"),
    ("fav_cuisine", "Favourite cuisine"),
    ("fav_colour", "Favourite colour"),
    ("fav_school_subject", "Favourite school subject"),
    ("political", "Political (true/false)"),
    ("religious", "Religious (true/false)"),
    ("family_oriented", "Family oriented (true/false)"),
];

/// 创建或编辑资料，`profile_id` 为空时创建
#[component]
pub fn ProfileFormPage(profile_id: Option<i64>) -> impl IntoView {
    let ctx = use_app();
    let router = use_router();

    let (values, set_values) = signal(BTreeMap::<String, String>::new());
    let (is_submitting, set_is_submitting) = signal(false);

    // 编辑时用现有资料预填表单
    if let Some(id) = profile_id {
        ctx.spawn(move |app| async move {
            app.profiles.load_profile_details(id).await;
            if let Some(profile) = app.profiles.snapshot().profile_details {
                let raw = profile.raw();
                set_values.set(
                    PROFILE_FIELDS
                        .iter()
                        .map(|(key, _)| (key.to_string(), field(raw, key)))
                        .collect(),
                );
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        let data: serde_json::Map<String, serde_json::Value> = values
            .get_untracked()
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect();
        let data = serde_json::Value::Object(data);

        ctx.spawn(move |app| async move {
            let saved = match profile_id {
                Some(id) => app.profiles.update_profile(id, data).await,
                None => app.profiles.create_profile(data).await,
            };
            set_is_submitting.set(false);
            if saved {
                match profile_id {
                    Some(id) => router.navigate(&format!("/profiles/{}", id)),
                    None => router.navigate("/home"),
                }
            }
        });
    };

    let error = Signal::derive(move || {
        ctx.profiles
            .with(|s| s.error.as_ref().map(error_text))
    });
    let title = if profile_id.is_some() { "Edit profile" } else { "Create profile" };

    view! {
        <Page>
            <div class="card bg-base-100 shadow-xl max-w-2xl mx-auto">
                <form class="card-body" on:submit=on_submit>
                    <h1 class="card-title text-2xl">{title}</h1>
                    <ErrorAlert message=error />
                    {PROFILE_FIELDS
                        .into_iter()
                        .map(|(key, label)| {
                            view! {
                                <div class="form-control">
                                    <label class="label" for=key>
                                        <span class="label-text">{label}</span>
                                    </label>
                                    <input
                                        id=key
                                        type="text"
                                        class="input input-bordered"
                                        prop:value=move || values.with(|v| v.get(key).cloned().unwrap_or_default())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            set_values.update(|v| {
                                                v.insert(key.to_string(), value);
                                            });
                                        }
                                        required
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </Page>
    }
}
