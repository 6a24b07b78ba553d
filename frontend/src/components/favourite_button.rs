use crate::auth::use_app;
use jamdate_shared::UserId;
use leptos::prelude::*;

/// 收藏按钮，反馈状态来自收藏 store
#[component]
pub fn FavouriteButton(profile_user_id: UserId) -> impl IntoView {
    let ctx = use_app();
    let feedback = move || {
        ctx.favourites
            .with(|m| m.get(&profile_user_id).cloned().unwrap_or_default())
    };

    // 卸载时清掉反馈并取消待执行的重置
    on_cleanup(move || ctx.app().favourites.reset_fav_state(profile_user_id));

    let on_click = move |_| {
        ctx.spawn(move |app| async move {
            app.favourites.favourite_profile(profile_user_id).await;
        });
    };

    view! {
        <div class="flex items-center gap-2">
            <button
                class="btn btn-sm btn-secondary"
                disabled=move || feedback().loading
                on:click=on_click
            >
                {move || if feedback().loading { "Adding..." } else { "Favourite" }}
            </button>
            <Show when=move || feedback().success>
                <span class="text-success text-sm">"Added to favourites!"</span>
            </Show>
            <Show when=move || !feedback().error.is_empty()>
                <span class="text-error text-sm">{move || feedback().error}</span>
            </Show>
        </div>
    }
}
