use crate::auth::use_app;
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app();
    let display_name = move || {
        ctx.session
            .with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default())
    };

    // 已登录用户访问 /about 会被送回首页，只对访客显示
    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <Link to="/home" class="btn btn-ghost text-xl">"Jam-Date"</Link>
                <Show
                    when=move || ctx.session.with(|s| s.is_authenticated())
                    fallback=|| view! { <Link to="/about" class="btn btn-ghost btn-sm">"About"</Link> }
                >
                    <Link to="/profile" class="btn btn-ghost btn-sm">"My profile"</Link>
                    <Link to="/profiles/favourites" class="btn btn-ghost btn-sm">"Favourites"</Link>
                    <Link to="/reports" class="btn btn-ghost btn-sm">"Reports"</Link>
                </Show>
            </div>
            <Show when=move || ctx.session.with(|s| s.is_authenticated())>
                <div class="flex-none gap-2">
                    <span class="badge badge-neutral hidden md:inline-flex">{display_name}</span>
                    <button on:click=move |_| ctx.logout() class="btn btn-outline btn-error btn-sm">
                        "Log out"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// 带导航栏的页面骨架
#[component]
pub fn Page(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <NavBar />
                {children()}
            </div>
        </div>
    }
}
