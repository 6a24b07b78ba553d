//! Jam-Date 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web`: 核心库 trait 的浏览器实现与路由服务
//! - `auth`: 应用上下文，把核心 store 桥接成信号
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod common;
    pub mod favourite_button;
    pub mod home;
    pub mod login;
    pub mod nav;
    pub mod profile;
    pub mod profile_form;
    pub mod register;
    pub mod reports;
}

pub(crate) mod web;

use crate::auth::AppContext;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::nav::Page;
use crate::components::profile::{FavouritesPage, MyProfilePage, ProfileDetailPage, UserDetailPage};
use crate::components::profile_form::ProfileFormPage;
use crate::components::register::RegisterPage;
use crate::components::reports::ReportsPage;

use jamdate::route::AppRoute;
use leptos::prelude::*;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Profile => view! { <MyProfilePage /> }.into_any(),
        AppRoute::ProfileCreate => view! { <ProfileFormPage profile_id=None /> }.into_any(),
        AppRoute::ProfileEdit(id) => view! { <ProfileFormPage profile_id=Some(id) /> }.into_any(),
        AppRoute::ProfileDetail(id) => view! { <ProfileDetailPage profile_id=id /> }.into_any(),
        AppRoute::Favourites => view! { <FavouritesPage /> }.into_any(),
        AppRoute::Reports => view! { <ReportsPage /> }.into_any(),
        AppRoute::UserDetail(id) => view! { <UserDetailPage user_id=id /> }.into_any(),
        AppRoute::About => view! {
            <Page>
                <div class="prose">
                    <h1>"About Jam-Date"</h1>
                    <p>"Find people who share your taste in food, colour and school subjects."</p>
                </div>
            </Page>
        }
        .into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 装配核心库并从 LocalStorage 恢复会话
    let ctx = AppContext::new();
    provide_context(ctx);

    // 2. 获取认证状态信号，用于注入路由服务
    let is_authenticated = ctx.is_authenticated_signal();

    view! {
        // 3. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
