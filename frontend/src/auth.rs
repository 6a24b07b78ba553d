//! 应用上下文
//!
//! 持有核心库装配好的 store，并把它们的可观察状态桥接成 Leptos 信号。
//! 路由服务只通过注入的认证信号感知登录状态。

use crate::web::{BrowserStorage, FetchHttpClient, TimeoutScheduler};
use jamdate::ClientConfig;
use jamdate::JamDate;
use jamdate::session::Session;
use jamdate::stores::favourite::FeedbackMap;
use jamdate::stores::{ProfileState, ReportState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::rc::Rc;

pub type Client = JamDate<FetchHttpClient, BrowserStorage, TimeoutScheduler>;

/// 应用上下文
///
/// 所有字段都是 Copy 的句柄，可以随意移动进闭包。
#[derive(Clone, Copy)]
pub struct AppContext {
    app: StoredValue<Rc<Client>, LocalStorage>,
    pub session: ReadSignal<Session>,
    pub profiles: ReadSignal<ProfileState>,
    pub favourites: ReadSignal<FeedbackMap>,
    pub reports: ReadSignal<ReportState>,
}

impl AppContext {
    /// 装配核心库并恢复会话
    pub fn new() -> Self {
        let app = Rc::new(JamDate::new(
            FetchHttpClient,
            BrowserStorage,
            TimeoutScheduler,
            &ClientConfig::from_env(),
        ));

        let (session, set_session) = signal(app.session.handle().snapshot());
        app.session
            .handle()
            .subscribe(move |s| set_session.set(s.clone()));

        let (profiles, set_profiles) = signal(app.profiles.snapshot());
        app.profiles
            .state()
            .subscribe(move |s| set_profiles.set(s.clone()));

        let (favourites, set_favourites) = signal(FeedbackMap::new());
        app.favourites
            .subscribe(move |m| set_favourites.set(m.clone()));

        let (reports, set_reports) = signal(app.reports.snapshot());
        app.reports
            .state()
            .subscribe(move |s| set_reports.set(s.clone()));

        Self {
            app: StoredValue::new_local(app),
            session,
            profiles,
            favourites,
            reports,
        }
    }

    pub fn app(&self) -> Rc<Client> {
        self.app.get_value()
    }

    /// 在后台执行一个异步动作
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(Rc<Client>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(action(self.app()));
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.get().is_authenticated())
    }

    pub fn logout(&self) {
        // 导航由路由服务监听认证状态变化后自动处理
        self.app().session.logout();
    }
}

/// 从 Context 获取应用上下文
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
