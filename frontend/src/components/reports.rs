use crate::auth::use_app;
use crate::components::common::{ErrorAlert, Spinner, error_text, field};
use crate::components::nav::Page;
use jamdate_shared::protocol::ReportQuery;
use jamdate_shared::{ReportSortField, SortOrder};
use leptos::prelude::*;

fn parse_sort(value: &str) -> Option<ReportSortField> {
    match value {
        "created_at" => Some(ReportSortField::CreatedAt),
        "reporter_name" => Some(ReportSortField::ReporterName),
        "reported_user_name" => Some(ReportSortField::ReportedUserName),
        "reason" => Some(ReportSortField::Reason),
        _ => None,
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let ctx = use_app();
    let (query, set_query) = signal(ReportQuery::default());

    // 排序条件变化时重新加载
    Effect::new(move |_| {
        let query = query.get();
        ctx.spawn(move |app| async move {
            app.reports.load_reports(query).await;
        });
    });

    let state = ctx.reports;
    let error = Signal::derive(move || state.with(|s| s.error.as_ref().map(error_text)));

    view! {
        <Page>
            <div class="flex items-center gap-4">
                <h1 class="text-2xl font-bold flex-1">"Reports"</h1>
                <select
                    class="select select-bordered select-sm"
                    on:change=move |ev| {
                        let sort_by = parse_sort(&event_target_value(&ev));
                        set_query.update(|q| q.sort_by = sort_by);
                    }
                >
                    <option value="">"Default order"</option>
                    <option value="created_at">"Date"</option>
                    <option value="reporter_name">"Reporter"</option>
                    <option value="reported_user_name">"Reported user"</option>
                    <option value="reason">"Reason"</option>
                </select>
                <select
                    class="select select-bordered select-sm"
                    on:change=move |ev| {
                        let order = match event_target_value(&ev).as_str() {
                            "asc" => Some(SortOrder::Asc),
                            "desc" => Some(SortOrder::Desc),
                            _ => None,
                        };
                        set_query.update(|q| q.order = order);
                    }
                >
                    <option value="">"-"</option>
                    <option value="desc">"Descending"</option>
                    <option value="asc">"Ascending"</option>
                </select>
            </div>
            <ErrorAlert message=error />
            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <Spinner /> }>
                <table class="table bg-base-100 rounded-box">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Reporter"</th>
                            <th>"Reported user"</th>
                            <th>"Reason"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            state
                                .with(|s| s.reports.clone())
                                .into_iter()
                                .map(|report| {
                                    let raw = report.raw().clone();
                                    view! {
                                        <tr>
                                            <td>{field(&raw, "created_at")}</td>
                                            <td>{field(&raw, "reporter_name")}</td>
                                            <td>{field(&raw, "reported_user_name")}</td>
                                            <td>{field(&raw, "reason")}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </Page>
    }
}
