use crate::auth::use_app;
use crate::components::common::{ErrorAlert, ProfileCard, Spinner, UserList, error_text};
use crate::components::favourite_button::FavouriteButton;
use crate::components::nav::Page;
use jamdate_shared::Profile;
use jamdate_shared::protocol::SearchQuery;
use leptos::prelude::*;

const SEARCH_FIELDS: [(&str, &str); 4] = [
    ("name", "Name"),
    ("birth_year", "Birth year"),
    ("sex", "Sex"),
    ("race", "Race"),
];

fn profile_grid(profiles: Vec<Profile>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
            {profiles
                .into_iter()
                .map(|profile| {
                    let target = profile.user_id();
                    view! {
                        <ProfileCard profile=profile>
                            {target.map(|id| view! { <FavouriteButton profile_user_id=id /> })}
                        </ProfileCard>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app();

    ctx.spawn(|app| async move {
        app.profiles.load_last_profiles(None).await;
        app.profiles.load_top_favourites(None).await;
    });

    let (query, set_query) = signal(SearchQuery::new());
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // 空字段不作为搜索条件
        let params: SearchQuery = query
            .get_untracked()
            .into_iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .collect();
        ctx.spawn(move |app| async move {
            app.profiles.search_profiles(&params).await;
        });
    };

    let state = ctx.profiles;
    let error = Signal::derive(move || state.with(|s| s.error.as_ref().map(error_text)));

    view! {
        <Page>
            <ErrorAlert message=error />

            <section class="space-y-4">
                <h2 class="text-2xl font-bold">"Newest profiles"</h2>
                <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <Spinner /> }>
                    {move || profile_grid(state.with(|s| s.last_profiles.clone()))}
                </Show>
            </section>

            <section class="space-y-4">
                <h2 class="text-2xl font-bold">"Search"</h2>
                <form class="flex flex-wrap gap-2" on:submit=on_search>
                    {SEARCH_FIELDS
                        .into_iter()
                        .map(|(key, label)| {
                            view! {
                                <input
                                    type="text"
                                    placeholder=label
                                    class="input input-bordered input-sm"
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        set_query.update(|q| {
                                            q.insert(key.to_string(), value);
                                        });
                                    }
                                />
                            }
                        })
                        .collect_view()}
                    <button class="btn btn-primary btn-sm">"Search"</button>
                </form>
                {move || profile_grid(state.with(|s| s.search_results.clone()))}
            </section>

            <section class="space-y-4">
                <h2 class="text-2xl font-bold">"Most favourited"</h2>
                {move || view! { <UserList users=state.with(|s| s.top_favourites.clone()) /> }}
            </section>
        </Page>
    }
}
