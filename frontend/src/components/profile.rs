use crate::auth::use_app;
use crate::components::common::{ErrorAlert, ProfileCard, Spinner, UserList, error_text, field};
use crate::components::favourite_button::FavouriteButton;
use crate::components::nav::Page;
use crate::web::router::Link;
use jamdate_shared::UserId;
use leptos::prelude::*;

const DETAIL_FIELDS: [(&str, &str); 10] = [
    ("parish", "Parish"),
    ("biography", "Biography"),
    ("sex", "Sex"),
    ("race", "Race"),
    ("birth_year", "Birth year"),
    ("height", "Height"),
    ("fav_cuisine", "Favourite cuisine"),
    ("fav_colour", "Favourite colour"),
    ("fav_school_subject", "Favourite subject"),
    ("family_oriented", "Family oriented"),
];

fn detail_table(raw: serde_json::Value) -> impl IntoView {
    view! {
        <table class="table">
            <tbody>
                {DETAIL_FIELDS
                    .into_iter()
                    .map(|(key, label)| {
                        view! {
                            <tr>
                                <th>{label}</th>
                                <td>{field(&raw, key)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn ReportForm(reported_user_id: UserId) -> impl IntoView {
    let ctx = use_app();
    let (reason, set_reason) = signal(String::new());
    let (sent, set_sent) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = reason.get_untracked();
        ctx.spawn(move |app| async move {
            if app.reports.submit_report(reported_user_id, &text).await {
                set_sent.set(true);
                set_reason.set(String::new());
            }
        });
    };

    let error = Signal::derive(move || {
        ctx.reports
            .with(|s| s.error.as_ref().map(error_text))
    });

    view! {
        <form class="flex flex-col gap-2" on:submit=on_submit>
            <ErrorAlert message=error />
            <Show when=move || sent.get()>
                <div class="alert alert-success text-sm py-2">"Report submitted"</div>
            </Show>
            <textarea
                class="textarea textarea-bordered"
                placeholder="Why are you reporting this user?"
                on:input=move |ev| set_reason.set(event_target_value(&ev))
                prop:value=reason
                required
            ></textarea>
            <button class="btn btn-warning btn-sm self-end">"Report"</button>
        </form>
    }
}

#[component]
pub fn ProfileDetailPage(profile_id: i64) -> impl IntoView {
    let ctx = use_app();
    ctx.spawn(move |app| async move {
        app.profiles.load_profile_details(profile_id).await;
        app.profiles.load_matches(profile_id).await;
    });

    let state = ctx.profiles;
    let error = Signal::derive(move || state.with(|s| s.error.as_ref().map(error_text)));
    let own_id = move || ctx.session.with(|s| s.user().map(|u| u.id));

    view! {
        <Page>
            <ErrorAlert message=error />
            {move || {
                state
                    .with(|s| s.profile_details.clone())
                    .filter(|p| p.id() == Some(profile_id))
                    .map(|profile| {
                        let owner = profile.user_id();
                        let raw = profile.raw().clone();
                        let is_own = owner.is_some() && owner == own_id();
                        view! {
                            <div class="card bg-base-100 shadow-xl">
                                <div class="card-body">
                                    <h1 class="card-title text-3xl">{field(&raw, "description")}</h1>
                                    {detail_table(raw)}
                                    <div class="card-actions justify-end">
                                        {is_own.then(|| view! {
                                            <Link to=format!("/profiles/{}/edit", profile_id) class="btn btn-sm">
                                                "Edit"
                                            </Link>
                                        })}
                                        {owner.filter(|_| !is_own).map(|id| view! {
                                            <FavouriteButton profile_user_id=id />
                                        })}
                                    </div>
                                    {owner.filter(|_| !is_own).map(|id| view! { <ReportForm reported_user_id=id /> })}
                                </div>
                            </div>
                        }
                    })
            }}

            <section class="space-y-4">
                <h2 class="text-2xl font-bold">"Matches"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {move || {
                        state
                            .with(|s| s.matches.clone())
                            .into_iter()
                            .map(|p| view! { <ProfileCard profile=p /> })
                            .collect_view()
                    }}
                </div>
            </section>
        </Page>
    }
}

#[component]
pub fn MyProfilePage() -> impl IntoView {
    let ctx = use_app();
    if let Some(user_id) = ctx.session.with_untracked(|s| s.user().map(|u| u.id)) {
        ctx.spawn(move |app| async move {
            app.profiles.load_user_details(user_id).await;
        });
    }

    let state = ctx.profiles;

    view! {
        <Page>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    {move || ctx.session.with(|s| s.user().cloned()).map(|user| view! {
                        <h1 class="card-title text-3xl">{user.name}</h1>
                        <p class="text-base-content/70">"@" {user.username}</p>
                    })}
                    {move || state.with(|s| s.user_details.clone()).map(|details| {
                        let raw = details.raw().clone();
                        view! { <p>{field(&raw, "email")}</p> }
                    })}
                    <div class="card-actions justify-end">
                        <Link to="/profiles/new" class="btn btn-primary btn-sm">"Create a profile"</Link>
                    </div>
                </div>
            </div>
        </Page>
    }
}

#[component]
pub fn UserDetailPage(user_id: UserId) -> impl IntoView {
    let ctx = use_app();
    ctx.spawn(move |app| async move {
        app.profiles.load_user_details(user_id).await;
    });

    let state = ctx.profiles;
    let error = Signal::derive(move || state.with(|s| s.error.as_ref().map(error_text)));

    view! {
        <Page>
            <ErrorAlert message=error />
            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <Spinner /> }>
                {move || {
                    state
                        .with(|s| s.user_details.clone())
                        .filter(|u| u.id() == Some(user_id))
                        .map(|user| {
                            let raw = user.raw().clone();
                            view! {
                                <div class="card bg-base-100 shadow-xl">
                                    <div class="card-body">
                                        <h1 class="card-title text-3xl">{field(&raw, "name")}</h1>
                                        <p class="text-base-content/70">"@" {field(&raw, "username")}</p>
                                        <div class="card-actions justify-end">
                                            <FavouriteButton profile_user_id=user_id />
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>
        </Page>
    }
}

#[component]
pub fn FavouritesPage() -> impl IntoView {
    let ctx = use_app();
    if let Some(user_id) = ctx.session.with_untracked(|s| s.user().map(|u| u.id)) {
        ctx.spawn(move |app| async move {
            app.profiles.load_favourites(user_id).await;
        });
    }

    let state = ctx.profiles;
    let error = Signal::derive(move || state.with(|s| s.error.as_ref().map(error_text)));

    view! {
        <Page>
            <h1 class="text-2xl font-bold">"My favourites"</h1>
            <ErrorAlert message=error />
            {move || view! { <UserList users=state.with(|s| s.favourites.clone()) /> }}
        </Page>
    }
}
