use crate::auth::use_app;
use crate::components::common::{ErrorAlert, error_text};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app();
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_error_msg.set(None);

        ctx.spawn(move |app| async move {
            let result = app
                .session
                .register(
                    &username.get_untracked(),
                    &password.get_untracked(),
                    &name.get_untracked(),
                    &email.get_untracked(),
                )
                .await;
            match result {
                Ok(_) => router.navigate("/login"),
                Err(e) => set_error_msg.set(Some(error_text(&e))),
            }
            set_is_submitting.set(false);
        });
    };

    let input = move |id: &'static str,
                      label: &'static str,
                      kind: &'static str,
                      value: ReadSignal<String>,
                      set: WriteSignal<String>| {
        view! {
            <div class="form-control">
                <label class="label" for=id>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id=id
                    type=kind
                    on:input=move |ev| set.set(event_target_value(&ev))
                    prop:value=value
                    class="input input-bordered"
                    required
                />
            </div>
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Create an account"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error_msg />
                        {input("username", "Username", "text", username, set_username)}
                        {input("name", "Full name", "text", name, set_name)}
                        {input("email", "Email", "email", email, set_email)}
                        {input("password", "Password", "password", password, set_password)}
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                "Register"
                            </button>
                        </div>
                        <p class="text-sm text-center">
                            "Already registered? " <Link to="/login" class="link">"Sign in"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
