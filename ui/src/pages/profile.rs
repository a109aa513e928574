use payloads::responses;
use ui_state::{PhotoActionKind, PhotoActionTracker};
use yew::prelude::*;

use crate::{
    components::PhotoUpload,
    get_api_client,
    hooks::use_profile,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub username: String,
}

#[function_component]
pub fn ProfilePage(props: &Props) -> Html {
    let profile_hook = use_profile(props.username.clone());

    let add_photo_mode = use_state(|| false);
    let tracker = use_state(PhotoActionTracker::default);
    // One busy flag shared by set-main and delete, so per-row loading
    // feedback is only exact while a single photo action is outstanding.
    let is_busy = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    let on_toggle_add_mode = {
        let add_photo_mode = add_photo_mode.clone();
        let tracker = tracker.clone();
        Callback::from(move |_| {
            add_photo_mode.set(!*add_photo_mode);
            tracker.set(tracker.reset());
        })
    };

    let on_uploaded = {
        let add_photo_mode = add_photo_mode.clone();
        let refetch = profile_hook.refetch.clone();
        Callback::from(move |_photo: responses::Photo| {
            add_photo_mode.set(false);
            refetch.emit(());
        })
    };

    // Shared driver for the two per-photo actions. The tracker refuses to
    // target the main photo, so a stale click on a disabled control stays
    // a no-op.
    let run_photo_action = {
        let tracker = tracker.clone();
        let is_busy = is_busy.clone();
        let error_message = error_message.clone();
        let refetch = profile_hook.refetch.clone();

        move |kind: PhotoActionKind, photo: responses::Photo| {
            let next = match tracker.begin(kind, &photo) {
                Some(next) => next,
                None => return,
            };
            tracker.set(next);

            let is_busy = is_busy.clone();
            let error_message = error_message.clone();
            let refetch = refetch.clone();

            yew::platform::spawn_local(async move {
                is_busy.set(true);
                error_message.set(None);

                let api_client = get_api_client();
                let result = match kind {
                    PhotoActionKind::SetMain => {
                        api_client.set_main_photo(&photo.id).await
                    }
                    PhotoActionKind::Delete => {
                        api_client.delete_photo(&photo.id).await
                    }
                };
                match result {
                    Ok(()) => refetch.emit(()),
                    Err(e) => error_message.set(Some(e.to_string())),
                }

                is_busy.set(false);
            });
        }
    };

    let on_set_main = {
        let run_photo_action = run_photo_action.clone();
        Callback::from(move |photo: responses::Photo| {
            run_photo_action(PhotoActionKind::SetMain, photo)
        })
    };

    let on_delete = Callback::from(move |photo: responses::Photo| {
        run_photo_action(PhotoActionKind::Delete, photo)
    });

    let api_client = get_api_client();

    profile_hook.render("profile", |profile, _, _| {
        html! {
            <div class="max-w-4xl mx-auto space-y-6">
                <div class="flex items-center gap-4">
                    <img
                        src={api_client.photo_src(profile.image.as_deref())}
                        alt={profile.display_name.clone()}
                        class="w-20 h-20 rounded-full object-cover
                               bg-neutral-100 dark:bg-neutral-700"
                    />
                    <div>
                        <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                            {&profile.display_name}
                        </h1>
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {format!("@{}", profile.username)}
                        </p>
                    </div>
                </div>

                <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md border
                            border-neutral-200 dark:border-neutral-700 p-4 space-y-4">
                    <div class="flex items-center justify-between">
                        <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                            {"Photos"}
                        </h2>
                        {if profile.is_current_user {
                            html! {
                                <button
                                    type="button"
                                    onclick={on_toggle_add_mode.clone()}
                                    class="px-3 py-2 rounded-md text-sm font-medium
                                           border border-neutral-300 dark:border-neutral-600
                                           text-neutral-700 dark:text-neutral-300
                                           hover:bg-neutral-50 dark:hover:bg-neutral-700"
                                >
                                    {if *add_photo_mode {
                                        "Cancel"
                                    } else {
                                        "Add Photo"
                                    }}
                                </button>
                            }
                        } else {
                            html! {}
                        }}
                    </div>

                    {if let Some(error) = &*error_message {
                        html! {
                            <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 border
                                        border-red-200 dark:border-red-800">
                                <p class="text-sm text-red-700 dark:text-red-400">
                                    {error}
                                </p>
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    {if *add_photo_mode {
                        html! {
                            <PhotoUpload on_uploaded={on_uploaded.clone()} />
                        }
                    } else if profile.photos.is_empty() {
                        html! {
                            <p class="text-center py-8 text-neutral-500 dark:text-neutral-400">
                                {"No photos yet."}
                            </p>
                        }
                    } else {
                        html! {
                            <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-5 gap-4">
                                {profile.photos.iter().map(|photo| {
                                    html! {
                                        <PhotoCard
                                            key={photo.id.to_string()}
                                            photo={photo.clone()}
                                            is_current_user={profile.is_current_user}
                                            set_main_loading={tracker.is_loading(
                                                PhotoActionKind::SetMain,
                                                &photo.id,
                                                *is_busy,
                                            )}
                                            delete_loading={tracker.is_loading(
                                                PhotoActionKind::Delete,
                                                &photo.id,
                                                *is_busy,
                                            )}
                                            on_set_main={on_set_main.clone()}
                                            on_delete={on_delete.clone()}
                                        />
                                    }
                                }).collect::<Html>()}
                            </div>
                        }
                    }}
                </div>
            </div>
        }
    })
}

#[derive(Properties, PartialEq)]
struct PhotoCardProps {
    photo: responses::Photo,
    is_current_user: bool,
    set_main_loading: bool,
    delete_loading: bool,
    on_set_main: Callback<responses::Photo>,
    on_delete: Callback<responses::Photo>,
}

#[function_component]
fn PhotoCard(props: &PhotoCardProps) -> Html {
    let api_client = get_api_client();
    let src = api_client.photo_src(Some(&props.photo.url));

    let on_set_main = {
        let on_set_main = props.on_set_main.clone();
        let photo = props.photo.clone();
        Callback::from(move |_| on_set_main.emit(photo.clone()))
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let photo = props.photo.clone();
        Callback::from(move |_| on_delete.emit(photo.clone()))
    };

    html! {
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow border
                    border-neutral-200 dark:border-neutral-700 overflow-hidden">
            <div class="aspect-square bg-neutral-100 dark:bg-neutral-700">
                <img
                    {src}
                    alt="Profile photo"
                    class="w-full h-full object-cover"
                />
            </div>
            {if props.is_current_user {
                html! {
                    <div class="flex">
                        <button
                            type="button"
                            onclick={on_set_main}
                            disabled={props.photo.is_main}
                            class="flex-1 px-2 py-1.5 text-xs font-medium
                                   text-green-700 dark:text-green-400
                                   hover:bg-green-50 dark:hover:bg-green-900/20
                                   disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            {if props.set_main_loading { "..." } else { "Main" }}
                        </button>
                        <button
                            type="button"
                            onclick={on_delete}
                            disabled={props.photo.is_main}
                            class="flex-1 px-2 py-1.5 text-xs font-medium
                                   text-red-600 dark:text-red-400
                                   hover:bg-red-50 dark:hover:bg-red-900/20
                                   disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            {if props.delete_loading { "..." } else { "Delete" }}
                        </button>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
