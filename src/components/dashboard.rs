use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::client::ResumeApi;
use crate::components::filter_bar::FilterBar;
use crate::components::resume_card::ResumeCard;
use crate::components::stats_bar::StatsBar;
use crate::components::upload_form::UploadForm;
use crate::models::resume::Resume;
use crate::state::dashboard::DashboardStore;
use crate::state::filter::FilterQuery;

#[component]
pub fn Dashboard() -> impl IntoView {
    let api = expect_context::<ResumeApi>();
    let store = RwSignal::new(DashboardStore::default());
    let notice = RwSignal::new(None::<String>);

    // Load the full collection once at mount. On failure the store is left
    // alone and the error surfaces as a dismissible notice.
    {
        let api = api.clone();
        spawn_local(async move {
            match api.list_all().await {
                Ok(resumes) => store.update(|s| s.load(resumes)),
                Err(err) => {
                    tracing::error!("initial resume fetch failed: {err}");
                    notice.set(Some(format!("Could not load resumes: {err}")));
                }
            }
        });
    }

    let on_filter = Callback::new({
        let api = api.clone();
        move |query: FilterQuery| {
            let api = api.clone();
            let Some(generation) = store.try_update(|s| s.begin_filter()) else {
                return;
            };
            spawn_local(async move {
                match api.filter(&query).await {
                    Ok(resumes) => store.update(|s| {
                        s.apply_filter(generation, resumes);
                    }),
                    Err(err) => {
                        tracing::error!("filter fetch failed: {err}");
                        notice.set(Some(format!("Filter failed: {err}")));
                    }
                }
            });
        }
    });

    // Clear restores the full view from the authoritative set without a
    // round trip; any in-flight filter response is invalidated.
    let on_clear = Callback::new(move |()| store.update(|s| s.reset_view()));

    let on_upload = Callback::new(move |resume: Resume| store.update(|s| s.insert(resume)));

    let on_delete = Callback::new({
        let api = api.clone();
        move |id: i64| {
            let api = api.clone();
            spawn_local(async move {
                match api.delete(id).await {
                    Ok(()) => store.update(|s| s.remove(id)),
                    Err(err) => {
                        tracing::error!("delete failed for resume {id}: {err}");
                        notice.set(Some(format!("Delete failed: {err}")));
                    }
                }
            });
        }
    });

    view! {
        <div class="dashboard">
            <StatsBar store/>
            <div class="controls">
                <FilterBar on_filter=on_filter on_clear=on_clear/>
                <UploadForm on_success=on_upload/>
            </div>
            {move || notice.get().map(|message| view! {
                <div class="notice notice-error">
                    <span>{message}</span>
                    <button class="notice-dismiss" on:click=move |_| notice.set(None)>
                        "Dismiss"
                    </button>
                </div>
            })}
            <div class="card-grid">
                <For
                    each=move || store.with(|s| s.displayed().to_vec())
                    key=|resume| resume.id
                    children=move |resume: Resume| view! {
                        <ResumeCard resume on_delete=on_delete/>
                    }
                />
            </div>
            {move || store.with(|s| s.displayed().is_empty()).then(|| view! {
                <p class="empty-view">"No resumes to show."</p>
            })}
        </div>
    }
}
