use leptos::prelude::*;

use crate::state::filter::{FilterForm, FilterQuery};

const DEGREE_OPTIONS: [&str; 5] = ["High School", "Associate", "Bachelor", "Master", "PhD"];

#[component]
pub fn FilterBar(
    #[prop(into)] on_filter: Callback<FilterQuery>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(FilterForm::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(query) = form.try_update(|f| f.submit()) {
            on_filter.run(query);
        }
    };

    let clear = move |_| {
        form.update(|f| {
            f.clear();
        });
        on_clear.run(());
    };

    view! {
        <form class="filter-bar" on:submit=submit>
            <label>
                "Keyword"
                <input
                    type="text"
                    placeholder="Name, occupation..."
                    prop:value=move || form.with(|f| f.keyword().to_string())
                    on:input=move |ev| form.update(|f| f.set_keyword(event_target_value(&ev)))
                />
            </label>
            <label>
                "City"
                <input
                    type="text"
                    placeholder="City"
                    prop:value=move || form.with(|f| f.city().to_string())
                    on:input=move |ev| form.update(|f| f.set_city(event_target_value(&ev)))
                />
            </label>
            <label>
                "Degree"
                <select
                    prop:value=move || form.with(|f| f.degree().to_string())
                    on:change=move |ev| form.update(|f| f.set_degree(event_target_value(&ev)))
                >
                    <option value="">"Any"</option>
                    {DEGREE_OPTIONS
                        .into_iter()
                        .map(|degree| view! { <option value=degree>{degree}</option> })
                        .collect_view()}
                </select>
            </label>
            <label>
                "Skill"
                <input
                    type="text"
                    placeholder="Skill"
                    prop:value=move || form.with(|f| f.skill().to_string())
                    on:input=move |ev| form.update(|f| f.set_skill(event_target_value(&ev)))
                />
            </label>
            <label>
                "Min. experience (years)"
                <input
                    type="number"
                    min="0"
                    placeholder="0"
                    prop:value=move || form.with(|f| f.min_exp().to_string())
                    on:input=move |ev| form.update(|f| f.set_min_exp(event_target_value(&ev)))
                />
            </label>
            <button type="submit" class="button">"Filter"</button>
            <button type="button" class="button button-outline" on:click=clear>
                "Clear All"
            </button>
        </form>
    }
}
