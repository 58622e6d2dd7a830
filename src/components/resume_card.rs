use leptos::prelude::*;

use crate::api::client::ResumeApi;
use crate::models::resume::Resume;

/// One resume record in card form. Pure function of its props; the only
/// behavior is the delete callback.
#[component]
pub fn ResumeCard(resume: Resume, #[prop(into)] on_delete: Callback<i64>) -> impl IntoView {
    let api = expect_context::<ResumeApi>();

    let badge_class = format!("badge {}", resume.status_class());
    // No PDF means no controls at all; a URL is never even built.
    let pdf_url = resume.has_pdf().then(|| api.pdf_url(&resume.pdf_path));

    let Resume {
        id,
        name,
        email,
        phone,
        occupation,
        city,
        exp_years,
        status,
        degrees,
        skills,
        ..
    } = resume;

    let experience = format!(
        "{exp_years} {}",
        if exp_years == 1 { "year" } else { "years" }
    );

    view! {
        <div class="resume-card">
            <div class="card-header">
                <h2>{name}</h2>
                <span class=badge_class>{status}</span>
            </div>
            <dl class="card-details">
                <dt>"Occupation"</dt>
                <dd>{occupation}</dd>
                <dt>"Experience"</dt>
                <dd>{experience}</dd>
                <dt>"City"</dt>
                <dd>{city}</dd>
                <dt>"Email"</dt>
                <dd><a href=format!("mailto:{email}")>{email.clone()}</a></dd>
                <dt>"Phone"</dt>
                <dd><a href=format!("tel:{phone}")>{phone.clone()}</a></dd>
            </dl>
            {(!degrees.is_empty()).then(|| view! {
                <div class="card-section">
                    <h3>"Degrees"</h3>
                    <ul>
                        {degrees
                            .iter()
                            .map(|degree| view! {
                                <li>{format!("{} in {}", degree.degree_type, degree.degree_subject)}</li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            })}
            {(!skills.is_empty()).then(|| view! {
                <div class="card-section">
                    <h3>"Skills"</h3>
                    <ul class="skill-list">
                        {skills
                            .iter()
                            .map(|skill| view! { <li class="skill-chip">{skill.clone()}</li> })
                            .collect_view()}
                    </ul>
                </div>
            })}
            <div class="card-actions">
                {match pdf_url {
                    Some(url) => view! {
                        <span class="pdf-actions">
                            <a class="button" href=url.clone() target="_blank" rel="noopener noreferrer">
                                "View PDF"
                            </a>
                            <a class="button button-outline" href=url download>
                                "Download PDF"
                            </a>
                        </span>
                    }.into_any(),
                    None => view! {
                        <span class="no-pdf">"No PDF available"</span>
                    }.into_any(),
                }}
                <button class="button button-danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
