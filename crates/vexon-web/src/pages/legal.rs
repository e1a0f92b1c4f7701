//! Privacy Policy and Terms Pages

use leptos::prelude::*;

/// Legal entity named by both documents
const COMPANY: &str = "CogniveVex AI, 90 Broad St, New York, NY 10004, United States";

const PRIVACY: &[(&str, &str)] = &[
    ("Interpretation and Definitions", "Words with capitalized initials have meanings defined here. \"Personal Data\" is any information that relates to an identified or identifiable individual."),
    ("Collecting and Using Your Personal Data", "We collect the email address, name and usage data You provide or that Your device reports while using the Service."),
    ("Use of Your Personal Data", "Personal Data is used to provide and maintain the Service, manage Your account and contact You about it."),
    ("Retention and Transfer", "Personal Data is retained only as long as necessary and may be processed wherever the parties involved are located."),
    ("Delete Your Personal Data", "You may delete or ask Us to delete the Personal Data We have collected about You."),
    ("Disclosure and Security", "We disclose Personal Data when required by law and use commercially acceptable means to protect it."),
    ("Children's Privacy", "Our Service does not address anyone under the age of 13."),
];

const TERMS: &[(&str, &str)] = &[
    ("Interpretation and Definitions", "Words with capitalized initials have meanings defined here. \"Service\" refers to the Website."),
    ("Acknowledgment", "These Terms govern the use of the Service. By accessing the Service You agree to be bound by them."),
    ("Links to Other Websites", "The Service may link to third-party sites not controlled by the Company, for which it assumes no responsibility."),
    ("Termination", "We may suspend or terminate Your access immediately, without prior notice, for any breach of these Terms."),
    ("Limitation of Liability", "The entire liability of the Company is limited to the amount actually paid by You through the Service."),
    ("\"AS IS\" and \"AS AVAILABLE\" Disclaimer", "The Service is provided with all faults and defects, without warranty of any kind."),
    ("Governing Law and Dispute Resolution", "The laws of New York, United States govern these Terms. Disputes are first resolved informally by contacting the Company."),
];

#[component]
fn LegalDocument(
    eyebrow: &'static str,
    title: &'static str,
    sections: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <article class="marketing legal">
            <header>
                <span class="eyebrow">{eyebrow}</span>
                <h1>{title}</h1>
                <p>{format!("\"the Company\", \"We\", \"Us\" or \"Our\" refers to {COMPANY}.")}</p>
            </header>
            {sections
                .iter()
                .map(|(heading, body)| view! {
                    <section>
                        <h2>{*heading}</h2>
                        <p>{*body}</p>
                    </section>
                })
                .collect_view()}
            <section>
                <h2>"Contact Us"</h2>
                <p>"Questions can be sent through the " <a href="/contact">"contact page"</a> "."</p>
            </section>
        </article>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! { <LegalDocument eyebrow="Legal Framework" title="Privacy Policy" sections=PRIVACY /> }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <LegalDocument eyebrow="Operating Protocols" title="Terms and Conditions" sections=TERMS /> }
}
