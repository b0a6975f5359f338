use dioxus::prelude::*;

use crate::content::exam::{schedule_rows, ContactKind, CONTACTS};
use crate::core::{routes, Locale};
use crate::t;

/// Vietnamese proficiency exam: schedule, venue, fees, paperwork and contacts.
#[component]
pub fn ExamInfo(locale: String) -> Element {
    let locale = Locale::resolve(&locale);
    let rows = schedule_rows(locale);

    rsx! {
        article { class: "page page-exam",
            header { class: "exam-hero",
                h1 { {t!(locale, "exam-title")} }
                p { {t!(locale, "exam-subtitle")} }
            }

            section { class: "exam-section",
                {section_heading("📅", t!(locale, "exam-schedule-title"))}
                div { class: "exam-schedule",
                    table { class: "exam-schedule__table",
                        thead {
                            tr {
                                th { {t!(locale, "exam-column-round")} }
                                th { {t!(locale, "exam-column-date")} }
                                th { {t!(locale, "exam-column-deadline")} }
                                th { {t!(locale, "exam-column-backup")} }
                            }
                        }
                        tbody {
                            for row in rows.into_iter() {
                                tr { key: "{row.round}",
                                    td { class: "exam-schedule__round", "{row.round}" }
                                    td { "{row.date}" }
                                    td { "{row.deadline}" }
                                    td { "{row.backup}" }
                                }
                            }
                        }
                    }
                }
                p { class: "exam-section__note", {t!(locale, "exam-schedule-note")} }
            }

            section { class: "exam-section",
                {section_heading("📍", t!(locale, "exam-location-title"))}
                div { class: "exam-card",
                    p { {t!(locale, "exam-location-desc")} }
                    h3 { {t!(locale, "exam-location-name")} }
                    p { {t!(locale, "exam-location-address")} }
                    p { class: "exam-section__note", {t!(locale, "exam-location-note")} }
                }
            }

            section { class: "exam-section",
                {section_heading("💵", t!(locale, "exam-fees-title"))}
                div { class: "exam-card",
                    {numbered_list(vec![
                        t!(locale, "exam-fee-regular"),
                        t!(locale, "exam-fee-student"),
                    ])}
                    p { class: "exam-section__note", {t!(locale, "exam-fee-note")} }
                }
            }

            section { class: "exam-section",
                {section_heading("📄", t!(locale, "exam-application-title"))}
                div { class: "exam-card",
                    p { {t!(locale, "exam-application-desc")} }
                    {numbered_list(vec![
                        t!(locale, "exam-application-photos"),
                        t!(locale, "exam-application-passport"),
                        t!(locale, "exam-application-form"),
                        t!(locale, "exam-application-fee"),
                    ])}
                }
            }

            section { class: "exam-section",
                {section_heading("📍", t!(locale, "exam-submission-title"))}
                div { class: "exam-card",
                    p { {t!(locale, "exam-submission-desc")} }
                    {numbered_list(vec![
                        t!(locale, "exam-submission-center"),
                        t!(locale, "exam-submission-training"),
                        t!(locale, "exam-submission-faculty"),
                    ])}
                    p { {t!(locale, "exam-submission-hours")} }
                }
            }

            section { class: "exam-section",
                {section_heading("🖥", t!(locale, "exam-format-title"))}
                div { class: "exam-card",
                    {numbered_list(vec![
                        t!(locale, "exam-format-computer"),
                        t!(locale, "exam-format-morning"),
                        t!(locale, "exam-format-afternoon"),
                    ])}
                }
            }

            section { class: "exam-section",
                {section_heading("📞", t!(locale, "exam-contact-title"))}
                ul { class: "exam-contacts",
                    for channel in CONTACTS {
                        li { key: "{channel.href}", class: "exam-contacts__item",
                            span { class: "exam-contacts__label", {contact_label(locale, channel.kind)} }
                            if channel.kind == ContactKind::Website {
                                a {
                                    href: channel.href,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{channel.display}"
                                }
                            } else {
                                a { href: channel.href, "{channel.display}" }
                            }
                        }
                    }
                }

                div { class: "exam-actions",
                    Link { class: "button button--primary", to: routes::courses_path(locale),
                        {t!(locale, "exam-learn-more")}
                        span { aria_hidden: "true", " ›" }
                    }
                    // Contact lives on the main site, outside this router.
                    a { class: "button button--accent", href: routes::contact_path(locale),
                        {t!(locale, "exam-register")}
                        span { aria_hidden: "true", " ›" }
                    }
                }
            }
        }
    }
}

fn section_heading(icon: &'static str, title: String) -> Element {
    rsx! {
        div { class: "exam-section__heading",
            span { class: "exam-section__icon", aria_hidden: "true", "{icon}" }
            h2 { "{title}" }
        }
    }
}

fn numbered_list(items: Vec<String>) -> Element {
    rsx! {
        ol { class: "numbered-list",
            for (index, item) in items.into_iter().enumerate() {
                li { key: "{index}", class: "numbered-list__item",
                    span { class: "numbered-list__number", {(index + 1).to_string()} }
                    span { class: "numbered-list__content", "{item}" }
                }
            }
        }
    }
}

fn contact_label(locale: Locale, kind: ContactKind) -> String {
    match kind {
        ContactKind::Website => t!(locale, "exam-contact-website"),
        ContactKind::Email => t!(locale, "exam-contact-email"),
        ContactKind::Phone => t!(locale, "exam-contact-phone"),
    }
}
