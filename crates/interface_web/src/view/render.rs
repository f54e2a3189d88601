//! HTML rendering for the contact page
//!
//! Output is plain server-side HTML with a small inline stylesheet. Every
//! piece of contact data passes through [`escape_html`].

use chrono::{DateTime, Utc};

use domain_contact::Contact;

use super::fetch_state::FetchState;
use super::panel::Panel;
use super::DualFetchView;

/// Number of placeholder blocks shown while a panel loads
pub const PLACEHOLDER_COUNT: usize = 3;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;background:#f9fafb;margin:0;padding:2rem 1rem}\
.page{max-width:80rem;margin:0 auto}\
.heading{text-align:center;margin-bottom:2rem}\
.panels{display:flex;gap:2rem}\
.panel{flex:1;background:#fff;border:1px solid #e5e7eb;border-radius:.5rem}\
.panel-header{padding:1rem;border-bottom:1px solid #e5e7eb}\
.panel-body{padding:1rem;max-height:24rem;overflow-y:auto}\
.placeholder{background:#e5e7eb;height:5rem;border-radius:.5rem;margin-bottom:.75rem}\
.error{color:#dc2626;background:#fef2f2;padding:1rem;border-radius:.5rem}\
.empty{color:#6b7280;padding:2rem;text-align:center}\
.card{border:1px solid #e5e7eb;border-radius:.5rem;padding:1rem;margin-bottom:.75rem}\
.card-date{font-size:.75rem;color:#6b7280;float:right}\
.refresh{margin-top:2rem;text-align:center}";

/// Escapes text for use in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Formats a timestamp as `month/day/year` without zero padding
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}

/// Renders one contact card
pub fn card(contact: &Contact) -> String {
    let mut html = format!(
        "<div class=\"card\" data-contact-id=\"{id}\">\
         <span class=\"card-date\">{created}</span>\
         <h3 class=\"card-name\">{name}</h3>\
         <p class=\"card-email\">{email}</p>",
        id = escape_html(contact.id.as_str()),
        created = format_date(&contact.created_at),
        name = escape_html(&contact.name),
        email = escape_html(&contact.email),
    );
    if let Some(dob) = &contact.date_of_birth {
        html.push_str(&format!("<p class=\"card-born\">Born: {}</p>", format_date(dob)));
    }
    html.push_str("</div>");
    html
}

fn panel_summary(panel: &Panel) -> String {
    if panel.state().is_loading() {
        "Loading contacts...".to_string()
    } else {
        format!("{} contacts", panel.contacts().len())
    }
}

fn panel_body(state: &FetchState<Vec<Contact>>) -> String {
    match state {
        FetchState::Idle => "<div class=\"empty\">Not loaded yet</div>".to_string(),
        FetchState::Loading => "<div class=\"placeholder\"></div>".repeat(PLACEHOLDER_COUNT),
        FetchState::Error(message) => {
            format!("<div class=\"error\">Error: {}</div>", escape_html(message))
        }
        FetchState::Success(contacts) if contacts.is_empty() => {
            "<div class=\"empty\">No contacts found</div>".to_string()
        }
        FetchState::Success(contacts) => contacts.iter().map(card).collect(),
    }
}

/// Renders one panel with its header and body
pub fn panel(panel: &Panel) -> String {
    format!(
        "<section class=\"panel\" data-state=\"{state}\">\
         <div class=\"panel-header\"><h2>{title}</h2><p class=\"summary\">{summary}</p></div>\
         <div class=\"panel-body\">{body}</div>\
         </section>",
        state = panel.state().label(),
        title = escape_html(panel.title()),
        summary = panel_summary(panel),
        body = panel_body(panel.state()),
    )
}

/// Renders the complete page
pub fn page(view: &DualFetchView) -> String {
    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>Contact Management System</title><style>{style}</style></head>\
         <body><div class=\"page\">\
         <div class=\"heading\"><h1>Contact Management System</h1>\
         <p>Compare data fetching methods: Server Actions vs API Routes</p></div>\
         <div class=\"panels\">{left}{right}</div>\
         <form class=\"refresh\" method=\"get\" action=\"/\">\
         <button type=\"submit\">Refresh Data</button></form>\
         </div></body></html>",
        style = STYLE,
        left = panel(view.server_action()),
        right = panel(view.api()),
    )
}
