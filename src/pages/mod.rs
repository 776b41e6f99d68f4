//! Server-side HTML rendering.
//!
//! Deliberately minimal: a shared layout and one function per page. All
//! interpolated text goes through [`escape`].

use crate::models::Contact;
use std::fmt::Write;

/// Escape text for safe interpolation into HTML.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{} - Contact Book</title>\n</head>\n<body>\n\
         <nav><a href=\"/\">Home</a> | <a href=\"/contacts\">Contacts</a> | \
         <a href=\"/add-contact\">Add Contact</a> | <a href=\"/about\">About</a></nav>\n\
         {}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut out = String::from("<ul class=\"errors\">\n");
    for error in errors {
        let _ = writeln!(out, "<li>{}</li>", escape(error));
    }
    out.push_str("</ul>\n");
    out
}

fn contact_form(action: &str, contact: Option<&Contact>) -> String {
    let (name, phone, email) = match contact {
        Some(c) => (c.name.as_str(), c.phone_number.as_str(), c.email.as_str()),
        None => ("", "", ""),
    };
    format!(
        "<form method=\"post\" action=\"{}\">\n\
         <label>Name <input type=\"text\" name=\"name\" value=\"{}\"></label>\n\
         <label>Phone Number <input type=\"text\" name=\"phoneNumber\" value=\"{}\"></label>\n\
         <label>E-mail <input type=\"text\" name=\"email\" value=\"{}\"></label>\n\
         <button type=\"submit\">Save</button>\n</form>\n",
        action,
        escape(name),
        escape(phone),
        escape(email)
    )
}

/// The home page.
pub fn home_page() -> String {
    layout("Home", "<h1>Contact Book</h1>\n<p>Keep your contacts in one place.</p>")
}

/// The about page.
pub fn about_page() -> String {
    layout(
        "About",
        "<h1>About</h1>\n<p>A small contact book storing names, phone numbers and emails.</p>",
    )
}

/// The contact listing, with any pending one-shot notices.
pub fn contacts_page(
    contacts: &[Contact],
    msg_success: Option<&str>,
    msg_error: Option<&str>,
) -> String {
    let mut body = String::from("<h1>Contacts</h1>\n");

    if let Some(msg) = msg_success {
        let _ = writeln!(body, "<p class=\"notice-success\">{}</p>", escape(msg));
    }
    if let Some(msg) = msg_error {
        let _ = writeln!(body, "<p class=\"notice-error\">{}</p>", escape(msg));
    }

    if contacts.is_empty() {
        body.push_str("<p>No contacts yet.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for contact in contacts {
            let name = escape(&contact.name);
            let encoded = urlencoding::encode(&contact.name);
            let _ = writeln!(
                body,
                "<li>{} — <a href=\"/detail-contact?name={}\">detail</a> \
                 <a href=\"/edit-contact?name={}\">edit</a> \
                 <a href=\"/delete-contact?name={}\">delete</a></li>",
                name, encoded, encoded, encoded
            );
        }
        body.push_str("</ul>\n");
    }

    layout("Contacts", &body)
}

/// The detail page. An absent contact still renders.
pub fn detail_page(contact: Option<&Contact>, requested_name: &str) -> String {
    let body = match contact {
        Some(c) => format!(
            "<h1>{}</h1>\n<dl>\n<dt>Phone Number</dt><dd>{}</dd>\n\
             <dt>E-mail</dt><dd>{}</dd>\n</dl>\n",
            escape(&c.name),
            escape(&c.phone_number),
            escape(&c.email)
        ),
        None => format!("<h1>{}</h1>\n<p>No details available.</p>\n", escape(requested_name)),
    };
    layout("Detail", &body)
}

/// The add form, with any error messages from a prior failed submission.
pub fn add_contact_page(errors: &[String]) -> String {
    let body = format!(
        "<h1>Add Contact</h1>\n{}{}",
        error_list(errors),
        contact_form("/add-contact", None)
    );
    layout("Add Contact", &body)
}

/// The edit form, pre-filled with the stored record.
pub fn edit_contact_page(contact: &Contact, errors: &[String]) -> String {
    let action = format!(
        "/edit-contact?nameToUpdate={}",
        urlencoding::encode(&contact.name)
    );
    let body = format!(
        "<h1>Edit Contact</h1>\n{}{}",
        error_list(errors),
        contact_form(&action, Some(contact))
    );
    layout("Edit Contact", &body)
}
