//! Server-rendered admin pages.
//!
//! Pages are plain HTML forms posting back to the handlers in `crate::api`.
//! Every user supplied value goes through [`escape`] before it is written.

mod views;

pub(crate) use views::*;

use actix_web::{http::header::ContentType, HttpResponse};

const NAV: &[(&str, &str)] = &[
    ("/customize", "Customization"),
    ("/ticket", "Ticket"),
    ("/video", "Video"),
    ("/slideshow", "Slideshow"),
    ("/multimedia/1", "Images"),
    ("/multimedia/2", "Audio"),
    ("/multimedia/3", "Videos"),
    ("/displayscreen_c/1", "Display screen"),
    ("/touchscreen_c/1", "Touch screen"),
    ("/alias", "Aliases"),
];

/// Escape text for use in element content and quoted attribute values.
pub(crate) fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) struct Page {
    title: String,
    body: String,
}

impl Page {
    pub(crate) fn new(title: &str) -> Self {
        Page {
            title: title.to_string(),
            body: String::new(),
        }
    }

    pub(crate) fn heading(mut self, text: &str) -> Self {
        self.body.push_str(&format!("<h2>{}</h2>", escape(text)));
        self
    }

    pub(crate) fn paragraph(mut self, text: &str) -> Self {
        self.body.push_str(&format!("<p>{}</p>", escape(text)));
        self
    }

    /// Append already rendered markup.
    pub(crate) fn push(mut self, html: impl AsRef<str>) -> Self {
        self.body.push_str(html.as_ref());
        self
    }

    pub(crate) fn render(&self) -> String {
        let mut nav = String::new();
        for (href, label) in NAV {
            nav.push_str(&format!(r#"<a href="{href}">{label}</a> "#));
        }
        format!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title></head>\
             <body><nav>{nav}</nav><h1>{title}</h1>{body}</body></html>",
            title = escape(&self.title),
            body = self.body,
        )
    }

    pub(crate) fn into_response(self) -> HttpResponse {
        HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(self.render())
    }
}

/// Builder for a single `<form>` element.
pub(crate) struct Form {
    action: String,
    multipart: bool,
    fields: String,
}

impl Form {
    pub(crate) fn post(action: &str) -> Self {
        Form {
            action: action.to_string(),
            multipart: false,
            fields: String::new(),
        }
    }

    pub(crate) fn upload(action: &str) -> Self {
        Form {
            multipart: true,
            ..Form::post(action)
        }
    }

    pub(crate) fn text(mut self, name: &str, label: &str, value: &str) -> Self {
        self.fields.push_str(&format!(
            r#"<label>{label} <input type="text" name="{name}" value="{value}"></label><br>"#,
            label = escape(label),
            value = escape(value),
        ));
        self
    }

    pub(crate) fn number(mut self, name: &str, label: &str, value: i32) -> Self {
        self.fields.push_str(&format!(
            r#"<label>{label} <input type="number" name="{name}" value="{value}"></label><br>"#,
            label = escape(label),
        ));
        self
    }

    /// `<select>` with `(value, label)` options; `selected` marks the current value.
    pub(crate) fn select<V, L>(
        mut self,
        name: &str,
        label: &str,
        options: impl IntoIterator<Item = (V, L)>,
        selected: &str,
    ) -> Self
    where
        V: AsRef<str>,
        L: AsRef<str>,
    {
        self.fields.push_str(&format!(
            r#"<label>{} <select name="{name}">"#,
            escape(label)
        ));
        for (value, text) in options {
            let value = value.as_ref();
            let marker = if value == selected { " selected" } else { "" };
            self.fields.push_str(&format!(
                r#"<option value="{}"{marker}>{}</option>"#,
                escape(value),
                escape(text.as_ref()),
            ));
        }
        self.fields.push_str("</select></label><br>");
        self
    }

    pub(crate) fn checkbox(mut self, name: &str, label: &str, checked: bool) -> Self {
        let marker = if checked { " checked" } else { "" };
        self.fields.push_str(&format!(
            r#"<label><input type="checkbox" name="{}"{marker}> {}</label><br>"#,
            escape(name),
            escape(label),
        ));
        self
    }

    pub(crate) fn file(mut self, name: &str, accept: &[&str]) -> Self {
        let accept = accept
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(",");
        self.fields.push_str(&format!(
            r#"<input type="file" name="{name}" accept="{accept}"><br>"#
        ));
        self
    }

    pub(crate) fn finish(self, submit: &str) -> String {
        let enctype = if self.multipart {
            r#" enctype="multipart/form-data""#
        } else {
            ""
        };
        format!(
            r#"<form method="post" action="{}"{enctype}>{}<button type="submit">{}</button></form>"#,
            escape(&self.action),
            self.fields,
            escape(submit),
        )
    }
}
