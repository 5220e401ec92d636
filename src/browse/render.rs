//! HTML rendering.

use crate::domain::{Author, Entry, Topic};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

use super::pages::Notice;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav>
<a href="/">Home</a> | <a href="/entries">Entries</a> | <a href="/authors">Authors</a> | <a href="/topics">Topics</a> | <a href="/new">New entry</a>
</nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = encode_text(title),
        body = body
    )
}

pub fn home() -> String {
    layout(
        "Blog",
        "<h1>Welcome to the blog</h1>\n<p>Browse <a href=\"/entries\">entries</a>, \
         <a href=\"/authors\">authors</a> and <a href=\"/topics\">topics</a>, \
         or <a href=\"/new\">write a new entry</a>.</p>",
    )
}

pub fn entry_list(entries: &[Entry]) -> String {
    let mut body = String::from("<h1>Entries</h1>\n");
    if entries.is_empty() {
        body.push_str("<p>No entries yet.</p>");
        return layout("Entries", &body);
    }

    body.push_str("<ul>\n");
    for entry in entries {
        let _ = writeln!(
            body,
            "<li><a href=\"/entries/{}\">{}</a></li>",
            entry.entry_id,
            encode_text(&entry.title)
        );
    }
    body.push_str("</ul>");
    layout("Entries", &body)
}

pub fn entry_page(entry: &Entry) -> String {
    let body = format!(
        "<article>\n<h1>{}</h1>\n<p class=\"byline\">by {} in {}</p>\n<div class=\"content\">{}</div>\n</article>",
        encode_text(&entry.title),
        encode_text(&entry.author),
        encode_text(&entry.topic),
        encode_text(&entry.content)
    );
    layout(&entry.title, &body)
}

pub fn author_list(authors: &[Author]) -> String {
    let names: Vec<&str> = authors.iter().map(|a| a.name.as_str()).collect();
    name_list("Authors", &names)
}

pub fn topic_list(topics: &[Topic]) -> String {
    let names: Vec<&str> = topics.iter().map(|t| t.name.as_str()).collect();
    name_list("Topics", &names)
}

fn name_list(heading: &str, names: &[&str]) -> String {
    let mut body = format!("<h1>{}</h1>\n<ul>\n", heading);
    for name in names {
        let _ = writeln!(body, "<li>{}</li>", encode_text(name));
    }
    body.push_str("</ul>");
    layout(heading, &body)
}

/// The new-entry form. Failed submissions keep what the user typed.
pub fn new_entry(notice: Option<&Notice>, values: &[(&str, &str)]) -> String {
    let mut body = String::from("<h1>New entry</h1>\n");
    if let Some(notice) = notice {
        let class = if notice.is_success() { "success" } else { "error" };
        let _ = writeln!(
            body,
            "<p class=\"notice {}\">{}</p>",
            class,
            encode_text(notice.text())
        );
    }

    let value_of = |field: &str| {
        values
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, v)| *v)
            .unwrap_or("")
    };

    body.push_str("<form method=\"post\" action=\"/new\">\n");
    for field in ["title", "author", "topic"] {
        let _ = writeln!(
            body,
            "<label>{field} <input type=\"text\" name=\"{field}\" value=\"{value}\"></label><br>",
            field = field,
            value = encode_double_quoted_attribute(value_of(field))
        );
    }
    let _ = writeln!(
        body,
        "<label>content <textarea name=\"content\">{}</textarea></label><br>",
        encode_text(value_of("content"))
    );
    body.push_str("<button type=\"submit\">Post</button>\n</form>");

    layout("New entry", &body)
}

pub fn not_found(what: &str) -> String {
    layout(
        "Not found",
        &format!("<h1>Not found</h1>\n<p>No such {}.</p>", encode_text(what)),
    )
}
