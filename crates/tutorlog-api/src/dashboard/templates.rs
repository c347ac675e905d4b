// Dashboard HTML rendering
//
// Embedded minijinja templates, registered under .html names so the
// default auto-escape callback applies to every interpolated value.
// Notebook names in links additionally pass through the urlencode filter:
// HTML-escaping and percent-encoding are distinct operations and both are
// required on that path.

use std::sync::OnceLock;

use minijinja::{context, Environment};
use serde::Serialize;

/// One row of the index-mode notebook list.
#[derive(Debug, Serialize)]
pub struct NotebookListItem {
    pub name: String,
    pub events: i64,
}

/// One rendered event inside a user's timeline.
#[derive(Debug, Serialize)]
pub struct TimelineEntry {
    pub timestamp: String,
    pub event_type: String,
    pub chatgpt_mode: bool,
    pub question: Option<String>,
    pub response: Option<String>,
}

/// All events of one user within a notebook, in chronological order.
#[derive(Debug, Serialize)]
pub struct UserSection {
    pub user: String,
    pub entries: Vec<TimelineEntry>,
}

/// One row of the flat table.
#[derive(Debug, Serialize)]
pub struct TableRow {
    pub id: i64,
    pub timestamp: String,
    pub event_type: String,
    pub user: String,
    pub payload: String,
}

fn env() -> &'static Environment<'static> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.add_template("base.html", BASE_TEMPLATE).unwrap();
        env.add_template("login.html", LOGIN_TEMPLATE).unwrap();
        env.add_template("index.html", INDEX_TEMPLATE).unwrap();
        env.add_template("detail.html", DETAIL_TEMPLATE).unwrap();
        env.add_template("table.html", TABLE_TEMPLATE).unwrap();
        env
    })
}

fn render(name: &str, ctx: minijinja::Value) -> String {
    let template = env().get_template(name).unwrap();
    template.render(ctx).unwrap()
}

pub fn render_login(error: Option<&str>) -> String {
    render("login.html", context! { error })
}

pub fn render_index(notebooks: &[NotebookListItem]) -> String {
    render("index.html", context! { notebooks })
}

pub fn render_detail(notebook: &str, sections: &[UserSection]) -> String {
    render("detail.html", context! { notebook, sections })
}

pub fn render_table(rows: &[TableRow]) -> String {
    render("table.html", context! { rows })
}

const BASE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{% block title %}Tutor Log{% endblock %}</title>
<style>
    body {
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
        max-width: 960px;
        margin: 2rem auto;
        padding: 0 1rem;
        color: #24292f;
        line-height: 1.5;
    }
    h1 { font-size: 1.6rem; }
    h2 {
        font-size: 1.1rem;
        margin-top: 1.5rem;
        padding-bottom: 0.25rem;
        border-bottom: 1px solid #d0d7de;
    }
    a { color: #0969da; }
    table { border-collapse: collapse; width: 100%; }
    th, td { text-align: left; padding: 0.3rem 0.6rem; border-bottom: 1px solid #d0d7de; }
    code { font-size: 0.85rem; }
    .entry { border-left: 3px solid #d0d7de; margin: 0.6rem 0; padding: 0.2rem 0.8rem; }
    .entry p { margin: 0.25rem 0; }
    .timestamp { color: #57606a; font-size: 0.85rem; margin-right: 0.5rem; }
    .badge {
        background: #10a37f;
        color: #fff;
        border-radius: 4px;
        padding: 1px 6px;
        font-size: 0.75rem;
        margin-left: 0.4rem;
    }
    .error { color: #cf222e; }
</style>
</head>
<body>
{% block content %}{% endblock %}
</body>
</html>
"#;

const LOGIN_TEMPLATE: &str = r#"{% extends "base.html" %}
{% block title %}Tutor Log login{% endblock %}
{% block content %}
<h1>Tutor Log Dashboard</h1>
{% if error %}<p class="error">{{ error }}</p>{% endif %}
<form method="post" action="/dashboard/login">
    <input type="password" name="password" placeholder="Password" autofocus>
    <button type="submit">Log in</button>
</form>
{% endblock %}
"#;

const INDEX_TEMPLATE: &str = r#"{% extends "base.html" %}
{% block content %}
<h1>Notebooks</h1>
{% if notebooks %}
<ul>
{% for nb in notebooks %}
    <li><a href="/dashboard?notebook={{ nb.name|urlencode }}">{{ nb.name }}</a> ({{ nb.events }} events)</li>
{% endfor %}
</ul>
{% else %}
<p>No events recorded yet.</p>
{% endif %}
{% endblock %}
"#;

const DETAIL_TEMPLATE: &str = r#"{% extends "base.html" %}
{% block title %}Tutor Log: {{ notebook }}{% endblock %}
{% block content %}
<h1>Notebook: {{ notebook }}</h1>
<p><a href="/dashboard">all notebooks</a></p>
{% for section in sections %}
<h2>{{ section.user }}</h2>
{% for e in section.entries %}
<div class="entry">
    <span class="timestamp">{{ e.timestamp }}</span>
    <strong>{{ e.event_type }}</strong>
    {% if e.chatgpt_mode %}<span class="badge">chatgpt</span>{% endif %}
    {% if e.question %}<p>Q: {{ e.question }}</p>{% endif %}
    {% if e.response %}<p>A: {{ e.response }}</p>{% endif %}
</div>
{% endfor %}
{% else %}
<p>No events for this notebook.</p>
{% endfor %}
{% endblock %}
"#;

const TABLE_TEMPLATE: &str = r#"{% extends "base.html" %}
{% block content %}
<h1>Recent events</h1>
<table>
<thead>
<tr><th>id</th><th>time</th><th>type</th><th>user</th><th>payload</th></tr>
</thead>
<tbody>
{% for row in rows %}
<tr>
    <td>{{ row.id }}</td>
    <td>{{ row.timestamp }}</td>
    <td>{{ row.event_type }}</td>
    <td>{{ row.user }}</td>
    <td><code>{{ row.payload }}</code></td>
</tr>
{% endfor %}
</tbody>
</table>
{% endblock %}
"#;
