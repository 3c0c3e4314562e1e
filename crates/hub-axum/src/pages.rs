//! Admin UI pages.
//!
//! Static layout markup with navigation. Session handling lives in the
//! frontend; these pages only render the shell.

use axum::response::Html;

struct NavLink {
    href: &'static str,
    label: &'static str,
}

const NAV: [NavLink; 3] = [
    NavLink {
        href: "/admin",
        label: "Dashboard",
    },
    NavLink {
        href: "/admin/collections",
        label: "Collections",
    },
    NavLink {
        href: "/admin/users",
        label: "Users",
    },
];

fn nav(active: &str) -> String {
    NAV.iter()
        .map(|link| {
            let class = if link.href == active { " class=\"active\"" } else { "" };
            format!("<a href=\"{}\"{class}>{}</a>", link.href, link.label)
        })
        .collect::<Vec<_>>()
        .join("\n      ")
}

/// Render `body` inside the shared layout. `active` selects the nav entry;
/// `None` hides the navigation entirely.
fn layout(title: &str, active: Option<&str>, body: &str) -> Html<String> {
    let header = active.map_or_else(String::new, |active| {
        format!(
            "<header>\n    <nav>\n      {}\n    </nav>\n  </header>\n  ",
            nav(active)
        )
    });
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} | Content Hub</title>
</head>
<body>
  {header}<main>
    <h1>{title}</h1>
    {body}
  </main>
</body>
</html>
"#
    ))
}

pub async fn login() -> Html<String> {
    layout(
        "Sign in",
        None,
        r#"<form method="post" action="/login">
      <label>Email <input type="email" name="email" required></label>
      <label>Password <input type="password" name="password" required></label>
      <button type="submit">Sign in</button>
    </form>"#,
    )
}

pub async fn dashboard() -> Html<String> {
    layout(
        "Dashboard",
        Some("/admin"),
        r#"<section id="sync-status" data-source="/api/v1/sync-status"></section>
    <section id="language-check" data-source="/api/admin/language-check"></section>"#,
    )
}

pub async fn collections() -> Html<String> {
    layout(
        "Collections",
        Some("/admin/collections"),
        r#"<section id="collections" data-source="/api/collections"></section>"#,
    )
}

pub async fn users() -> Html<String> {
    layout(
        "Users",
        Some("/admin/users"),
        r#"<section id="users"></section>"#,
    )
}
