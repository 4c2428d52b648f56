use crate::params::format_passphrase;

/// Renders the home page showing the application name and a passphrase.
pub fn render_home(app_name: &str, words: &[String]) -> String {
    let app_name = escape(app_name);
    let passphrase = escape(&format_passphrase(words));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{app_name}</title>
</head>
<body>
  <h1>{app_name}</h1>
  <p>Your passphrase:</p>
  <p id="passphrase">{passphrase}</p>
</body>
</html>
"#
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
