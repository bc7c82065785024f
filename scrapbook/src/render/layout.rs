//! Document shell

use super::escape;
use crate::services::SiteSettings;

const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Caveat:wght@400;600;700&family=Homemade+Apple&family=Montserrat:wght@400;700&family=Permanent+Marker&family=Reenie+Beanie&display=swap";

const FAVICONS: &str = r#"<link rel="icon" type="image/png" sizes="16x16" href="/favicons/favicon-16x16.png">
<link rel="icon" type="image/png" sizes="32x32" href="/favicons/favicon-32x32.png">
<link rel="icon" sizes="any" href="/favicons/favicon.ico">
<link rel="apple-touch-icon" sizes="180x180" href="/favicons/apple-touch-icon.png">
<link rel="android-chrome-192x192" href="/favicons/android-chrome-192x192.png">
<link rel="android-chrome-512x512" href="/favicons/android-chrome-512x512.png">
<link rel="manifest" href="/favicons/site.webmanifest">"#;

/// Wrap a page body in the full HTML document.
///
/// `heading` prefixes the site title in `<title>` when given.
pub fn document(site: &SiteSettings, heading: Option<&str>, body: &str) -> String {
    let title = match heading {
        Some(heading) => format!("{} | {}", escape(heading), escape(&site.title)),
        None => escape(&site.title),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
{favicons}
<link rel="preconnect" href="https://fonts.googleapis.com">
<link rel="stylesheet" href="{fonts}">
<link rel="stylesheet" href="/globals.css">
</head>
<body class="antialiased">
{body}
</body>
</html>
"#,
        title = title,
        description = escape(&site.description),
        favicons = FAVICONS,
        fonts = escape(FONTS_URL),
        body = body,
    )
}
