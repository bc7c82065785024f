//! Moment card rendering

use super::{escape, full_date, month_day};
use crate::config::VIDEO_EXTENSIONS;
use crate::database::Moment;
use crate::decoration::{MomentDecoration, Sticker};

fn is_video(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit_once('.')
        .map(|(_, ext)| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|video| ext.eq_ignore_ascii_case(video))
        })
        .unwrap_or(false)
}

fn media(url: &str, title: &str) -> String {
    if is_video(url) {
        format!(
            r#"<video src="{}" title="{}" controls playsinline class="w-full rounded"></video>"#,
            escape(url),
            escape(title)
        )
    } else {
        format!(
            r#"<img src="{}" alt="{}" title="{}" class="w-full rounded" loading="lazy">"#,
            escape(url),
            escape(title),
            escape(title)
        )
    }
}

/// Present and not blank; empty strings hide their section
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn location(moment: &Moment) -> Option<String> {
    let parts: Vec<&str> = [moment.city.as_deref(), moment.country.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();

    (!parts.is_empty()).then(|| parts.join(", "))
}

fn sticker(sticker: &Sticker) -> String {
    format!(
        r#"<img src="{src}" alt="Decorative sticker" width="{size:.0}" height="{size:.0}" class="sticker absolute hover:scale-105 transition-transform duration-300" data-zone="{zone}" style="left: {x:.3}%; top: {y:.3}%; width: {size:.3}px; height: {size:.3}px; transform: rotate({rotation:.3}deg); z-index: 10000;">"#,
        src = escape(&sticker.src),
        size = sticker.size,
        zone = sticker.zone,
        x = sticker.x,
        y = sticker.y,
        rotation = sticker.rotation,
    )
}

/// Render one moment card with its stickers
pub fn render_moment(moment: &Moment, decoration: &MomentDecoration) -> String {
    let style = &decoration.style;
    let jitter = &decoration.jitter;
    let mut html = String::new();

    html.push_str(&format!(
        r#"<div class="relative" id="moment-{id}">
<div class="moment-card paper-texture {bg} {paper} relative overflow-visible" style="--card-rotation: {rotation:.3}deg; --float-delay: {delay:.3}s; --float-rotation: {rotation:.3}deg; z-index: 1;">
<div class="relative z-20 mb-6">
<h3 class="text-2xl font-bold {accent} {title_font} mb-2">{title}</h3>
"#,
        id = escape(&moment.id),
        bg = style.bg_color,
        paper = style.paper_type,
        rotation = style.rotation,
        delay = jitter.float_delay,
        accent = style.accent_color,
        title_font = style.title_font_class,
        title = escape(&moment.title),
    ));

    if let Some(category) = non_empty(&moment.category) {
        html.push_str(&format!(
            r#"<span class="inline-block px-3 py-1 {} {} border-2 text-sm rounded-full {} transform rotate-1">{}</span>
"#,
            style.bg_color,
            style.border_color,
            style.font_class,
            escape(category)
        ));
    }
    html.push_str("</div>\n");

    if let Some(url) = non_empty(&moment.media_url) {
        html.push_str(&format!(
            r#"<div class="photo-frame mb-6 relative z-20 hover:scale-105 transition-transform duration-300" style="--rotation: {:.3}deg;">
{}
"#,
            jitter.photo_rotation,
            media(url, &moment.title)
        ));
        if jitter.corner_dot {
            html.push_str(
                r#"<div class="corner-dot absolute -top-2 -right-2 w-6 h-6 bg-red-400 rounded-full opacity-80 transform rotate-45"></div>
"#,
            );
        }
        html.push_str("</div>\n");
    }

    if let Some(content) = non_empty(&moment.content) {
        html.push_str(&format!(
            r#"<div class="relative z-20 mb-6">
<div class="bg-yellow-100 p-4 transform -rotate-1 shadow-md border-l-4 border-yellow-400">
<p class="{} text-gray-800 text-xl leading-relaxed whitespace-pre-wrap">{}</p>
</div>
</div>
"#,
            style.font_class,
            escape(content)
        ));
    }

    html.push_str("<div class=\"relative z-20 space-y-3\">\n");

    if let Some(place) = location(moment) {
        html.push_str(&format!(
            r#"<div class="flex items-center gap-2"><span class="icon icon-map-pin {}" aria-hidden="true"></span><span class="{} text-xl text-gray-700">{}</span></div>
"#,
            style.accent_color,
            style.font_class,
            escape(&place)
        ));
    }

    html.push_str(&format!(
        r#"<div class="flex items-center gap-2"><span class="icon icon-clock text-orange-500" aria-hidden="true"></span><span class="{} text-xl text-gray-700">{}</span></div>
"#,
        style.font_class,
        full_date(&moment.started_at)
    ));

    if let Some(completed_at) = &moment.completed_at {
        html.push_str(&format!(
            r#"<div class="flex items-center gap-2"><span class="icon icon-check-circle text-green-500" aria-hidden="true"></span><span class="{} text-xl text-gray-700">Completed on {}</span></div>
"#,
            style.font_class,
            month_day(completed_at)
        ));
    }
    html.push_str("</div>\n");

    if moment.completed_at.is_some() {
        html.push_str(
            r#"<div class="absolute top-4 right-4 z-30"><div class="done-badge bg-green-200 text-green-800 px-3 py-1 rounded-full text-sm font-bold transform rotate-12 shadow-lg">✓ Done!</div></div>
"#,
        );
    }

    if jitter.tape_strip {
        html.push_str(
            r#"<div class="tape-strip absolute top-0 left-1/4 w-16 h-8 bg-yellow-200 opacity-60 transform -rotate-12 shadow-sm border border-yellow-300"></div>
"#,
        );
    }

    // Card closes before the stickers so they stack above it
    html.push_str("</div>\n");

    for s in &decoration.stickers {
        html.push_str(&sticker(s));
        html.push('\n');
    }

    html.push_str("</div>\n");
    html
}
