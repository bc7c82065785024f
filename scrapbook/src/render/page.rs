//! Collection page, index and not-found page

use super::layout::document;
use super::moment::render_moment;
use super::{escape, long_date};
use crate::decoration::DecorationEngine;
use crate::services::{CollectionPage, SiteSettings};

const BACK_TO_TOP: &str = r#"<div class="flex justify-center mt-16 mb-8">
<button type="button" onclick="window.scrollTo({ top: 0, behavior: 'smooth' })" class="back-to-top paper-texture bg-white hover:bg-gray-50 text-gray-800 font-semibold py-3 px-6 rounded-lg shadow-lg hover:shadow-xl transition-all duration-200 flex items-center gap-2 handwriting-print text-lg transform hover:-rotate-1"><span aria-hidden="true">↑</span> Back to Top</button>
</div>
"#;

const EMPTY_STATE: &str = r#"<div class="text-center py-16">
<div class="paper-texture bg-white rounded-lg p-12 shadow-lg max-w-md mx-auto transform rotate-1">
<p class="handwriting-marker text-2xl text-gray-600 mb-4">No memories yet...</p>
<p class="handwriting-print text-xl text-gray-500">This scrapbook is waiting for its first beautiful moment!</p>
</div>
</div>
"#;

fn memory_count(count: usize) -> String {
    if count == 1 {
        "1 Memory".to_string()
    } else {
        format!("{} Memories", count)
    }
}

fn header(page: &CollectionPage) -> String {
    let mut html = format!(
        r#"<div class="text-center mb-12">
<div class="paper-texture bg-amber-50 rounded-lg p-8 shadow-lg transform -rotate-1 mx-auto max-w-2xl border-4 border-amber-200">
<h1 class="text-5xl font-bold mb-4 handwriting-marker text-amber-800">{}</h1>
"#,
        escape(&page.collection.name)
    );

    if let Some(user) = &page.user {
        html.push_str(&format!(
            r#"<div class="handwriting-print text-xl text-amber-700 mb-4">
<p class="mb-2">A collection by <span class="font-semibold">{}</span></p>
<p class="text-base mt-2">Started: {}</p>
</div>
"#,
            escape(&user.name),
            long_date(&page.collection.created_at)
        ));
    }

    html.push_str(&format!(
        r#"<div class="flex justify-center items-center gap-4 mt-6">
<div class="memory-count bg-yellow-200 px-4 py-2 rounded-full handwriting-print text-xl text-amber-800 transform rotate-2 shadow-md">{}</div>
</div>
</div>
</div>
"#,
        memory_count(page.moments.len())
    ));

    html
}

/// Render the full page for a collection
pub fn render_collection_page(
    site: &SiteSettings,
    page: &CollectionPage,
    engine: &DecorationEngine,
) -> String {
    let mut body = String::from(
        "<div class=\"min-h-screen scrapbook-bg\">\n<div class=\"container mx-auto px-4 py-8\">\n",
    );

    body.push_str(&header(page));
    body.push_str("<div class=\"space-y-8\">\n");

    if page.moments.is_empty() {
        body.push_str(EMPTY_STATE);
    } else {
        body.push_str("<div class=\"grid gap-8 justify-items-center\">\n");
        for decorated in page.decorated_moments(engine) {
            body.push_str(&render_moment(&decorated.moment, &decorated.decoration));
        }
        body.push_str("</div>\n");
    }

    body.push_str("</div>\n");
    body.push_str(BACK_TO_TOP);
    body.push_str("</div>\n</div>\n");

    document(site, Some(&page.collection.name), &body)
}

/// Render the list of collection links
pub fn render_index(site: &SiteSettings, collection_ids: &[String]) -> String {
    let mut body = String::from(
        "<div class=\"min-h-screen scrapbook-bg\">\n<div class=\"container mx-auto px-4 py-8\">\n<ul class=\"collection-list handwriting-print text-xl\">\n",
    );

    for id in collection_ids {
        body.push_str(&format!(
            "<li><a href=\"/{}\">{}</a></li>\n",
            escape(id),
            escape(id)
        ));
    }

    body.push_str("</ul>\n</div>\n</div>\n");
    document(site, None, &body)
}

/// Render the page shown for unknown collections
pub fn render_not_found(site: &SiteSettings) -> String {
    let body = r#"<div class="min-h-screen scrapbook-bg flex items-center justify-center">
<div class="paper-texture bg-white rounded-lg p-12 shadow-lg max-w-md mx-auto text-center">
<h1 class="handwriting-marker text-4xl text-gray-700 mb-4">404</h1>
<p class="handwriting-print text-xl text-gray-500">This page could not be found.</p>
<p class="mt-6"><a class="handwriting-print text-lg" href="/">Back to all scrapbooks</a></p>
</div>
</div>
"#;

    document(site, Some("Not Found"), body)
}
