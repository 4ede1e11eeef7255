//! Server-side HTML for the landing page.

use std::fmt::Write;

use crate::models::VideoRecord;

/// Everything the landing page shows
#[derive(Debug, Clone, Default)]
pub struct IndexPage {
    pub total_videos: usize,
    pub video: Option<VideoRecord>,
    pub error_message: Option<String>,
}

/// Escapes text for use in HTML bodies and double-quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render_index(page: &IndexPage) -> String {
    let mut html = String::new();

    html.push_str(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Lonely Web</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<header>
<h1>Lonely Web</h1>
"#,
    );

    let _ = writeln!(
        html,
        r#"<p id="total-videos">Videos in the collection: <strong>{}</strong></p>"#,
        page.total_videos
    );
    html.push_str("</header>\n<main>\n");

    // Rendered even when empty so the script can report fetch failures there.
    match &page.error_message {
        Some(message) => {
            let _ = writeln!(
                html,
                r#"<p id="error-message" class="error">{}</p>"#,
                escape_html(message)
            );
        }
        None => html.push_str(r#"<p id="error-message" class="error" hidden></p>"#),
    }
    html.push('\n');

    if let Some(video) = &page.video {
        render_video_section(&mut html, video);
    }

    html.push_str("</main>\n<script src=\"/static/app.js\"></script>\n</body>\n</html>\n");
    html
}

fn render_video_section(html: &mut String, video: &VideoRecord) {
    let title = if video.title.is_empty() {
        "(untitled)"
    } else {
        video.title.as_str()
    };

    let _ = write!(
        html,
        r#"<section id="video-section" data-video-id="{id}">
<div class="player">
<iframe id="player" src="{embed}" title="{title}" allow="autoplay; encrypted-media" allowfullscreen></iframe>
</div>
<h2 id="video-title">{title}</h2>
<p class="meta"><span id="video-channel">{channel}</span> &middot; <span id="video-views">{views}</span> views</p>
<p><a id="video-link" href="{url}" target="_blank" rel="noopener">Watch on YouTube</a></p>
<button id="next-video" type="button">Next video</button>
</section>
"#,
        id = escape_html(&video.video_id),
        embed = escape_html(&video.embed_url()),
        title = escape_html(title),
        channel = escape_html(&video.channel_title),
        views = video.view_count,
        url = escape_html(&video.source_url),
    );
}
