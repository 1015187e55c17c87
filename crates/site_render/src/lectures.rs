//! The lectures page.

use crate::templates::{lectures_foot, lectures_head};
use crate::text::indent;
use site_records::{Context, Corpus, Lecture, Person};

const VIMEO_PLAYER: &str = "https://player.vimeo.com/video/";

/// Render the full lectures page: head, every lecture in ascending id order, foot.
///
/// Presenter ids are resolved against `people`; an id with no matching person is kept as text and
/// recorded as a warning under the lecture's id.
pub fn render_lectures_page(
    lectures: &Corpus<Lecture>,
    people: &Corpus<Person>,
    ctx: &mut Context,
) -> String {
    let mut ordered: Vec<_> = lectures.iter().collect();
    ordered.sort_by(|a, b| a.id.cmp(&b.id));

    let mut body = String::from("\n\n");
    for entry in ordered {
        let fragment = ctx.scoped(entry.id.as_str(), |ctx| {
            render_lecture(&entry.record, people, ctx)
        });
        body.push_str(&fragment);
    }
    format!("{}{body}{}", lectures_head(), lectures_foot())
}

/// Render one lecture as a `<div class='lecture'>` block.
pub fn render_lecture(lecture: &Lecture, people: &Corpus<Person>, ctx: &mut Context) -> String {
    let mut s = String::from("\n\n");
    s.push_str(&format!("<h2> {} </h2>\n\n", lecture.title));

    if !lecture.is_ready() {
        s.push_str(
            "<p class=\"notready\">This lecture is not ready for publishing yet; files are missing, \
             or the videos are not edited.</p>",
        );
    }

    if lecture.presenters.is_empty() {
        s.push_str("<p class=\"incomplete\">(No presenters specified.)</p>\n\n");
    } else {
        let names: Vec<String> = lecture
            .presenters
            .iter()
            .map(|id| presenter(id, people, ctx))
            .collect();
        s.push_str(&format!("<p>Presenters: {}</p>\n\n", names.join(", ")));
    }

    if lecture.vimeo.is_empty() {
        s.push_str("<p class=\"incomplete\">(Video not available yet.)</p>\n\n");
    }
    s.push_str("<table><tr>\n");
    for url in &lecture.vimeo {
        s.push_str("   <td>");
        s.push_str(&vimeo_player(url));
        s.push_str("</td>");
    }
    s.push_str("</tr></table>\n\n");

    if !lecture.files.is_empty() {
        s.push_str("<ul class=\"materials\">\n");
        for file in &lecture.files {
            s.push_str(&format!(" <li><a href=\"{}\">{}</a></li>\n", file.url, file.desc));
        }
        s.push_str("</ul>\n\n");
    }

    format!("<div class='lecture'>\n\n{}\n</div>\n\n", indent(&s, "    "))
}

fn presenter(id: &str, people: &Corpus<Person>, ctx: &mut Context) -> String {
    let Some(person) = people.get(id) else {
        ctx.warn(format!("No person '{id}'."));
        return id.to_string();
    };
    match person.name.as_deref() {
        None => id.to_string(),
        Some(name) if person.url.is_empty() => name.to_string(),
        Some(name) => format!("<a href='{}'>{name}</a>", person.url),
    }
}

/// Embedded player for a Vimeo page URL; the video id is the last path segment.
fn vimeo_player(url: &str) -> String {
    let video = url.rsplit('/').next().unwrap_or(url);
    format!(
        "\n\n<iframe src=\"{VIMEO_PLAYER}{video}\"\n        width=\"400\" height=\"281\" frameborder=\"0\"\n        webkitallowfullscreen mozallowfullscreen allowfullscreen></iframe>\n"
    )
}
