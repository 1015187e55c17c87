//! Fixed page chrome shared by the renderers.

/// Credit line printed above and below the lecture listing.
pub const LECTURE_CREDITS: &str =
    "*Lectures recorded by [Chris Welch](http://chriswelchphotography.com) and Sasha Galitsky.*";

/// Style block of the lectures page.
pub const LECTURES_STYLE: &str = r#"<style type='text/css'>
    .notready, .incomplete { color: red }
    div.lecture {margin: 1em }
    span.lecture_id { color: gray; font-size: smaller }
    div.lecture h2 { margin-left: -1em}
</style>"#;

/// Style block that opens the roster page.
pub const ROSTER_STYLE: &str = r#"<style type='text/css'>
    table#roster TD {  vertical-align: top;}
    table#roster  tr td:first-child { text-align: center;}
    table#roster  tr td { padding-left: 2em; }
    tr.roles td {padding-top: 2em; margin-right: -4em; font-size: 150%;
    color: #004; font-weight: bold; }

    table#roster  tr td {padding-top: 2em;}
    h1 {display: none;}

    .position {font-weight: bold; }
    td.photo {width: 10em; }
    .bio { font-size: 90%; line-height: 80%;}
</style>"#;

/// Icon shown before every document title.
pub const ICON_GDOC: &str = "<img class='icon' src='media/gdoc.png'/>";

/// Icon shown in the static PDF link.
pub const ICON_PDF: &str = "<img class='icon' src='media/pdf.gif'/>";

/// Head of the lectures page: front matter, credits, and styles.
pub fn lectures_head() -> String {
    format!(
        "---\nlayout: page\ntitle: Lectures\npermalink: lectures.html\n---\n\n\n{LECTURE_CREDITS}\n\n{LECTURES_STYLE}\n\n"
    )
}

/// Foot of the lectures page.
pub fn lectures_foot() -> String {
    format!("\n\n{LECTURE_CREDITS}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lectures_head_starts_with_front_matter() {
        let head = lectures_head();
        assert!(head.starts_with("---\nlayout: page\ntitle: Lectures\n"));
        assert!(head.contains("permalink: lectures.html\n---\n"));
        assert!(head.contains(".notready, .incomplete { color: red }"));
    }
}
