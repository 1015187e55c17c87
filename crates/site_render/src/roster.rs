//! The roster page: one table, one heading row per section, one row per person.

use crate::assets::AssetProbe;
use crate::templates::ROSTER_STYLE;
use serde::{Deserialize, Serialize};
use site_records::{
    missing_count, order_roster, roster_sort_key, select, Context, Corpus, Entry, Level, Person,
    TagQuery,
};

/// One group of the roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSection {
    /// Heading row text.
    pub title: String,
    /// People carrying any of these tags are listed.
    pub tags: Vec<String>,
    /// Expected head count; shortfalls get a placeholder row.
    #[serde(default)]
    pub expected: Option<usize>,
}

impl RosterSection {
    fn new(title: &str, tags: &[&str], expected: Option<usize>) -> Self {
        Self {
            title: title.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            expected,
        }
    }
}

/// Where photos live and which sections the roster shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterSettings {
    /// Prefix of every photo URL.
    pub photo_base_url: String,
    /// Site-relative directory of staff photos, named `<person id>.jpg`.
    pub staff_media_dir: String,
    /// Photo shown when a person has none.
    pub missing_photo: String,
    /// Where people add themselves; linked from placeholder rows.
    pub db_url: String,
    /// Sections in page order.
    pub sections: Vec<RosterSection>,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            photo_base_url: "http://duckietown.mit.edu/".to_string(),
            staff_media_dir: "media/staff".to_string(),
            missing_photo: "MISSING.jpg".to_string(),
            db_url: "https://github.com/duckietown/website/tree/gh-pages/media/staff".to_string(),
            sections: vec![
                RosterSection::new("Duckietown Engineering Co.", &["management"], None),
                RosterSection::new("Advisory board", &["advisory"], None),
                RosterSection::new("Sponsors", &["sponsors"], None),
                RosterSection::new("Operations", &["operations"], Some(24)),
                RosterSection::new("Special Operations", &["special-ops"], None),
                RosterSection::new(
                    "Duckietown Engineering Training Program",
                    &["training"],
                    Some(26),
                ),
            ],
        }
    }
}

/// Render the full roster page.
pub fn render_roster_page(
    people: &Corpus<Person>,
    settings: &RosterSettings,
    assets: &dyn AssetProbe,
    ctx: &mut Context,
) -> String {
    let mut s = format!("  \n\n{ROSTER_STYLE}\n\n\n<table id='roster'>\n");
    for (index, section) in settings.sections.iter().enumerate() {
        let id = if index == 0 { " id=\"first\"" } else { "" };
        s.push_str(&format!(
            "\n<tr class='roles'{id}> <td colspan=\"2\"> {} </td> </tr>\n",
            section.title
        ));
        s.push_str(&render_section(people, section, settings, assets, ctx));
    }
    s.push_str("\n</table>  ");
    s
}

fn render_section(
    people: &Corpus<Person>,
    section: &RosterSection,
    settings: &RosterSettings,
    assets: &dyn AssetProbe,
    ctx: &mut Context,
) -> String {
    let mut rows = select(people, &TagQuery::Any(section.tags.clone()));
    order_roster(&mut rows);

    for entry in &rows {
        let person = &entry.record;
        ctx.emit(
            Level::Debug,
            format!(
                "score {:?} -> {}",
                person.name,
                roster_sort_key(person.order, person.name.as_deref())
            ),
        );
    }
    let ids: Vec<&str> = rows.iter().map(|e| e.id.as_str()).collect();
    ctx.emit(
        Level::Info,
        format!(
            "tags {:?}: {} selected: {}",
            section.tags,
            rows.len(),
            ids.join(", ")
        ),
    );

    let mut s = String::new();
    for entry in &rows {
        let row = render_person(entry, settings, assets, ctx);
        s.push_str(&format!("\n\n{row}\n\n"));
    }

    let missing = missing_count(section.expected, rows.len());
    if missing > 0 {
        s.push_str(&format!(
            "\n\n<tr class=\"missing\"><td colspan=\"2\">(Plus other {missing} people who have not yet \
             added their bio <a href=\"{}\">in our DB</a>.)</td></tr>\n\n",
            settings.db_url
        ));
    }
    s
}

/// Render one person's table row.
pub fn render_person(
    entry: &Entry<Person>,
    settings: &RosterSettings,
    assets: &dyn AssetProbe,
    ctx: &mut Context,
) -> String {
    let Entry { id, record: person } = entry;

    let mut photo = format!("{}/{id}.jpg", settings.staff_media_dir);
    if !assets.exists(&photo) {
        ctx.emit(Level::Warn, format!("Image {photo:?} does not exist"));
        photo = format!("{}/{}", settings.staff_media_dir, settings.missing_photo);
    }

    let name = match person.name.as_deref() {
        Some(name) => name.to_string(),
        None => format!("(\"{id}\" should add information in DB)"),
    };

    let mut s = format!(
        "<tr><td class='photo'><img class=\"person\" src=\"{}{photo}\"/></td><td>",
        settings.photo_base_url
    );
    if person.url.is_empty() {
        s.push_str(&format!("<span class=\"name\"> {name}</span>"));
    } else {
        s.push_str(&format!(
            "<span class=\"name\"><a href=\"{}\">{name}</a></span>",
            person.url
        ));
    }
    s.push_str(&format!("<br/><span class=\"position\">{}</span>", person.position));

    if let Some(note) = &person.roster_note {
        s.push_str(&format!("<p>{note}</p>"));
    }

    let bio = person.bio.trim();
    if !bio.is_empty() {
        s.push_str(&format!("<p><span class=\"bio\">{bio}</span></p>"));
    }
    s.push_str("</td></tr>");
    s
}
