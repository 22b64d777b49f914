use crate::{
    Catalogue, Link, Section, Song, VideoLink,
    markup::{Element, Node, raw},
};

/// Where the generated page says it came from.
pub const REPOSITORY_URL: &str = "https://github.com/rinsuki-lab/good-cinderella-songs";

const STYLE: &str = r#"dt > .title {
    font-weight: bold;
}
.unofficial {
    opacity: 0.333;
}
del {
    opacity: 0.25;
    font-size: 0.75em;
}

dd > ul {
    margin-top: 0.5em;
    padding-inline-start: 16px;
}

input#hide-otaku-message:checked ~ section > dl p.otaku-message {
    display: none;
}"#;

/// The checkbox that hides song commentary.
const HIDE_MESSAGE_ID: &str = "hide-otaku-message";

/// Render the catalogue as a complete HTML document.
///
/// Descriptions are inserted as-is; everything else is escaped.
///
/// # Errors
///
/// Returns an error if a song's links cannot be encoded as JSON.
pub fn render_page(catalogue: &Catalogue) -> serde_json::Result<String> {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charSet", "UTF-8"))
        .child(Element::new("title").child(catalogue.title.as_str()))
        .child(Element::new("style").child(raw(STYLE)))
        .child(
            Element::new("meta")
                .attr("name", "generator")
                .attr("content", format!("{REPOSITORY_URL} w/ songbook")),
        );

    let sections = catalogue
        .sections
        .iter()
        .map(section)
        .collect::<serde_json::Result<Vec<_>>>()?;

    let body = Element::new("body")
        .child(Element::new("h1").child(catalogue.title.as_str()))
        .child(Element::new("p").child(raw(&catalogue.description)))
        .child(
            Element::new("input")
                .attr("type", "checkbox")
                .attr("id", HIDE_MESSAGE_ID),
        )
        .child(
            Element::new("label")
                .attr("for", HIDE_MESSAGE_ID)
                .child("オタクの語彙力のない説明文を隠す"),
        )
        .child(Element::new("h2").child(format!("目次 (合計{}曲)", catalogue.song_count())))
        .child(table_of_contents(catalogue))
        .children(sections)
        .child(Element::new("hr"))
        .child("このHTMLはYAMLで書いたデータからスクリプトで生成しました。")
        .child(
            Element::new("a")
                .attr("href", REPOSITORY_URL)
                .child("詳しくは GitHub を見てください"),
        )
        .child("。");

    let html = Element::new("html")
        .attr("lang", "ja")
        .child(head)
        .child(body);

    let mut out = String::from("<!DOCTYPE html>\n");
    Node::from(html).render_into(&mut out);
    Ok(out)
}

fn table_of_contents(catalogue: &Catalogue) -> Element {
    Element::new("ul").children(catalogue.sections.iter().map(|section| {
        Element::new("li").child(
            Element::new("a")
                .attr("href", format!("#{}", section.id))
                .child(format!("{} ({}曲)", section.title, section.songs.len())),
        )
    }))
}

fn section(section: &Section) -> serde_json::Result<Element> {
    let mut list = Element::new("dl");
    for song in &section.songs {
        let (term, definition) = song_entry(song)?;
        list = list.child(term).child(definition);
    }

    Ok(Element::new("section")
        .attr("id", section.id.as_str())
        .child(Element::new("h2").child(section.title.as_str()))
        .children(
            section
                .description
                .as_deref()
                .map(|description| Element::new("p").child(raw(description))),
        )
        .child(list))
}

fn song_entry(song: &Song) -> serde_json::Result<(Element, Element)> {
    let term = Element::new("dt")
        .attr("data-links", serde_json::to_string(&song.links)?)
        .child(
            Element::new("span")
                .attr("class", "title")
                .child(song.title.as_str()),
        );

    let definition = Element::new("dd")
        .child(
            Element::new("ul").children(
                song.links
                    .iter()
                    .map(|link| Element::new("li").child(link_item(link))),
            ),
        )
        .child(
            Element::new("p")
                .attr("class", "otaku-message")
                .child(raw(&song.description)),
        );

    Ok((term, definition))
}

fn link_item(link: &Link) -> Node {
    let anchor = |href: String, label: String| Element::new("a").attr("href", href).child(label);

    match link {
        Link::Video(video) => video_anchor(video).into(),
        Link::Work(id) => anchor(
            format!("https://musicbrainz.org/work/{id}"),
            "MB: Work".to_string(),
        )
        .into(),
        Link::ReleaseGroup(id) => anchor(
            format!("https://musicbrainz.org/release-group/{id}"),
            "MB: Release Group".to_string(),
        )
        .into(),
        Link::Recording(id) => anchor(
            format!("https://musicbrainz.org/recording/{id}"),
            "MB: Recording".to_string(),
        )
        .into(),
        Link::DigitalRelease { id, hi_res } => {
            let mut label = "OTOTOY 配信".to_string();
            if *hi_res {
                label += " (ハイレゾ)";
            }
            anchor(format!("https://ototoy.jp/_/default/p/{id}"), label).into()
        }
        Link::Grouped(grouped) => {
            let mut text = format!("デレスポ「{}」内", grouped.group);
            if let Some(chapter) = grouped.stage_commu.filter(|&chapter| chapter != 0) {
                text += &format!(" (デレステ: ストーリーコミュ{chapter}話)");
            }
            if grouped.stage_purchase {
                text += " (デレステ: サウンドブースでの購入で開放)";
            }
            Node::Text(text)
        }
    }
}

fn video_anchor(video: &VideoLink) -> Element {
    Element::new("a")
        .attr("href", video.url())
        .attr_opt("class", video.unofficial.then_some("unofficial"))
        .child(format!("YouTube {}", video.text))
}
