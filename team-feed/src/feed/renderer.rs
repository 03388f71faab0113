//! Atom renderer
//!
//! Renders channel metadata and entries to an Atom 1.0 document.

use atom_syndication::{
    Content, ContentBuilder, Entry, EntryBuilder, Feed, FeedBuilder, FixedDateTime,
    GeneratorBuilder, Link, LinkBuilder, Person, PersonBuilder, Text,
};

use crate::domain::entities::{ChannelMetadata, FeedEntry};

/// Render a complete Atom document, newest entry first
pub fn render_feed(channel: &ChannelMetadata, mut entries: Vec<FeedEntry>) -> String {
    sort_entries(&mut entries);

    let updated: FixedDateTime = channel.generated_at.into();

    let author: Person = PersonBuilder::default()
        .name(channel.author.clone())
        .build();

    let mut links: Vec<Link> = vec![LinkBuilder::default()
        .href(channel.link.clone())
        .rel("alternate".to_string())
        .build()];

    // Only a published feed URL may claim to be the document itself
    if let Some(href) = &channel.self_link {
        links.push(
            LinkBuilder::default()
                .href(href.clone())
                .rel("self".to_string())
                .mime_type(Some("application/atom+xml".to_string()))
                .build(),
        );
    }

    let feed: Feed = FeedBuilder::default()
        .title(Text::plain(channel.title.clone()))
        .id(channel.about.clone())
        .updated(updated)
        .authors(vec![author])
        .links(links)
        .generator(Some(
            GeneratorBuilder::default()
                .value(env!("CARGO_PKG_NAME"))
                .version(Some(env!("CARGO_PKG_VERSION").to_string()))
                .build(),
        ))
        .entries(entries.iter().map(to_atom_entry).collect::<Vec<_>>())
        .build();

    feed.to_string()
}

/// Newest first. `sort_by` is stable, so equal dates keep input order.
pub fn sort_entries(entries: &mut [FeedEntry]) {
    entries.sort_by(|a, b| b.published.cmp(&a.published));
}

fn to_atom_entry(entry: &FeedEntry) -> Entry {
    let link: Link = LinkBuilder::default()
        .href(entry.link.clone())
        .rel("alternate".to_string())
        .build();

    let authors: Vec<Person> = entry
        .author
        .as_ref()
        .map(|author| {
            vec![PersonBuilder::default()
                .name(author.name.clone())
                .uri(author.uri.clone())
                .build()]
        })
        .unwrap_or_default();

    let content: Option<Content> = entry.html_content.as_ref().map(|html| {
        ContentBuilder::default()
            .value(Some(html.clone()))
            .content_type(Some("html".to_string()))
            .build()
    });

    EntryBuilder::default()
        .title(Text::plain(entry.title.clone()))
        .id(entry.id.clone())
        .updated(entry.updated)
        .published(Some(entry.published))
        .links(vec![link])
        .authors(authors)
        .content(content)
        .build()
}
