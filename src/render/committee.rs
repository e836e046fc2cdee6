//! Committee Renderer

use super::{external_link, rebuild};
use crate::content::text::present;
use crate::content::CommitteeMember;
use crate::page::catalogue::COMMITTEE_GRID;
use crate::page::{Node, TargetProvider};

pub const MEMBER_NAME_DEFAULT: &str = "Nombre Apellido";

/// Replace the committee grid with one card per member, in order
pub fn render_committee<P: TargetProvider + ?Sized>(page: &mut P, members: &[CommitteeMember]) {
    rebuild(page, COMMITTEE_GRID, members.iter().map(member_card).collect());
}

/// Card for a single member. The focus line is always present, even
/// when empty.
pub fn member_card(member: &CommitteeMember) -> Node {
    let name = present(&member.name).unwrap_or(MEMBER_NAME_DEFAULT);
    let heading = Node::new("h3").class("h3").attr("style", "margin-bottom: 6px");

    let heading = match present(&member.url) {
        Some(url) => heading.child(external_link(url, name).class("committee-name")),
        None => heading.text(name),
    };

    let focus = present(&member.focus).unwrap_or("");

    Node::new("article")
        .class("card")
        .child(heading)
        .child(Node::new("p").class("text").text(focus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;

    fn member(json: &str) -> CommitteeMember {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_linked_member() {
        let card = member_card(&member(
            r#"{"name": "Ada Lovelace", "url": "https://example.org/ada", "focus": "Algorithms"}"#,
        ));

        let heading = &card.children[0];
        assert_eq!(heading.text, "");
        let link = &heading.children[0];
        assert_eq!(link.tag, "a");
        assert_eq!(link.text, "Ada Lovelace");
        assert_eq!(link.get_attr("href"), Some("https://example.org/ada"));
        assert_eq!(link.get_attr("rel"), Some("noopener noreferrer"));
        assert!(link.has_class("committee-name"));

        assert_eq!(card.children[1].text, "Algorithms");
    }

    #[test]
    fn test_plain_member_keeps_empty_focus_line() {
        let card = member_card(&CommitteeMember::default());

        assert_eq!(card.children.len(), 2);
        let heading = &card.children[0];
        assert!(heading.children.is_empty());
        assert_eq!(heading.text, MEMBER_NAME_DEFAULT);

        let focus = &card.children[1];
        assert_eq!(focus.tag, "p");
        assert_eq!(focus.text, "");
    }

    #[test]
    fn test_grid_replaced_in_order() {
        let mut page = MemoryPage::with_targets(&[COMMITTEE_GRID]);
        let members = vec![
            member(r#"{"name": "B"}"#),
            member(r#"{"name": "A", "url": "https://a.org"}"#),
        ];

        render_committee(&mut page, &members);
        render_committee(&mut page, &members);

        let grid = page.get(COMMITTEE_GRID).unwrap();
        assert_eq!(grid.children.len(), 2);
        assert_eq!(grid.children[0].children[0].text_content(), "B");
        assert_eq!(grid.children[1].children[0].text_content(), "A");
    }
}
