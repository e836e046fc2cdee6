//! UI Target Provider
//!
//! The narrow seam between the renderers and whatever hosts the page.
//! A provider looks targets up by id; a target accepts the handful of
//! mutations the renderers need.

use super::node::Node;

/// A named, pre-existing element that bind operations write into
pub trait UiTarget {
    /// Replace the element's content with plain text
    fn set_text(&mut self, text: &str);

    /// Set (or overwrite) an attribute
    fn set_attr(&mut self, name: &str, value: &str);

    /// Hide or reveal the element
    fn set_hidden(&mut self, hidden: bool);

    /// Discard every child and insert `children` in order
    fn replace_children(&mut self, children: Vec<Node>);

    /// Flip a class on the element, returning whether it is now present
    fn toggle_class(&mut self, class: &str) -> bool;
}

/// Looks up UI targets by identifier
pub trait TargetProvider {
    /// Target with the given id, or `None` when the page does not carry it
    fn target(&mut self, id: &str) -> Option<Box<dyn UiTarget + '_>>;
}

impl UiTarget for Node {
    fn set_text(&mut self, text: &str) {
        self.children.clear();
        self.text = text.to_string();
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn replace_children(&mut self, children: Vec<Node>) {
        self.text.clear();
        self.children = children;
    }

    fn toggle_class(&mut self, class: &str) -> bool {
        let mut classes: Vec<&str> = self
            .class
            .as_deref()
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default();

        let present = if let Some(pos) = classes.iter().position(|c| *c == class) {
            classes.remove(pos);
            false
        } else {
            classes.push(class);
            true
        };

        self.class = if classes.is_empty() {
            None
        } else {
            Some(classes.join(" "))
        };
        present
    }
}

impl<T: UiTarget + ?Sized> UiTarget for &mut T {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text)
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        (**self).set_attr(name, value)
    }

    fn set_hidden(&mut self, hidden: bool) {
        (**self).set_hidden(hidden)
    }

    fn replace_children(&mut self, children: Vec<Node>) {
        (**self).replace_children(children)
    }

    fn toggle_class(&mut self, class: &str) -> bool {
        (**self).toggle_class(class)
    }
}
