//! Todo list footer
//!
//! Shows how many items are left, the All/Active/Completed filter links and,
//! when anything is completed, a "Clear completed" button. The host page
//! wires the button's click handler by its id.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::dom::RenderBackend;
use crate::error::Result;
use crate::utils::pluralize;

/// Element id of the clear button
pub const CLEAR_COMPLETED_ID: &str = "clear-completed";

/// Which items the list is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    pub const ALL: [TodoFilter; 3] = [TodoFilter::All, TodoFilter::Active, TodoFilter::Completed];

    pub fn href(&self) -> &'static str {
        match self {
            TodoFilter::All => "#/",
            TodoFilter::Active => "#/active",
            TodoFilter::Completed => "#/completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TodoFilter::All => "All",
            TodoFilter::Active => "Active",
            TodoFilter::Completed => "Completed",
        }
    }
}

impl FromStr for TodoFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" | "" => Ok(TodoFilter::All),
            "active" => Ok(TodoFilter::Active),
            "completed" => Ok(TodoFilter::Completed),
            _ => Err(format!("Unknown filter: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoFooter {
    /// Active (not completed) items
    pub count: usize,
    pub completed_count: usize,
    pub now_showing: TodoFilter,
}

impl TodoFooter {
    pub fn render<B: RenderBackend>(&self, backend: &mut B, mount: &B::Node) -> Result<()> {
        let footer = self.build(backend)?;
        backend.append_child(mount, &footer)
    }

    pub fn build<B: RenderBackend>(&self, backend: &mut B) -> Result<B::Node> {
        let footer = backend.create_element("footer")?;
        backend.set_attribute(&footer, "id", "footer")?;

        let todo_count = backend.create_element("span")?;
        backend.set_attribute(&todo_count, "id", "todo-count")?;
        let strong = backend.create_element("strong")?;
        backend.append_text(&strong, &self.count.to_string())?;
        backend.append_child(&todo_count, &strong)?;
        backend.append_text(&todo_count, &format!(" {} left", pluralize(self.count, "item")))?;
        backend.append_child(&footer, &todo_count)?;

        let filters = backend.create_element("ul")?;
        backend.set_attribute(&filters, "id", "filters")?;
        for (i, filter) in TodoFilter::ALL.iter().enumerate() {
            if i > 0 {
                backend.append_text(&filters, " ")?;
            }
            let item = backend.create_element("li")?;
            let link = backend.create_element("a")?;
            backend.set_attribute(&link, "href", filter.href())?;
            let class = if *filter == self.now_showing { "selected" } else { "" };
            backend.set_attribute(&link, "class", class)?;
            backend.append_text(&link, filter.label())?;
            backend.append_child(&item, &link)?;
            backend.append_child(&filters, &item)?;
        }
        backend.append_child(&footer, &filters)?;

        if self.completed_count > 0 {
            let button = backend.create_element("button")?;
            backend.set_attribute(&button, "id", CLEAR_COMPLETED_ID)?;
            backend.append_text(&button, "Clear completed")?;
            backend.append_child(&footer, &button)?;
        }

        Ok(footer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeTree;

    fn render(footer: &TodoFooter) -> (NodeTree, crate::dom::NodeId) {
        let mut tree = NodeTree::new();
        let mount = tree.create_element("section").unwrap();
        footer.render(&mut tree, &mount).unwrap();
        let node = tree.children(mount)[0];
        (tree, node)
    }

    #[test]
    fn test_count_label() {
        let (tree, footer) = render(&TodoFooter { count: 1, ..Default::default() });
        let span = tree.children_by_tag(footer, "span")[0];
        assert_eq!(tree.text_content(span), "1 item left");

        let (tree, footer) = render(&TodoFooter { count: 3, ..Default::default() });
        let span = tree.children_by_tag(footer, "span")[0];
        assert_eq!(tree.text_content(span), "3 items left");
    }

    #[test]
    fn test_selected_filter() {
        let (tree, footer) = render(&TodoFooter {
            now_showing: TodoFilter::Active,
            ..Default::default()
        });
        let links = tree.find_all(footer, "a");
        assert_eq!(links.len(), 3);

        let classes: Vec<_> = links.iter().map(|l| tree.attribute(*l, "class")).collect();
        assert_eq!(classes, vec![Some(""), Some("selected"), Some("")]);
        assert_eq!(tree.attribute(links[2], "href"), Some("#/completed"));
    }

    #[test]
    fn test_clear_button_only_with_completed_items() {
        let (tree, footer) = render(&TodoFooter::default());
        assert!(tree.find_all(footer, "button").is_empty());

        let (tree, footer) = render(&TodoFooter {
            count: 2,
            completed_count: 1,
            now_showing: TodoFilter::All,
        });
        let buttons = tree.find_all(footer, "button");
        assert_eq!(buttons.len(), 1);
        assert_eq!(tree.attribute(buttons[0], "id"), Some(CLEAR_COMPLETED_ID));
        assert_eq!(tree.text_content(buttons[0]), "Clear completed");
    }

    #[test]
    fn test_footer_html() {
        let mut tree = NodeTree::new();
        let footer = TodoFooter { count: 0, completed_count: 0, now_showing: TodoFilter::All }
            .build(&mut tree)
            .unwrap();
        assert_eq!(
            tree.to_html(footer),
            concat!(
                r##"<footer id="footer"><span id="todo-count"><strong>0</strong> items left</span>"##,
                r##"<ul id="filters"><li><a href="#/" class="selected">All</a></li> "##,
                r##"<li><a href="#/active" class="">Active</a></li> "##,
                r##"<li><a href="#/completed" class="">Completed</a></li></ul></footer>"##
            )
        );
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("Completed".parse::<TodoFilter>().unwrap(), TodoFilter::Completed);
        assert_eq!("".parse::<TodoFilter>().unwrap(), TodoFilter::All);
        assert!("done".parse::<TodoFilter>().is_err());
    }
}
