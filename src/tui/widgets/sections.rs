use crate::model::{category::Category, section::Section};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, StatefulWidget},
};
use tracing::error;
use tui_tree_widget::{Tree, TreeItem, TreeState};

/// Identifies a row in the list. Item rows are only unique among the rows of their section,
/// which is all the tree needs since it addresses rows by their path.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum RowId {
    Section(Category),
    Item(usize),
}

impl Default for RowId {
    fn default() -> Self {
        RowId::Section(Category::default())
    }
}

#[derive(Debug)]
pub struct State {
    /// Records which row is selected. Every section is always expanded.
    tree: TreeState<RowId>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        let mut tree = TreeState::default();
        for category in Category::ALL {
            tree.open(vec![RowId::Section(category)]);
        }
        tree.select(vec![RowId::Section(Category::ALL[0])]);
        Self { tree }
    }

    #[must_use]
    pub fn selected(&self) -> Vec<RowId> {
        self.tree.selected()
    }

    /// Selects the last item of a section, so the next render scrolls it into view.
    pub fn select_last_item(&mut self, section: &Section) {
        let path = match section.items.len().checked_sub(1) {
            Some(last) => vec![RowId::Section(section.title), RowId::Item(last)],
            None => vec![RowId::Section(section.title)],
        };
        self.tree.select(path);
    }

    pub fn handle_key(&mut self, key: KeyEvent, sections: &[Section]) {
        let Ok(tree_items) = build_tree(sections) else {
            return;
        };
        match key.code {
            KeyCode::Down => {
                self.tree.key_down(&tree_items);
            }
            KeyCode::Up => {
                self.tree.key_up(&tree_items);
            }
            KeyCode::Home => {
                self.tree.select_first(&tree_items);
            }
            _ => {}
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds one expandable row per section, holding one row per item.
fn build_tree(sections: &[Section]) -> std::io::Result<Vec<TreeItem<'static, RowId>>> {
    sections
        .iter()
        .map(|section| {
            let rows = section
                .items
                .iter()
                .enumerate()
                .map(|(index, item)| TreeItem::new_leaf(RowId::Item(index), item.clone()))
                .collect();
            TreeItem::new(RowId::Section(section.title), header(section), rows)
        })
        .collect()
}

fn header(section: &Section) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            section.title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({})", section.items.len()),
            Style::default().fg(Color::Gray),
        ),
    ])
}

#[derive(Debug)]
pub struct Widget<'a> {
    sections: &'a [Section],
    focused: bool,
}

impl<'a> Widget<'a> {
    #[must_use]
    pub fn new(sections: &'a [Section], focused: bool) -> Self {
        Self { sections, focused }
    }
}

impl<'a> StatefulWidget for Widget<'a> {
    type State = State;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let tree = match build_tree(self.sections).and_then(Tree::new) {
            Ok(tree) => tree,
            Err(err) => {
                error!(%err, "could not build the item list");
                return;
            }
        };

        let mut tree = tree.block(
            Block::default()
                .borders(Borders::ALL)
                .title("Items")
                .border_style(Style::default().fg(if self.focused {
                    Color::Yellow
                } else {
                    Color::Gray
                })),
        );

        // only show the selection while the list has focus
        if self.focused {
            tree = tree.highlight_style(
                Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            );
        }

        StatefulWidget::render(tree, area, buf, &mut state.tree);
    }
}
