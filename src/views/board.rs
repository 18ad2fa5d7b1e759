// ============================================================================
// BOARD VIEW - Projection of the link board + DOM rendering per bucket
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::config::CONFIG;
use crate::dom::{append_child, get_element_by_id, set_inner_html, ElementBuilder};
use crate::models::{BucketKey, Link, LinkBoard};
use crate::utils::{file_icon, is_absolute, normalize_url};
use crate::viewmodels::BoardViewModel;
use crate::views::link_item::render_link_item;

pub const EMPTY_NO_FILES: &str = "No files available";
pub const EMPTY_NO_MATCHES: &str = "No matching resources";

/// Everything one link node needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkItemView {
    pub name: String,
    pub href: String,
    pub icon: &'static str,
    pub external: bool,
    pub optimistic: bool,
    /// Index in the unfiltered bucket; `None` when deleting is not allowed
    pub delete_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketView {
    Empty { message: &'static str },
    Items(Vec<LinkItemView>),
}

impl BucketView {
    pub fn items(&self) -> &[LinkItemView] {
        match self {
            BucketView::Empty { .. } => &[],
            BucketView::Items(items) => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    buckets: Vec<(BucketKey, BucketView)>,
}

impl BoardView {
    pub fn bucket(&self, key: BucketKey) -> &BucketView {
        self.buckets
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, view)| view)
            .unwrap_or(&BucketView::Empty { message: EMPTY_NO_FILES })
    }

    pub fn iter(&self) -> impl Iterator<Item = &(BucketKey, BucketView)> {
        self.buckets.iter()
    }
}

fn project_link(index: usize, link: &Link, authorized: bool) -> LinkItemView {
    let href = normalize_url(&link.url);
    LinkItemView {
        name: link.name.clone(),
        external: is_absolute(&href),
        icon: file_icon(&link.url),
        href,
        optimistic: link.optimistic,
        delete_index: authorized.then_some(index),
    }
}

/// Pure projection: filters each bucket by a case-insensitive substring of the
/// name while keeping every item tied to its backing index. The board itself
/// is never reordered.
pub fn project_board(board: &LinkBoard, search_term: &str, authorized: bool) -> BoardView {
    let needle = search_term.to_lowercase();
    let searching = !needle.is_empty();

    let buckets = BucketKey::ALL
        .iter()
        .map(|&key| {
            let items: Vec<LinkItemView> = board
                .bucket(key)
                .iter()
                .enumerate()
                .filter(|(_, link)| !searching || link.name.to_lowercase().contains(&needle))
                .map(|(index, link)| project_link(index, link, authorized))
                .collect();

            let view = if items.is_empty() {
                BucketView::Empty {
                    message: if searching { EMPTY_NO_MATCHES } else { EMPTY_NO_FILES },
                }
            } else {
                BucketView::Items(items)
            };
            (key, view)
        })
        .collect();

    BoardView { buckets }
}

fn container_id(key: BucketKey) -> String {
    format!("{}Files", key.id())
}

/// Paints every `{bucket}Files` container from the current state
pub fn render_board(vm: &BoardViewModel) -> Result<(), JsValue> {
    let state = vm.state();
    let view = project_board(
        &state.links.borrow(),
        &state.get_search_term(),
        state.auth.is_authorized(),
    );

    for (key, bucket) in view.iter() {
        let Some(container) = get_element_by_id(&container_id(*key)) else {
            continue;
        };
        set_inner_html(&container, "");

        match bucket {
            BucketView::Empty { message } => {
                let empty = ElementBuilder::new("div")?
                    .class("file-item empty")
                    .icon("fa-inbox")?
                    .build();
                empty.append_with_str_1(&format!(" {}", message))?;
                append_child(&container, &empty)?;
            }
            BucketView::Items(items) => {
                for item in items {
                    let node = render_link_item(item, *key, vm)?;
                    append_child(&container, &node)?;
                }
            }
        }
    }
    Ok(())
}

/// Loading placeholders shown before the first paint
pub fn render_skeletons() -> Result<(), JsValue> {
    for key in BucketKey::ALL {
        let Some(container) = get_element_by_id(&container_id(key)) else {
            continue;
        };
        set_inner_html(&container, "");
        for _ in 0..CONFIG.ui_config.skeleton_count {
            let skeleton = ElementBuilder::new("div")?.class("skeleton").build();
            append_child(&container, &skeleton)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Session};

    const LAB: BucketKey = BucketKey::new(Session::Morning, Category::Lab);
    const QUIZ: BucketKey = BucketKey::new(Session::Afternoon, Category::Quiz);

    fn board() -> LinkBoard {
        let mut board = LinkBoard::default();
        board.push_unique(LAB, Link::new("Intro Lab", "www.uni.edu/intro"));
        board.push_unique(LAB, Link::new("Sorting", "handouts/sorting.pdf"));
        board.push_unique(LAB, Link::new("Lab: Graphs", "https://docs.google.com/document/d/xyz"));
        board.bucket_mut(LAB).push(Link::placeholder("Pending", "", 3));
        board
    }

    #[test]
    fn empty_term_shows_everything_in_order() {
        let view = project_board(&board(), "", false);
        let names: Vec<&str> = view.bucket(LAB).items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Intro Lab", "Sorting", "Lab: Graphs", "Pending"]);
        assert_eq!(view.bucket(QUIZ), &BucketView::Empty { message: EMPTY_NO_FILES });
    }

    #[test]
    fn search_is_case_insensitive_and_keeps_backing_indices() {
        let b = board();
        let view = project_board(&b, "LAB", true);
        let items = view.bucket(LAB).items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].delete_index, Some(0));
        assert_eq!(items[1].name, "Lab: Graphs");
        assert_eq!(items[1].delete_index, Some(2));
        assert_eq!(b, board());

        assert_eq!(view.bucket(QUIZ), &BucketView::Empty { message: EMPTY_NO_MATCHES });
    }

    #[test]
    fn no_match_uses_search_message() {
        let view = project_board(&board(), "zzz", true);
        assert_eq!(view.bucket(LAB), &BucketView::Empty { message: EMPTY_NO_MATCHES });
    }

    #[test]
    fn delete_action_only_when_authorized() {
        let view = project_board(&board(), "", false);
        assert!(view.bucket(LAB).items().iter().all(|i| i.delete_index.is_none()));
        let view = project_board(&board(), "", true);
        assert!(view.bucket(LAB).items().iter().all(|i| i.delete_index.is_some()));
    }

    #[test]
    fn items_carry_normalized_href_and_icon() {
        let view = project_board(&board(), "", false);
        let items = view.bucket(LAB).items();
        assert_eq!(items[0].href, "https://www.uni.edu/intro");
        assert!(items[0].external);
        assert_eq!(items[0].icon, "fa-external-link-alt");
        assert_eq!(items[1].href, "handouts/sorting.pdf");
        assert!(!items[1].external);
        assert_eq!(items[1].icon, "fa-file-pdf");
        assert_eq!(items[2].icon, "fa-file-pdf");
        assert_eq!(items[3].href, "#");
        assert!(items[3].optimistic);
    }

    #[test]
    fn projection_is_idempotent() {
        let b = board();
        assert_eq!(project_board(&b, "o", true), project_board(&b, "o", true));
        assert_eq!(project_board(&b, "", false), project_board(&b, "", false));
    }
}
