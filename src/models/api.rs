use serde::{Deserialize, Deserializer, Serialize};
use crate::models::link::{BucketKey, Category, Link, LinkBoard, Session};

/// One spreadsheet row as returned by `?action=list`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Row {
    pub category: String,
    pub name: String,
    pub url: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ListData {
    #[serde(rename = "Morning", default, deserialize_with = "null_as_empty")]
    pub morning: Vec<Row>,
    #[serde(rename = "Afternoon", default, deserialize_with = "null_as_empty")]
    pub afternoon: Vec<Row>,
}

/// A session sent as `null` reads the same as a missing one
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Row>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Row>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ListData {
    pub fn rows(&self, session: Session) -> &[Row] {
        match session {
            Session::Morning => &self.morning,
            Session::Afternoon => &self.afternoon,
        }
    }

    /// Builds a fresh board from the canonical rows. Unknown categories are
    /// dropped and repeated (name, url) pairs within a bucket are collapsed.
    pub fn into_board(self) -> LinkBoard {
        let mut board = LinkBoard::default();
        for session in Session::ALL {
            for row in self.rows(session) {
                let Some(category) = Category::from_sheet_name(&row.category) else {
                    log::warn!("⚠️ [LIST] Ignoring row '{}' with unknown category '{}'", row.name, row.category);
                    continue;
                };
                board.push_unique(
                    BucketKey::new(session, category),
                    Link::new(row.name.clone(), row.url.clone()),
                );
            }
        }
        board
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ListResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<ListData>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum MutationAction {
    Add,
    Delete,
}

/// POST body for add/delete
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MutationRequest {
    pub action: MutationAction,
    pub session: Session,
    pub category: String,
    pub name: String,
    pub url: String,
    pub token: String,
}

impl MutationRequest {
    pub fn new(action: MutationAction, key: BucketKey, link: &Link, token: Option<String>) -> Self {
        Self {
            action,
            session: key.session,
            category: key.category.sheet_name().to_string(),
            name: link.name.clone(),
            url: link.url.clone(),
            token: token.unwrap_or_default(),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
