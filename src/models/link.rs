use serde::{Deserialize, Serialize};
use std::fmt;

/// A named resource link. `optimistic` links are placeholders waiting for the
/// endpoint to confirm an add; `temp_id` identifies them for rollback.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Link {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optimistic: bool,
    #[serde(default, rename = "tempId", skip_serializing_if = "Option::is_none")]
    pub temp_id: Option<u64>,
}

impl Link {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            optimistic: false,
            temp_id: None,
        }
    }

    pub fn placeholder(name: impl Into<String>, url: impl Into<String>, temp_id: u64) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            optimistic: true,
            temp_id: Some(temp_id),
        }
    }

    /// Same (name, url) pair, ignoring placeholder bookkeeping
    pub fn same_resource(&self, other: &Link) -> bool {
        self.name == other.name && self.url == other.url
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub enum Session {
    Morning,
    Afternoon,
}

impl Session {
    pub const ALL: [Session; 2] = [Session::Morning, Session::Afternoon];

    /// Name used by the endpoint (`"Morning"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Session::Morning => "Morning",
            Session::Afternoon => "Afternoon",
        }
    }

    /// Prefix of the bucket ids (`"morning"`)
    pub fn prefix(&self) -> &'static str {
        match self {
            Session::Morning => "morning",
            Session::Afternoon => "afternoon",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub enum Category {
    Lab,
    LabSolution,
    Quiz,
    QuizSolution,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Lab,
        Category::LabSolution,
        Category::Quiz,
        Category::QuizSolution,
    ];

    /// Column value stored in the spreadsheet (`"labSolution"`)
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Category::Lab => "lab",
            Category::LabSolution => "labSolution",
            Category::Quiz => "quiz",
            Category::QuizSolution => "quizSolution",
        }
    }

    pub fn from_sheet_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.sheet_name() == name)
    }

    /// Suffix of the bucket ids (`"LabSolution"`)
    pub fn suffix(&self) -> &'static str {
        match self {
            Category::Lab => "Lab",
            Category::LabSolution => "LabSolution",
            Category::Quiz => "Quiz",
            Category::QuizSolution => "QuizSolution",
        }
    }
}

/// One of the eight category buckets, e.g. `morningLabSolution`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BucketKey {
    pub session: Session,
    pub category: Category,
}

impl BucketKey {
    pub const ALL: [BucketKey; 8] = [
        BucketKey::new(Session::Morning, Category::Lab),
        BucketKey::new(Session::Morning, Category::LabSolution),
        BucketKey::new(Session::Morning, Category::Quiz),
        BucketKey::new(Session::Morning, Category::QuizSolution),
        BucketKey::new(Session::Afternoon, Category::Lab),
        BucketKey::new(Session::Afternoon, Category::LabSolution),
        BucketKey::new(Session::Afternoon, Category::Quiz),
        BucketKey::new(Session::Afternoon, Category::QuizSolution),
    ];

    pub const fn new(session: Session, category: Category) -> Self {
        Self { session, category }
    }

    pub fn id(&self) -> String {
        format!("{}{}", self.session.prefix(), self.category.suffix())
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.session.prefix(), self.category.suffix())
    }
}

/// The in-memory link map. Serializes to the same JSON shape the page cache
/// has always used (`{"morningLab": [...], ...}`); missing buckets read as empty.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkBoard {
    pub morning_lab: Vec<Link>,
    pub morning_lab_solution: Vec<Link>,
    pub morning_quiz: Vec<Link>,
    pub morning_quiz_solution: Vec<Link>,
    pub afternoon_lab: Vec<Link>,
    pub afternoon_lab_solution: Vec<Link>,
    pub afternoon_quiz: Vec<Link>,
    pub afternoon_quiz_solution: Vec<Link>,
}

impl LinkBoard {
    pub fn bucket(&self, key: BucketKey) -> &[Link] {
        use Category::*;
        use Session::*;
        match (key.session, key.category) {
            (Morning, Lab) => &self.morning_lab,
            (Morning, LabSolution) => &self.morning_lab_solution,
            (Morning, Quiz) => &self.morning_quiz,
            (Morning, QuizSolution) => &self.morning_quiz_solution,
            (Afternoon, Lab) => &self.afternoon_lab,
            (Afternoon, LabSolution) => &self.afternoon_lab_solution,
            (Afternoon, Quiz) => &self.afternoon_quiz,
            (Afternoon, QuizSolution) => &self.afternoon_quiz_solution,
        }
    }

    pub fn bucket_mut(&mut self, key: BucketKey) -> &mut Vec<Link> {
        use Category::*;
        use Session::*;
        match (key.session, key.category) {
            (Morning, Lab) => &mut self.morning_lab,
            (Morning, LabSolution) => &mut self.morning_lab_solution,
            (Morning, Quiz) => &mut self.morning_quiz,
            (Morning, QuizSolution) => &mut self.morning_quiz_solution,
            (Afternoon, Lab) => &mut self.afternoon_lab,
            (Afternoon, LabSolution) => &mut self.afternoon_lab_solution,
            (Afternoon, Quiz) => &mut self.afternoon_quiz,
            (Afternoon, QuizSolution) => &mut self.afternoon_quiz_solution,
        }
    }

    /// Appends unless the bucket already holds the same (name, url) pair
    pub fn push_unique(&mut self, key: BucketKey, link: Link) -> bool {
        let bucket = self.bucket_mut(key);
        if bucket.iter().any(|l| l.same_resource(&link)) {
            return false;
        }
        bucket.push(link);
        true
    }

    pub fn total_links(&self) -> usize {
        BucketKey::ALL.iter().map(|k| self.bucket(*k).len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_ids_match_page_containers() {
        let ids: Vec<String> = BucketKey::ALL.iter().map(|k| k.id()).collect();
        assert_eq!(ids[0], "morningLab");
        assert_eq!(ids[3], "morningQuizSolution");
        assert_eq!(ids[5], "afternoonLabSolution");
        assert_eq!(BucketKey::parse("afternoonQuiz"), Some(BucketKey::new(Session::Afternoon, Category::Quiz)));
        assert_eq!(BucketKey::parse("eveningLab"), None);
    }

    #[test]
    fn sheet_category_names() {
        assert_eq!(Category::from_sheet_name("quizSolution"), Some(Category::QuizSolution));
        assert_eq!(Category::from_sheet_name("QuizSolution"), None);
        assert_eq!(Category::from_sheet_name("other"), None);
    }

    #[test]
    fn board_json_shape_matches_cache_document() {
        let mut board = LinkBoard::default();
        board.push_unique(BucketKey::ALL[1], Link::new("Sol 1", "https://x.io/s1.pdf"));

        let json: serde_json::Value = serde_json::to_value(&board).unwrap();
        assert_eq!(json["morningLabSolution"][0]["name"], "Sol 1");
        assert!(json["morningLabSolution"][0].get("optimistic").is_none());
        assert!(json["afternoonQuizSolution"].as_array().unwrap().is_empty());

        let partial: LinkBoard = serde_json::from_str(r#"{"morningLab":[{"name":"a","url":"b"}]}"#).unwrap();
        assert_eq!(partial.morning_lab.len(), 1);
        assert!(partial.afternoon_lab.is_empty());
    }

    #[test]
    fn placeholder_fields_use_camel_case() {
        let link = Link::placeholder("Syllabus", "www.example.com/x", 7);
        let json = serde_json::to_string(&link).unwrap();
        assert!(json.contains("\"tempId\":7"));
        assert!(json.contains("\"optimistic\":true"));
    }

    #[test]
    fn push_unique_skips_duplicates() {
        let mut board = LinkBoard::default();
        let key = BucketKey::ALL[0];
        assert!(board.push_unique(key, Link::new("a", "u")));
        assert!(!board.push_unique(key, Link::new("a", "u")));
        assert!(board.push_unique(key, Link::new("a", "v")));
        assert_eq!(board.bucket(key).len(), 2);
        assert_eq!(board.total_links(), 2);
    }
}
