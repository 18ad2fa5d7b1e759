pub mod link;
pub mod api;

pub use link::{BucketKey, Category, Link, LinkBoard, Session};
pub use api::{ListData, ListResponse, MutationAction, MutationRequest, MutationResponse, Row};
