//! Data model of the query results the components render.

pub mod article_reply;
pub mod errors;
pub mod feedback;
pub mod hyperlink;
pub mod reply;
pub mod timestamp;
pub mod user;

pub use article_reply::{ArticleReply, ArticleReplyForUser, ArticleReplyKey};
pub use errors::ModelError;
pub use feedback::{ArticleReplyFeedback, FeedbackRequest, FeedbackVote};
pub use hyperlink::Hyperlink;
pub use reply::{Reply, ReplyType};
pub use timestamp::Timestamp;
pub use user::User;
