pub mod articles;
pub mod error;
pub mod replies;
pub mod reply;

pub use articles::ArticlesPage;
pub use error::ErrorPage;
pub use replies::RepliesPage;
pub use reply::ReplyPage;
