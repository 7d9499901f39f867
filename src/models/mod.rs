pub mod blog;

pub use blog::{BlogDetail, BlogSummary, RawBlogDetail, RawBlogSummary};
