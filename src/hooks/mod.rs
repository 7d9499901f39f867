pub mod use_blog_list;
pub mod use_blog_detail;

pub use use_blog_list::{use_blog_list, UseBlogListHandle};
pub use use_blog_detail::{use_blog_detail, UseBlogDetailHandle};
