pub mod app;
pub mod header;
pub mod home;
pub mod user_info;
pub mod loader_spinner;
pub mod blog_item;
pub mod blog_list;
pub mod blog_item_details;
pub mod about;
pub mod contact;
pub mod not_found;

#[cfg(test)]
pub(crate) mod test_support;

pub use app::{App, AppShell};
pub use header::Header;
pub use home::Home;
pub use user_info::UserInfo;
pub use loader_spinner::LoaderSpinner;
pub use blog_item::BlogItem;
pub use blog_list::{BlogList, BlogListView};
pub use blog_item_details::{BlogDetailView, BlogItemDetails};
pub use about::About;
pub use contact::Contact;
pub use not_found::NotFound;
