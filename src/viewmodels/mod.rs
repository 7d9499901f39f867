pub mod blog_list_viewmodel;
pub mod blog_detail_viewmodel;

pub use blog_list_viewmodel::BlogListViewModel;
pub use blog_detail_viewmodel::BlogDetailViewModel;
