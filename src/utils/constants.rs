/// Static image assets used by the page shell and the static pages
pub const LOGO_IMG_URL: &str = "https://assets.ccbp.in/frontend/react-js/wave-logo-img.png";
pub const PROFILE_IMG_URL: &str = "https://assets.ccbp.in/frontend/react-js/profile-img.png";
pub const ABOUT_IMG_URL: &str = "https://assets.ccbp.in/frontend/react-js/about-blog-img.png";
pub const CONTACT_IMG_URL: &str = "https://assets.ccbp.in/frontend/react-js/contact-blog-img.png";
pub const NOT_FOUND_IMG_URL: &str = "https://assets.ccbp.in/frontend/react-js/not-found-blog-img.png";

/// Spinner colour (hex)
pub const SPINNER_COLOR: &str = "#00bfff";
pub const SPINNER_SIZE_PX: u32 = 50;
