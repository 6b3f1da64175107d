pub mod career;
pub mod markup;
pub mod page;
pub mod portfolio;
pub mod profile;
pub mod sanitize;

pub use page::compose_site;
pub use sanitize::{SafeHtml, Sanitizer};
