pub mod locale;
pub mod pdf;

pub use locale::Locale;
pub use pdf::render;
