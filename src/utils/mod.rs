pub mod preview;
pub mod url;
