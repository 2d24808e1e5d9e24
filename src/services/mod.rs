pub mod color;
pub mod encoding;
pub mod hashtags;
pub mod html;
pub mod slug;
pub mod whitespace;
