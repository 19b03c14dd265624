pub mod api_utils;
pub mod bubbles;
pub mod components;
pub mod navigation;
pub mod submit;
