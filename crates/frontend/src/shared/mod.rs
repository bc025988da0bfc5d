pub mod components;
pub mod date_utils;
pub mod export;
pub mod http;
pub mod icons;
