//! Render-independent page logic: bundle records, icons, feature ordering and
//! the composed landing content. Nothing in here touches Dioxus.

pub mod bundle;
pub mod features;
pub mod icon;
pub mod landing;
