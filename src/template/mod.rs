//! Branded HTML email composition.
//!
//! This module provides:
//! - [`RenderContext`]: per-message branding options plus the trusted body
//! - [`render`] / [`compose`]: deterministic section-by-section composition
//! - [`SafeHtml`]: the only type allowed to reach the unescaped body splice
//! - Request/response models for the HTTP render API
//!
//! # Example
//!
//! ```
//! use notification_email_renderer::template::{render, RenderContext, SafeHtml};
//!
//! let context = RenderContext::builder(SafeHtml::trusted("<p>Hello</p>"))
//!     .complete_html(true)
//!     .default_banner(true)
//!     .build();
//!
//! let html = render(&context);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod branding;
mod composer;
mod context;
mod html;
mod preheader;
mod types;

pub use composer::{compose, render, RenderedEmail, Section};
pub use context::{LogoPlacement, RenderContext, RenderContextBuilder};
pub use html::{escape_html, SafeHtml};
pub use preheader::{normalise_preheader, PREHEADER_MAX_CHARS};
pub use types::{RenderEmailRequest, RenderEmailResponse};
