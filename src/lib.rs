//! Production blueprint page for the Confirmation Bias motion reel.
//!
//! The page is a handful of Yew function components over constant content
//! tables. It mounts in the browser through [`App`] (the `csr` feature) and
//! renders ahead of time into a static document through [`render_document`].

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod document;
pub mod error;
pub mod export;
pub mod page;
pub mod theme;

pub use app::{App, AppProps};
pub use config::{PageMeta, SiteConfig};
pub use content::{Blueprint, BLUEPRINT};
pub use document::{render_document, Document, DocumentProps};
pub use error::{BlueprintError, BlueprintResult};
pub use page::{Page, PageProps};
pub use theme::{stylesheet, Theme};
