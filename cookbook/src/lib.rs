//! Documentation model for the cookbook viewer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server loads a [`DocSet`] from disk and serves it as JSON; the
//! browser client and the CLI work on the same types. Everything here is
//! synchronous and free of browser APIs:
//!
//! - [`doc`]: language trees on disk into immutable documents;
//! - [`markdown`] and [`slug`]: titles, headings and unique anchors;
//! - [`render`]: Markdown to classed HTML with matching heading ids;
//! - [`router`] and [`nav`]: URL fragment resolution and navigation state;
//! - [`scroll`]: active heading selection from intersection samples;
//! - [`sidebar`]: display order and search filtering.

pub mod doc;
pub mod markdown;
pub mod nav;
pub mod render;
pub mod router;
pub mod scroll;
pub mod sidebar;
pub mod slug;

pub use doc::{Doc, DocError, DocSet, Language, LoadOptions};
pub use markdown::{DEFAULT_MAX_DEPTH, Heading};
pub use nav::Navigator;
pub use render::{render_body, render_markdown};
pub use router::{HistorySink, Route, encode_fragment, parse_fragment, resolve_fragment, sync_history};
pub use sidebar::SidebarItem;
pub use slug::Slugger;
