//! **Company management shell for the terminal.**
//!
//! `company-manager` is a navigation shell with three sections (Roles, Teams,
//! People) and a GraphQL client pointed at a configurable endpoint. The
//! sections are placeholders for now; the crate provides the structure they
//! plug into.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Section`], the closed set of selectable sections.
//! - **[`navigation`]**: [`Navigator`], the owner of the current selection.
//! - **[`sections`]**: the section components and [`sections::resolve`],
//!   which maps every [`Section`] to its component.
//! - **[`client`]**: [`GraphQlClient`], built once from [`ClientConfig`] and
//!   shared read-only.
//! - **[`config`]**: YAML configuration with discovery, validation and CLI merging.
//! - **[`tui`]**: the terminal front end.
//!
//! ## Example
//!
//! ```
//! use company_manager::{Navigator, Section, sections};
//!
//! let mut nav = Navigator::default();
//! assert_eq!(nav.selected(), Section::Roles);
//!
//! nav.select(Section::Teams);
//! assert_eq!(sections::resolve(nav.selected()).id(), "teams");
//! ```

#![warn(clippy::unwrap_used)]
#![allow(
    // Layout math casts widths between usize and u16
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod navigation;
pub mod sections;
pub mod tui;

pub use client::{GraphQlClient, GraphQlRequest, GraphQlResponse, InMemoryCache};
pub use config::{AppConfig, ClientConfig, ConfigOverrides, Validatable};
pub use error::{Error, Result};
pub use model::Section;
pub use navigation::{MenuEntry, Navigator};
pub use sections::{SectionComponent, resolve};
