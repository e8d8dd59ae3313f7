//! Core types for byzcal.
//!
//! This crate holds everything between the raw calendar CSV and the rendered
//! output, shared by both renderers:
//! - `csv` and `columns` for splitting lines and locating fields
//! - `row` for turning file contents into `CalendarRow`s
//! - `readings` for the scripture lookup links
//! - `render` for the text and HTML outputs

pub mod columns;
pub mod config;
pub mod csv;
pub mod error;
pub mod label;
pub mod readings;
pub mod render;
pub mod row;

pub use error::{CalendarError, CalendarResult};
pub use label::MonthLabel;
pub use readings::ReadingsLink;
pub use render::{HtmlRenderer, OutputFormat, Render, TextRenderer};
pub use row::{CalendarRow, parse_rows};
