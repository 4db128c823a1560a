//! View models and the renderers that turn them into output.
//!
//! Controllers never build markup themselves; they produce a [`Fragment`]
//! and hand it to a [`Renderer`].

pub mod model;
pub mod render;

pub use model::{
    Column, ComparisonCard, ComparisonView, DataTable, Fragment, Page, Report, SelectControl,
    StatCard, ViewKind,
};
pub use render::{HtmlRenderer, JsonRenderer, Renderer, TextRenderer};
