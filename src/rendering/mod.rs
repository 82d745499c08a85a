//! The Markdown-to-document rendering pipeline.
//!
//! Stages, in order: fenced-code highlighting ([`highlight`]), Mermaid
//! diagram substitution ([`mermaid`]), Markdown rendering and document
//! assembly ([`document`]), and optional PDF rasterization ([`pdf`]).

pub mod document;
pub mod highlight;
pub mod mermaid;
pub mod pdf;
