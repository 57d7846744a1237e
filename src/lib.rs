//! stox.bg content site.
//!
//! A server-rendered Bulgarian content site: a paginated post feed with
//! cursor-based infinite scroll, slug-or-id post pages, rule-based content
//! projection, and SEO metadata with JSON-LD structured data.

pub mod components;
pub mod config;
pub mod constants;
pub mod content;
pub mod db;
pub mod feed;
pub mod resolver;
pub mod seo;
pub mod web;
