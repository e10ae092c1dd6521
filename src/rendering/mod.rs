//! Rendering subsystem for drawing list rows
//!
//! - Row rendering (block rows, appender rows, tree guides)
//! - Text utilities (text measurement and elision)

pub mod row_renderer;
pub mod text_utils;
