//! Modifiers annotate series-level metadata. They never change which
//! instances a series holds nor their order.

mod slice_thickness;

pub use slice_thickness::{SLICE_THICKNESS, SliceThicknessModifier};
