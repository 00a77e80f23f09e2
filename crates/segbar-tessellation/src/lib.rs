mod fill;
mod tessellation;

pub mod path;

pub use fill::{Fill, FillRule, FillStyle};
pub use path::{Path, PathBuilder};
pub use tessellation::{TessellationError, Tessellator};

pub use lyon;
