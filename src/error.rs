use segbar_geometry::GeometryError;

#[derive(thiserror::Error, Debug)]
pub enum BarError {
    #[error("invalid bar layout: {0}")]
    Geometry(#[from] GeometryError),

    #[cfg(feature = "tessellation")]
    #[error("{0}")]
    Tessellation(#[from] crate::tessellation::TessellationError),

    #[error("scale factor must be a positive number, got {0}")]
    InvalidScaleFactor(f32),
}
