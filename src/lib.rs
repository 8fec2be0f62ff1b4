//! Panofold turns a 360° equirectangular panorama into a printable paper-craft net.
//!
//! Two nets are supported, both rendered onto an A4 landscape page at 300 DPI
//! (3508x2480 pixels, white background):
//!
//! - **Sphere**: `num_gores` orange-peel gores (12 by default) that glue into a globe.
//! - **Cube**: six faces in a 4x3 cross with a solid cut outline and dashed fold lines.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: bytes -> [`SourceImage`] ([`decode_source`], [`load_source`])
//! 2. **Project**: every page pixel inside a gore or face is mapped to a direction on the
//!    sphere and filled with the nearest panorama pixel ([`GoreProjector`], [`CubeNetProjector`])
//! 3. **Overlay** (cube only): cut and fold guides ([`GuideLineOverlay`])
//! 4. **Encode**: the finished [`NetFrame`] becomes a PNG
//!
//! Rendering is a pure function of the source and the request: the same inputs always give
//! byte-identical pages, with or without row-parallel rendering.
#![forbid(unsafe_code)]

mod assets;
mod foundation;
mod layout;
mod overlay;
mod project;
mod raster;
mod render;

pub use assets::decode::{decode_source, load_source};
pub use foundation::core::{
    Canvas, DEFAULT_GORE_COUNT, Line, LonLat, Point, ProjectionRequest, Rect, Rgba8, Shape, Vec2,
    WHITE,
};
pub use foundation::error::{PanofoldError, PanofoldResult};
pub use foundation::math::{Vec3, lon_lat_to_uv};
pub use layout::instructions::{AssemblyGuide, AssemblyStep, assembly_guide};
pub use layout::net::{NetLayout, PlacedFace};
pub use overlay::guides::{GuideLineOverlay, GuideStyle};
pub use project::NetProjector;
pub use project::cube::{CrossEdges, CubeFace, CubeLayout, CubeNetProjector, FaceBasis};
pub use project::gore::{GoreGeometry, GoreProjector};
pub use raster::buffer::{PixelBuffer, SourceImage};
pub use raster::composite::{PremulRgba8, over, premul_with_opacity};
pub use raster::sampler::{EdgePolicy, EquirectSampler};
pub use render::page::{NetFrame, PageCompositor, ProjectedPage};
pub use render::pipeline::{
    render_cube_net, render_default_sphere_net, render_net_frame, render_sphere_net,
};
pub use render::settings::{NetSettings, RenderThreading};
