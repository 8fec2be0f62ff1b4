use std::time::Instant;

use crate::{
    foundation::{
        core::{Canvas, DEFAULT_GORE_COUNT, ProjectionRequest},
        error::{PanofoldError, PanofoldResult},
    },
    project::{cube::CubeNetProjector, gore::GoreProjector},
    raster::buffer::SourceImage,
    render::{
        page::{NetFrame, PageCompositor},
        settings::NetSettings,
    },
};

/// Render the printable page for `request` as raw RGBA8.
///
/// Pipeline:
/// 1. validate the request and settings (no pixel work on bad input)
/// 2. derive the gore or cube geometry for the A4 page
/// 3. allocate the page and fill it with the background
/// 4. run the one projector for the shape (rows in parallel if enabled)
/// 5. cube only: stroke cut and fold lines
#[tracing::instrument(
    skip(source, settings),
    fields(src_w = source.width(), src_h = source.height())
)]
pub fn render_net_frame(
    source: &SourceImage,
    request: ProjectionRequest,
    settings: &NetSettings,
) -> PanofoldResult<NetFrame> {
    render_on_page(source, request, settings, Canvas::A4_LANDSCAPE_300DPI)
}

/// 12-gore-by-default sphere net, PNG encoded.
pub fn render_sphere_net(source: &SourceImage, num_gores: u32) -> PanofoldResult<Vec<u8>> {
    render_net_frame(
        source,
        ProjectionRequest::sphere(num_gores),
        &NetSettings::default(),
    )?
    .encode_png()
}

/// [`render_sphere_net`] with the default gore count.
pub fn render_default_sphere_net(source: &SourceImage) -> PanofoldResult<Vec<u8>> {
    render_sphere_net(source, DEFAULT_GORE_COUNT)
}

/// Cube cross net with guide lines, PNG encoded.
pub fn render_cube_net(source: &SourceImage) -> PanofoldResult<Vec<u8>> {
    render_net_frame(source, ProjectionRequest::Cube, &NetSettings::default())?.encode_png()
}

pub(crate) fn render_on_page(
    source: &SourceImage,
    request: ProjectionRequest,
    settings: &NetSettings,
    page: Canvas,
) -> PanofoldResult<NetFrame> {
    request.validate()?;
    settings.validate()?;

    let started = Instant::now();
    let parallel = settings.threading.parallel;
    let run = || -> PanofoldResult<NetFrame> {
        match request {
            ProjectionRequest::Sphere { num_gores } => {
                let projector = GoreProjector::new(page, source, num_gores)?;
                let compositor = PageCompositor::new(page, settings.background)?;
                Ok(compositor.project(&projector, parallel).finish())
            }
            ProjectionRequest::Cube => {
                let projector = CubeNetProjector::new(page, source)?;
                let edges = projector.layout().edges();
                let compositor = PageCompositor::new(page, settings.background)?;
                Ok(compositor
                    .project(&projector, parallel)
                    .overlay(&settings.guides, &edges)
                    .finish())
            }
        }
    };

    let frame = if parallel {
        build_thread_pool(settings.threading.threads)?.install(run)?
    } else {
        run()?
    };

    tracing::info!(
        shape = request.shape().name(),
        width = frame.width,
        height = frame.height,
        parallel,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "net rendered"
    );
    Ok(frame)
}

fn build_thread_pool(threads: Option<usize>) -> PanofoldResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(PanofoldError::invalid_parameter(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PanofoldError::allocation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
