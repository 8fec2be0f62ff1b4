use crate::{
    foundation::{
        core::{Canvas, Line, ProjectionRequest, Rect},
        error::{PanofoldError, PanofoldResult},
    },
    project::{
        cube::{CubeFace, CubeLayout},
        gore::GoreGeometry,
    },
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacedFace {
    pub face: CubeFace,
    pub rect: Rect,
}

/// Where everything lands on the page for a request, without rendering it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum NetLayout {
    Sphere {
        page: Canvas,
        gores: GoreGeometry,
    },
    Cube {
        page: Canvas,
        layout: CubeLayout,
        faces: Vec<PlacedFace>,
        cut: Vec<Line>,
        fold: Vec<Line>,
    },
}

impl NetLayout {
    pub fn for_request(request: ProjectionRequest) -> PanofoldResult<Self> {
        Self::for_page(request, Canvas::A4_LANDSCAPE_300DPI)
    }

    pub(crate) fn for_page(request: ProjectionRequest, page: Canvas) -> PanofoldResult<Self> {
        request.validate()?;
        match request {
            ProjectionRequest::Sphere { num_gores } => Ok(Self::Sphere {
                page,
                gores: GoreGeometry::new(page, num_gores)?,
            }),
            ProjectionRequest::Cube => {
                let layout = CubeLayout::for_page(page)?;
                let edges = layout.edges();
                Ok(Self::Cube {
                    page,
                    layout,
                    faces: CubeFace::ALL
                        .into_iter()
                        .map(|face| PlacedFace {
                            face,
                            rect: layout.rect(face),
                        })
                        .collect(),
                    cut: edges.cut,
                    fold: edges.fold,
                })
            }
        }
    }

    pub fn to_json_pretty(&self) -> PanofoldResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PanofoldError::encode(format!("layout json: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/net.rs"]
mod tests;
