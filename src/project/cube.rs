//! Cube net: six faces rendered from the panorama and unfolded into a 4x3 cross.
//!
//! ```text
//!          +------+
//!          | top  |
//!   +------+------+------+------+
//!   | left |front |right | back |
//!   +------+------+------+------+
//!          |bottom|
//!          +------+
//! ```

use crate::{
    foundation::{
        core::{Canvas, Line, Point, Rect},
        error::{PanofoldError, PanofoldResult},
        math::Vec3,
    },
    project::NetProjector,
    raster::{
        buffer::{SourceImage, put_in_row},
        sampler::{EdgePolicy, EquirectSampler},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubeFace {
    Top,
    Left,
    Front,
    Right,
    Back,
    Bottom,
}

/// Affine map from face-local `(u, v)` to a direction: each output axis is
/// `c[0] * u + c[1] * v + c[2]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceBasis {
    pub x: [f64; 3],
    pub y: [f64; 3],
    pub z: [f64; 3],
}

impl FaceBasis {
    pub fn apply(&self, u: f64, v: f64) -> Vec3 {
        let axis = |c: &[f64; 3]| c[0] * u + c[1] * v + c[2];
        Vec3::new(axis(&self.x), axis(&self.y), axis(&self.z))
    }
}

// `v` grows downwards on paper, so side faces use `y = -v`. `back` also
// flips `u` so it continues `right` instead of mirroring it.
const FRONT: FaceBasis = FaceBasis {
    x: [1.0, 0.0, 0.0],
    y: [0.0, -1.0, 0.0],
    z: [0.0, 0.0, 1.0],
};
const BACK: FaceBasis = FaceBasis {
    x: [-1.0, 0.0, 0.0],
    y: [0.0, -1.0, 0.0],
    z: [0.0, 0.0, -1.0],
};
const LEFT: FaceBasis = FaceBasis {
    x: [0.0, 0.0, -1.0],
    y: [0.0, -1.0, 0.0],
    z: [1.0, 0.0, 0.0],
};
const RIGHT: FaceBasis = FaceBasis {
    x: [0.0, 0.0, 1.0],
    y: [0.0, -1.0, 0.0],
    z: [-1.0, 0.0, 0.0],
};
const TOP: FaceBasis = FaceBasis {
    x: [1.0, 0.0, 0.0],
    y: [0.0, 0.0, 1.0],
    z: [0.0, 1.0, 0.0],
};
const BOTTOM: FaceBasis = FaceBasis {
    x: [1.0, 0.0, 0.0],
    y: [0.0, 0.0, -1.0],
    z: [0.0, -1.0, 0.0],
};

impl CubeFace {
    /// Render order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Top,
        CubeFace::Left,
        CubeFace::Front,
        CubeFace::Right,
        CubeFace::Back,
        CubeFace::Bottom,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            CubeFace::Top => "top",
            CubeFace::Left => "left",
            CubeFace::Front => "front",
            CubeFace::Right => "right",
            CubeFace::Back => "back",
            CubeFace::Bottom => "bottom",
        }
    }

    pub const fn basis(self) -> &'static FaceBasis {
        match self {
            CubeFace::Top => &TOP,
            CubeFace::Left => &LEFT,
            CubeFace::Front => &FRONT,
            CubeFace::Right => &RIGHT,
            CubeFace::Back => &BACK,
            CubeFace::Bottom => &BOTTOM,
        }
    }

    /// Direction through face-local `(u, v)`, both in `[-1, 1]`.
    pub fn direction(self, u: f64, v: f64) -> Vec3 {
        self.basis().apply(u, v)
    }

    /// `(column, row)` of the face in the cross grid.
    pub const fn cell(self) -> (u32, u32) {
        match self {
            CubeFace::Top => (1, 0),
            CubeFace::Left => (0, 1),
            CubeFace::Front => (1, 1),
            CubeFace::Right => (2, 1),
            CubeFace::Back => (3, 1),
            CubeFace::Bottom => (1, 2),
        }
    }

    fn at_cell(cell: (i64, i64)) -> Option<CubeFace> {
        Self::ALL
            .into_iter()
            .find(|f| (i64::from(f.cell().0), i64::from(f.cell().1)) == cell)
    }
}

/// Cut and fold segments of the cross, in page pixel coordinates.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CrossEdges {
    /// Face sides on the outer silhouette.
    pub cut: Vec<Line>,
    /// One segment per side shared by two faces of the net.
    pub fold: Vec<Line>,
}

/// Placement of the six faces on a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CubeLayout {
    pub face_size: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

impl CubeLayout {
    pub const GRID_COLUMNS: u32 = 4;
    pub const GRID_ROWS: u32 = 3;

    /// Largest square faces that fit the cross on `page`, centred.
    pub fn for_page(page: Canvas) -> PanofoldResult<Self> {
        let face_size = (page.width / Self::GRID_COLUMNS).min(page.height / Self::GRID_ROWS);
        if face_size == 0 {
            return Err(PanofoldError::invalid_parameter(format!(
                "page {}x{} is too small for a cube net",
                page.width, page.height
            )));
        }
        Ok(Self {
            face_size,
            offset_x: (page.width - Self::GRID_COLUMNS * face_size) / 2,
            offset_y: (page.height - Self::GRID_ROWS * face_size) / 2,
        })
    }

    /// Top-left page pixel of `face`.
    pub fn origin(&self, face: CubeFace) -> (u32, u32) {
        let (col, row) = face.cell();
        (
            self.offset_x + col * self.face_size,
            self.offset_y + row * self.face_size,
        )
    }

    pub fn rect(&self, face: CubeFace) -> Rect {
        let (x, y) = self.origin(face);
        let s = f64::from(self.face_size);
        Rect::new(f64::from(x), f64::from(y), f64::from(x) + s, f64::from(y) + s)
    }

    /// Cut line = every face side without a neighbor in the grid; fold line =
    /// every side shared with the face right of or below it.
    pub fn edges(&self) -> CrossEdges {
        let mut out = CrossEdges::default();
        for face in CubeFace::ALL {
            let r = self.rect(face);
            let (col, row) = face.cell();
            let (col, row) = (i64::from(col), i64::from(row));
            let sides = [
                ((col, row - 1), Line::new((r.x0, r.y0), (r.x1, r.y0))),
                ((col + 1, row), Line::new((r.x1, r.y0), (r.x1, r.y1))),
                ((col, row + 1), Line::new((r.x0, r.y1), (r.x1, r.y1))),
                ((col - 1, row), Line::new((r.x0, r.y0), (r.x0, r.y1))),
            ];
            for (i, (cell, side)) in sides.into_iter().enumerate() {
                match CubeFace::at_cell(cell) {
                    None => out.cut.push(side),
                    // Only the right and bottom sides, so each shared edge appears once.
                    Some(_) if i == 1 || i == 2 => out.fold.push(side),
                    Some(_) => {}
                }
            }
        }
        out
    }

    pub fn face_at(&self, x: u32, y: u32) -> Option<CubeFace> {
        let p = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
        CubeFace::ALL.into_iter().find(|&f| self.rect(f).contains(p))
    }
}

/// Renders each face by looking up the panorama along the face pixel's direction.
pub struct CubeNetProjector<'a> {
    layout: CubeLayout,
    sampler: EquirectSampler<'a>,
}

impl<'a> CubeNetProjector<'a> {
    pub fn new(page: Canvas, source: &'a SourceImage) -> PanofoldResult<Self> {
        let layout = CubeLayout::for_page(page)?;
        tracing::debug!(?layout, "cube layout");
        Ok(Self {
            layout,
            sampler: EquirectSampler::new(source, EdgePolicy::Wrap),
        })
    }

    pub fn layout(&self) -> &CubeLayout {
        &self.layout
    }
}

impl NetProjector for CubeNetProjector<'_> {
    fn project_row(&self, y: u32, row: &mut [u8]) {
        let s = self.layout.face_size;
        let sf = f64::from(s);
        for face in CubeFace::ALL {
            let (fx, fy) = self.layout.origin(face);
            if y < fy || y >= fy + s {
                continue;
            }
            let v = 2.0 * f64::from(y - fy) / sf - 1.0;
            for i in 0..s {
                let u = 2.0 * f64::from(i) / sf - 1.0;
                let p = face.direction(u, v).to_lon_lat();
                if let Some(px) = self.sampler.sample(p) {
                    put_in_row(row, (fx + i) as usize, px);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/cube.rs"]
mod tests;
