use crate::foundation::core::Shape;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AssemblyStep {
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AssemblyGuide {
    pub heading: &'static str,
    pub steps: &'static [AssemblyStep],
    pub tip: &'static str,
}

const SPHERE: AssemblyGuide = AssemblyGuide {
    heading: "Assembling your sphere",
    steps: &[
        AssemblyStep {
            title: "Print",
            detail: "Print the page on A4 paper. Heavier card stock gives a sturdier result.",
        },
        AssemblyStep {
            title: "Cut",
            detail: "Carefully cut out each gore (the orange-peel shaped slices).",
        },
        AssemblyStep {
            title: "Glue the edges",
            detail: "Glue neighbouring gore edges together. Line up the tips (the poles) so the sphere stays symmetric.",
        },
        AssemblyStep {
            title: "Close the sphere",
            detail: "Keep gluing until one seam is left, then glue the last edge to close the sphere.",
        },
    ],
    tip: "Pre-crease small folds along the edges before gluing; it makes the seams meet more easily.",
};

const CUBE: AssemblyGuide = AssemblyGuide {
    heading: "Assembling your cube",
    steps: &[
        AssemblyStep {
            title: "Print",
            detail: "Print the page on A4 paper. Heavier card stock gives a sturdier result.",
        },
        AssemblyStep {
            title: "Cut",
            detail: "Cut along the solid outer outline of the cross.",
        },
        AssemblyStep {
            title: "Fold",
            detail: "Fold inwards along every dashed line between two squares.",
        },
        AssemblyStep {
            title: "Glue",
            detail: "Form an open box first, then glue the remaining faces and close the lid.",
        },
    ],
    tip: "Score the dashed lines with a ruler before folding for sharper cube edges.",
};

pub fn assembly_guide(shape: Shape) -> &'static AssemblyGuide {
    match shape {
        Shape::Sphere => &SPHERE,
        Shape::Cube => &CUBE,
    }
}

impl std::fmt::Display for AssemblyGuide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.heading)?;
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "{}. {}: {}", i + 1, step.title, step.detail)?;
        }
        write!(f, "Tip: {}", self.tip)
    }
}
