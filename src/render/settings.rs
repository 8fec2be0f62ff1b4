use crate::{
    foundation::{
        core::{Rgba8, WHITE},
        error::{PanofoldError, PanofoldResult},
    },
    overlay::guides::GuideLineOverlay,
};

/// Row-level parallelism for the projection sweep.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderThreading {
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl RenderThreading {
    pub const PARALLEL_ENV: &'static str = "PANOFOLD_PARALLEL";
    pub const THREADS_ENV: &'static str = "PANOFOLD_THREADS";

    /// Defaults overridden by `PANOFOLD_PARALLEL` (`1`/`true`/`yes`) and
    /// `PANOFOLD_THREADS` (positive integer). Unparsable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut out = Self::default();
        if let Some(v) = lookup(Self::PARALLEL_ENV) {
            out.parallel = matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        out.threads = lookup(Self::THREADS_ENV)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&n| n > 0);
        out
    }

    pub fn validate(&self) -> PanofoldResult<()> {
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(PanofoldError::invalid_parameter(
                "render threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// Everything about a conversion that is not the source image or the shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NetSettings {
    pub background: Rgba8,
    pub guides: GuideLineOverlay,
    pub threading: RenderThreading,
}

impl Default for NetSettings {
    fn default() -> Self {
        Self {
            background: WHITE,
            guides: GuideLineOverlay::default(),
            threading: RenderThreading::default(),
        }
    }
}

impl NetSettings {
    pub fn validate(&self) -> PanofoldResult<()> {
        self.guides.validate()?;
        self.threading.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;
