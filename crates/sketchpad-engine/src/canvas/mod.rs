//! The drawing canvas: placed shapes, the optional picture, and full-scene repaint.
//!
//! Every mutation repaints the whole scene into the canvas's [`RenderSurface`]:
//! clear, then the picture (when visible), then every shape in insertion order.
//! There is no partial invalidation.

mod config;
mod stamp;

pub use config::CanvasConfig;
pub use stamp::{shape_for_style, stamp_position};

use crate::coords::{pixel_to_ndc, Vec2, Viewport};
use crate::effects::BurstKind;
use crate::render::{GeometryRecorder, RenderSurface};
use crate::scene::{Picture, Shape, ShapeError, ShapeList, StyleState};

/// Outcome of one [`Canvas::repaint`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RepaintStats {
    pub picture_drawn: usize,
    pub picture_failed: usize,
    pub shapes_drawn: usize,
    pub shapes_failed: usize,
}

impl RepaintStats {
    /// Draw calls that reached the surface.
    #[inline]
    pub fn draw_calls(&self) -> usize {
        self.picture_drawn + self.shapes_drawn
    }
}

/// Shape list + picture flag bound to a render surface.
pub struct Canvas<S = GeometryRecorder> {
    shapes: ShapeList,
    picture: Picture,
    picture_visible: bool,
    surface: S,

    pending_burst: Option<BurstKind>,
    last_stats: RepaintStats,
}

impl Canvas<GeometryRecorder> {
    /// Creates a canvas recording into a [`GeometryRecorder`] and paints it once.
    pub fn new(config: &CanvasConfig) -> Self {
        let surface = GeometryRecorder::with_budget(config.geometry_budget);
        let mut canvas = Self::with_surface(surface, Picture::dog());
        canvas.picture_visible = config.picture_visible;
        canvas.repaint();
        canvas
    }
}

impl<S: RenderSurface> Canvas<S> {
    /// Creates an empty canvas with the picture hidden. Does not paint.
    pub fn with_surface(surface: S, picture: Picture) -> Self {
        Self {
            shapes: ShapeList::new(),
            picture,
            picture_visible: false,
            surface,
            pending_burst: None,
            last_stats: RepaintStats::default(),
        }
    }

    #[inline]
    pub fn shapes(&self) -> &ShapeList {
        &self.shapes
    }

    #[inline]
    pub fn picture(&self) -> &Picture {
        &self.picture
    }

    #[inline]
    pub fn picture_visible(&self) -> bool {
        self.picture_visible
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Stats of the most recent repaint.
    #[inline]
    pub fn last_stats(&self) -> RepaintStats {
        self.last_stats
    }

    /// Appends a shape without repainting.
    #[inline]
    pub fn append_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Clears the surface and replays the picture (if visible) and every shape.
    ///
    /// A shape whose draw fails is logged and skipped; the rest of the scene still draws.
    pub fn repaint(&mut self) -> RepaintStats {
        let mut stats = RepaintStats::default();
        self.surface.clear();

        if self.picture_visible {
            let (drawn, failed) = self.picture.render(&mut self.surface);
            stats.picture_drawn = drawn;
            stats.picture_failed = failed;
        }

        for (i, shape) in self.shapes.iter().enumerate() {
            match shape.render(&mut self.surface) {
                Ok(()) => stats.shapes_drawn += 1,
                Err(e) => {
                    log::warn!("shape {i} ({:?}) not drawn: {e}", shape.kind());
                    stats.shapes_failed += 1;
                }
            }
        }

        log::debug!(
            "repaint: {} shapes ({} failed), {} picture triangles ({} failed)",
            stats.shapes_drawn,
            stats.shapes_failed,
            stats.picture_drawn,
            stats.picture_failed,
        );

        self.last_stats = stats;
        stats
    }

    /// Empties the shape list, hides the picture, repaints, and requests an explosion.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.picture_visible = false;
        self.repaint();
        self.pending_burst = Some(BurstKind::Explosion);
        log::info!("canvas cleared");
    }

    /// Shows the picture beneath the shapes, repaints, and requests confetti.
    ///
    /// Showing is idempotent; only [`clear`](Self::clear) hides the picture again.
    pub fn show_picture(&mut self) {
        self.picture_visible = true;
        self.repaint();
        self.pending_burst = Some(BurstKind::Confetti);
        log::info!("picture shown ({} triangles)", self.picture.len());
    }

    /// Maps a surface pixel to NDC, builds a shape from `style`, appends it, repaints.
    pub fn stamp(
        &mut self,
        pointer: Vec2,
        viewport: Viewport,
        style: &StyleState,
    ) -> Result<(), ShapeError> {
        let position = pixel_to_ndc(pointer, viewport);
        let shape = shape_for_style(style, position)?;
        log::debug!("stamp {:?} at ({:.3}, {:.3})", shape.kind(), position.x, position.y);

        self.append_shape(shape);
        self.repaint();
        Ok(())
    }

    /// Takes the burst requested by the last clear/show, if any.
    ///
    /// The request is fire-and-forget; nothing on the canvas depends on it being taken.
    #[inline]
    pub fn take_burst_request(&mut self) -> Option<BurstKind> {
        self.pending_burst.take()
    }
}
