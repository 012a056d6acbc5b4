use crate::core::prelude::*;

/// Places a `source` rectangle (the popup) next to a `target` rectangle (its anchor).
///
/// Each candidate is `offset` pixels away from the target and centered on it along the other
/// axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PopupBuilder {
    pub source: Rect,
    pub target: Rect,
    pub offset: f64,
}

impl PopupBuilder {
    pub fn new(source: Rect, target: Rect) -> Self {
        Self {
            source,
            target,
            offset: 0.0,
        }
    }

    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn build_top(&self) -> Rect {
        let top = self.target.top() - self.source.height() - self.offset;
        self.at(self.centered_left(), top)
    }
    pub fn build_bottom(&self) -> Rect {
        let top = self.target.bottom() + self.offset;
        self.at(self.centered_left(), top)
    }
    pub fn build_left(&self) -> Rect {
        let left = self.target.left() - self.source.width() - self.offset;
        self.at(left, self.centered_top())
    }
    pub fn build_right(&self) -> Rect {
        let left = self.target.right() + self.offset;
        self.at(left, self.centered_top())
    }

    /// Returns the first candidate, in the order below, above, right, left, that fits
    /// entirely inside `safe_area`.
    ///
    /// If none fits, the candidate below is moved into `safe_area` as far as possible
    /// with [`Rect::restrict_with`]; it may then overlap the target.
    pub fn build_safe(&self, safe_area: &Rect) -> Rect {
        let bottom = self.build_bottom();
        [bottom, self.build_top(), self.build_right(), self.build_left()]
            .into_iter()
            .find(|candidate| candidate.within(safe_area))
            .unwrap_or_else(|| {
                debug!(
                    "build_safe(): no placement of {} around {} fits in {}",
                    self.source, self.target, safe_area
                );
                bottom.restrict_with(safe_area)
            })
    }

    fn centered_left(&self) -> f64 {
        self.target.center().x - self.source.width() / 2.0
    }
    fn centered_top(&self) -> f64 {
        self.target.center().y - self.source.height() / 2.0
    }
    fn at(&self, left: f64, top: f64) -> Rect {
        self.source.with_top_left(Vec2 { x: left, y: top })
    }
}

/// Shorthand for [`PopupBuilder::build_safe`].
///
/// # Examples
///
/// ```
/// use uigeom::core::prelude::*;
///
/// let popup = build_safe(
///     &Rect::new(0.0, 0.0, 50.0, 20.0),
///     &Rect::new(40.0, 40.0, 20.0, 20.0),
///     0.0,
///     &Rect::new(0.0, 0.0, 100.0, 100.0),
/// );
/// assert_eq!(popup, Rect::new(25.0, 60.0, 50.0, 20.0));
/// ```
pub fn build_safe(source: &Rect, target: &Rect, offset: f64, safe_area: &Rect) -> Rect {
    PopupBuilder::new(*source, *target)
        .with_offset(offset)
        .build_safe(safe_area)
}
