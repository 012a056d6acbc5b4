#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::gg_err::{GeometryError, Result};
use crate::util::gg_float;
use crate::util::gg_float::GgFloat;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 2D vector representation using 64-bit floating point coordinates.
///
/// [`Vec2`] is a plain value: every operation returns a new vector. Arithmetic works
/// element-wise against another [`Vec2`], or against an `f64` broadcast to both axes.
///
/// # Examples
///
/// ```
/// use uigeom::util::linalg::Vec2;
///
/// let v1 = Vec2 { x: 3.0, y: 4.0 };
/// let v2 = Vec2 { x: 1.0, y: 2.0 };
///
/// assert_eq!(v1 + v2, Vec2 { x: 4.0, y: 6.0 });
/// assert_eq!(v1 * v2, Vec2 { x: 3.0, y: 8.0 });
/// assert_eq!(v1 - 1.0, Vec2 { x: 2.0, y: 3.0 });
/// assert_eq!(v1.len(), 5.0);
/// ```
///
/// # Equality
/// Two vectors are considered equal if their components differ by less than
/// [`EPSILON`](crate::core::config::EPSILON). If neither vector is finite the comparison
/// falls back to exact equality, so that infinities still compare equal to themselves.
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_finite() || other.is_finite() {
            (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
        } else {
            self.x == other.x && self.y == other.y
        }
    }
}

impl Vec2 {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }
    #[must_use]
    pub const fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }
    #[must_use]
    pub const fn one() -> Vec2 {
        Vec2 { x: 1.0, y: 1.0 }
    }

    /// Creates a new vector with both components set to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use uigeom::core::prelude::*;
    /// let vec = Vec2::splat(3.0);
    /// assert_eq!(vec.x, 3.0);
    /// assert_eq!(vec.y, 3.0);
    /// ```
    #[must_use]
    pub const fn splat(v: f64) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    #[must_use]
    pub fn len_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the Euclidean length of the vector.
    #[must_use]
    pub fn len(&self) -> f64 {
        self.len_squared().sqrt()
    }

    #[must_use]
    pub fn abs(&self) -> Vec2 {
        Vec2 {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    #[must_use]
    pub fn negate(&self) -> Vec2 {
        -*self
    }

    /// Returns a new vector rotated about the origin by the given angle in radians.
    ///
    /// With the y axis pointing down, as it does on screen, a positive angle rotates clockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use uigeom::core::prelude::*;
    /// let rotated = Vec2 { x: 1.0, y: 0.0 }.rotated(std::f64::consts::FRAC_PI_2);
    /// assert!(rotated.almost_eq(Vec2 { x: 0.0, y: 1.0 }));
    /// ```
    #[must_use]
    pub fn rotated(&self, radians: f64) -> Vec2 {
        let (sin, cos) = radians.sin_cos();
        Vec2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Multiplies element-wise by a vector, or by a scalar broadcast to both axes.
    /// Equivalent to the `*` operator.
    #[must_use]
    pub fn scale(&self, by: impl Into<Vec2>) -> Vec2 {
        self.component_wise(by.into())
    }

    #[must_use]
    pub fn component_wise(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }

    /// Performs a component-wise division of two vectors.
    ///
    /// Division by zero is not special-cased: the usual IEEE 754 infinities and NaNs result.
    #[must_use]
    pub fn component_wise_div(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x / other.x,
            y: self.y / other.y,
        }
    }

    /// Component-wise maximum against a vector, or a scalar broadcast to both axes.
    ///
    /// # Examples
    ///
    /// ```
    /// use uigeom::core::prelude::*;
    /// let v = Vec2 { x: -3.0, y: 2.0 };
    /// assert_eq!(v.max(0.0), Vec2 { x: 0.0, y: 2.0 });
    /// assert_eq!(v.max(Vec2 { x: 1.0, y: 1.0 }), Vec2 { x: 1.0, y: 2.0 });
    /// ```
    ///
    /// Follows [`f64::max`]: a NaN component yields the other operand, so a NaN scale passed to
    /// [`Transform2D::scale_from_point`] is floored to `MIN_SCALE` rather than propagated.
    #[must_use]
    pub fn max(&self, other: impl Into<Vec2>) -> Vec2 {
        let other = other.into();
        Vec2 {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }
    /// Component-wise minimum; NaN handling as in [`Vec2::max`].
    #[must_use]
    pub fn min(&self, other: impl Into<Vec2>) -> Vec2 {
        let other = other.into();
        Vec2 {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Formats the vector as a pixel offset for a style `transform`.
    ///
    /// ```
    /// use uigeom::core::prelude::*;
    /// assert_eq!(Vec2 { x: 10.0, y: -2.5 }.to_translate(), "translate(10px, -2.5px)");
    /// ```
    pub fn to_translate(&self) -> String {
        format!(
            "translate({}px, {}px)",
            gg_float::force_positive_zero(self.x),
            gg_float::force_positive_zero(self.y)
        )
    }

    /// Checks if the vector is approximately equal to another vector.
    ///
    /// Two vectors are considered approximately equal if the length of their difference
    /// is less than [`EPSILON`](crate::core::config::EPSILON).
    pub fn almost_eq(&self, rhs: Vec2) -> bool {
        (*self - rhs).len() < EPSILON
    }

    /// The midpoint between two points.
    #[must_use]
    pub fn center(a: Vec2, b: Vec2) -> Vec2 {
        (a + b) / 2.0
    }

    pub fn distance(a: Vec2, b: Vec2) -> f64 {
        (a - b).len()
    }

    /// Returns true if the given value is a [`Vec2`].
    pub fn is(value: &dyn Any) -> bool {
        value.is::<Vec2>()
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl From<f64> for Vec2 {
    fn from(value: f64) -> Self {
        Vec2::splat(value)
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(value: Vec2) -> Self {
        value.to_array()
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let x = gg_float::force_positive_zero(self.x);
        let y = gg_float::force_positive_zero(self.y);
        if let Some(p) = f.precision() {
            write!(f, "({0:.2$}, {1:.2$})", x, y, p)
        } else {
            write!(f, "({x}, {y})")
        }
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Add<f64> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: f64) -> Self::Output {
        self + Vec2::splat(rhs)
    }
}
impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl Sub<f64> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: f64) -> Self::Output {
        self - Vec2::splat(rhs)
    }
}
impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Sum<Vec2> for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), Vec2::add)
    }
}

impl Mul<Vec2> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        self.component_wise(rhs)
    }
}
impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<Vec2> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: Vec2) -> Self::Output {
        self.component_wise_div(rhs)
    }
}
impl Div<f64> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f64) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<f64> for Vec2 {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Clamps `value` into `[min, max]`. If the bounds cross, `min` wins.
///
/// # Examples
/// ```
/// use uigeom::core::prelude::*;
/// assert_eq!(linalg::restrict(5.0, 0.0, 10.0), 5.0);
/// assert_eq!(linalg::restrict(-1.0, 0.0, 10.0), 0.0);
/// assert_eq!(linalg::restrict(11.0, 0.0, 10.0), 10.0);
/// assert_eq!(linalg::restrict(5.0, 3.0, 1.0), 3.0);
/// ```
pub fn restrict(value: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(value))
}

/// Anything that occupies an axis-aligned box on screen.
///
/// Implementors only supply the top-left corner and the extent; edges, corners and the
/// center are derived.
pub trait AxisAlignedExtent {
    fn top_left(&self) -> Vec2;
    fn extent(&self) -> Vec2;

    fn bottom_right(&self) -> Vec2 {
        self.top_left() + self.extent()
    }
    fn center(&self) -> Vec2 {
        self.top_left() + self.extent() / 2.0
    }

    fn left(&self) -> f64 {
        self.top_left().x
    }
    fn top(&self) -> f64 {
        self.top_left().y
    }
    fn right(&self) -> f64 {
        self.bottom_right().x
    }
    fn bottom(&self) -> f64 {
        self.bottom_right().y
    }
    fn width(&self) -> f64 {
        self.extent().x
    }
    fn height(&self) -> f64 {
        self.extent().y
    }

    fn as_rect(&self) -> Rect {
        Rect::from_top_left_and_size(self.top_left(), self.extent())
    }
    /// Inclusive on every edge.
    fn contains_point(&self, pos: Vec2) -> bool {
        (self.left()..=self.right()).contains(&pos.x)
            && (self.top()..=self.bottom()).contains(&pos.y)
    }
}

/// An axis-aligned rectangle defined by its top-left corner and its size.
///
/// The size is always non-negative: every constructor and [`Rect::set_size`] store the
/// absolute value of the given components.
///
/// # Examples
///
/// ```
/// use uigeom::core::prelude::*;
///
/// let rect = Rect::new(10.0, 20.0, -30.0, 40.0);
/// assert_eq!(rect.width(), 30.0);
/// assert_eq!(rect.center(), Vec2 { x: 25.0, y: 40.0 });
///
/// let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
/// assert!(rect.within(&bounds));
/// assert_eq!(rect.to_translate(), "translate(10px, 20px)");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PartialRect", into = "PartialRect")]
pub struct Rect {
    top_left: Vec2,
    size: Vec2,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::from_top_left_and_size(Vec2 { x: left, y: top }, Vec2 { x: width, y: height })
    }
    /// A zero-sized rectangle at the given position.
    pub fn from_top_left(top_left: Vec2) -> Self {
        Self::from_top_left_and_size(top_left, Vec2::zero())
    }
    pub fn from_top_left_and_size(top_left: Vec2, size: Vec2) -> Self {
        Self {
            top_left,
            size: size.abs(),
        }
    }
    /// A rectangle of the given size at the origin.
    pub fn from_size(size: Vec2) -> Self {
        Self::from_top_left_and_size(Vec2::zero(), size)
    }

    /// Builds a rectangle from whichever fields are present.
    ///
    /// `top_left`/`size` take precedence: if either is given, both are used and a missing one
    /// defaults to zero. Otherwise the numeric fields are used, each defaulting to zero. If no
    /// field at all is present this fails with [`GeometryError::InvalidArgument`].
    pub fn from_partial_fields(fields: PartialRect) -> Result<Self> {
        if fields.top_left.is_some() || fields.size.is_some() {
            Ok(Self::from_top_left_and_size(
                fields.top_left.unwrap_or_default(),
                fields.size.unwrap_or_default(),
            ))
        } else if [fields.left, fields.top, fields.width, fields.height]
            .iter()
            .any(Option::is_some)
        {
            Ok(Self::new(
                fields.left.unwrap_or_default(),
                fields.top.unwrap_or_default(),
                fields.width.unwrap_or_default(),
                fields.height.unwrap_or_default(),
            ))
        } else {
            Err(GeometryError::InvalidArgument(
                "rect needs at least one of left, top, width, height, top_left or size".to_string(),
            ))
        }
    }

    pub fn set_top_left(&mut self, top_left: Vec2) -> &mut Self {
        self.top_left = top_left;
        self
    }
    pub fn set_size(&mut self, size: Vec2) -> &mut Self {
        self.size = size.abs();
        self
    }

    #[must_use]
    pub fn with_top_left(mut self, top_left: Vec2) -> Rect {
        self.set_top_left(top_left);
        self
    }
    #[must_use]
    pub fn with_size(mut self, size: Vec2) -> Rect {
        self.set_size(size);
        self
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Whether this rectangle lies entirely inside `other`, edges included.
    pub fn within(&self, other: &Rect) -> bool {
        self.left() >= other.left()
            && self.right() <= other.right()
            && self.top() >= other.top()
            && self.bottom() <= other.bottom()
    }

    /// Moves this rectangle so that it lies inside `other`, keeping its size.
    ///
    /// On an axis where this rectangle is larger than `other` it cannot fit; it is then
    /// pinned so that its far edge lines up with the far edge of `other`.
    #[must_use]
    pub fn restrict_with(&self, other: &Rect) -> Rect {
        let top_left = self
            .top_left
            .max(other.top_left)
            .min(other.bottom_right() - self.size);
        Rect::from_top_left_and_size(top_left, self.size)
    }

    pub fn to_translate(&self) -> String {
        self.top_left.to_translate()
    }

    pub fn to_style(&self) -> RectStyle {
        RectStyle {
            width: format!("{}px", self.width()),
            height: format!("{}px", self.height()),
            transform: self.to_translate(),
        }
    }
}

impl AxisAlignedExtent for Rect {
    fn top_left(&self) -> Vec2 {
        self.top_left
    }
    fn extent(&self) -> Vec2 {
        self.size
    }
}

impl From<Vec2> for Rect {
    fn from(size: Vec2) -> Self {
        Rect::from_size(size)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "rect({} + {})", self.top_left, self.size)
    }
}

/// A rectangle description where any field may be missing, e.g. as measured and sent over
/// by a presentation layer. See [`Rect::from_partial_fields`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialRect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_left: Option<Vec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec2>,
}

impl From<Rect> for PartialRect {
    fn from(value: Rect) -> Self {
        Self {
            left: Some(value.left()),
            top: Some(value.top()),
            width: Some(value.width()),
            height: Some(value.height()),
            ..Default::default()
        }
    }
}

impl TryFrom<PartialRect> for Rect {
    type Error = GeometryError;

    fn try_from(value: PartialRect) -> Result<Self> {
        Rect::from_partial_fields(value)
    }
}

/// Every way a [`Rect`] can be described. Only [`RectArgs::Fields`] can fail to convert.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RectArgs {
    Coords {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    },
    TopLeft(Vec2),
    TopLeftAndSize(Vec2, Vec2),
    Size(Vec2),
    Fields(PartialRect),
}

impl TryFrom<RectArgs> for Rect {
    type Error = GeometryError;

    fn try_from(value: RectArgs) -> Result<Self> {
        match value {
            RectArgs::Coords {
                left,
                top,
                width,
                height,
            } => Ok(Rect::new(left, top, width, height)),
            RectArgs::TopLeft(top_left) => Ok(Rect::from_top_left(top_left)),
            RectArgs::TopLeftAndSize(top_left, size) => {
                Ok(Rect::from_top_left_and_size(top_left, size))
            }
            RectArgs::Size(size) => Ok(Rect::from_size(size)),
            RectArgs::Fields(fields) => Rect::from_partial_fields(fields),
        }
    }
}

/// Declarative on-screen placement of a [`Rect`], for a presentation layer to apply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectStyle {
    pub width: String,
    pub height: String,
    pub transform: String,
}

/// A 2D viewport transform: scale, then rotation, then translation.
///
/// Used to fit an image into a viewport and then pan, zoom and rotate it around points the
/// user interacts with. The corresponding 2×3 matrix is given by [`Transform2D::to_matrix`]
/// and its textual form by the [`Display`](fmt::Display) impl.
///
/// # Examples
///
/// ```
/// use uigeom::core::prelude::*;
///
/// let mut transform = Transform2D::default();
/// transform.contain_and_center(Vec2 { x: 200.0, y: 100.0 }, Vec2 { x: 100.0, y: 100.0 });
/// assert_eq!(transform.scale, Vec2 { x: 0.5, y: 0.5 });
/// assert_eq!(transform.translate, Vec2 { x: 0.0, y: 25.0 });
/// assert_eq!(transform.to_string(), "matrix(0.5,0,0,0.5,0,25)");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    pub translate: Vec2,
    pub scale: Vec2,
    /// Radians. Accumulates without being wrapped into `[0, 2π)`.
    pub rotate: f64,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translate: Vec2::zero(),
            scale: Vec2::one(),
            rotate: 0.0,
        }
    }
}

/// A partial update for [`Transform2D::set`]; fields left as `None` are kept.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TransformUpdate {
    pub translate: Option<Vec2>,
    pub scale: Option<Vec2>,
    pub rotate: Option<f64>,
}

impl TransformUpdate {
    #[must_use]
    pub fn with_translate(mut self, translate: Vec2) -> Self {
        self.translate = Some(translate);
        self
    }
    /// A scalar scale is applied to both axes.
    #[must_use]
    pub fn with_scale(mut self, scale: impl Into<Vec2>) -> Self {
        self.scale = Some(scale.into());
        self
    }
    #[must_use]
    pub fn with_rotate(mut self, rotate: f64) -> Self {
        self.rotate = Some(rotate);
        self
    }
}

impl Transform2D {
    pub fn new(translate: Vec2, scale: impl Into<Vec2>, rotate: f64) -> Self {
        Self {
            translate,
            scale: scale.into(),
            rotate,
        }
    }

    pub fn set(&mut self, update: TransformUpdate) -> &mut Self {
        if let Some(translate) = update.translate {
            self.translate = translate;
        }
        if let Some(scale) = update.scale {
            self.scale = scale;
        }
        if let Some(rotate) = update.rotate {
            self.rotate = rotate;
        }
        self
    }

    pub fn move_by(&mut self, by: Vec2) -> &mut Self {
        self.translate += by;
        self
    }

    /// Fits an image of `image_size` entirely inside `wrapper_size` ("contain", never "cover"),
    /// using the same scale on both axes, and centers it.
    ///
    /// A zero-sized image or wrapper gives a non-finite transform. This is logged, not
    /// prevented.
    pub fn contain_and_center(&mut self, image_size: Vec2, wrapper_size: Vec2) -> &mut Self {
        let ratio = wrapper_size / image_size;
        let min_scale = ratio.x.min(ratio.y);
        let scaled = image_size * min_scale;
        let translate = (wrapper_size - scaled) / 2.0;
        self.set(
            TransformUpdate::default()
                .with_translate(translate)
                .with_scale(min_scale),
        );
        if !self.is_finite() {
            warn!(
                "contain_and_center(): non-finite result fitting {} into {}: {:?}",
                image_size, wrapper_size, self
            );
        }
        self
    }

    /// Zooms by `raw_scale` keeping the content under `point` where it is on screen.
    /// Equivalent to [`Transform2D::scale_from_point_with_origin`] with the origin at zero.
    pub fn scale_from_point(&mut self, raw_scale: impl Into<Vec2>, point: Vec2) -> &mut Self {
        self.scale_from_point_with_origin(raw_scale, point, Vec2::zero())
    }

    /// Zooms by `raw_scale` so that the content under `point` stays fixed on screen.
    ///
    /// `origin` is the screen position that the transform scales about, i.e. where the
    /// content's own origin currently appears. The resulting scale is floored at
    /// [`MIN_SCALE`](crate::core::config::MIN_SCALE) per axis.
    ///
    /// ```
    /// use uigeom::core::prelude::*;
    /// let mut transform = Transform2D::default();
    /// transform.scale_from_point(2.0, Vec2 { x: 10.0, y: 10.0 });
    /// assert_eq!(transform.scale, Vec2 { x: 2.0, y: 2.0 });
    /// assert_eq!(transform.translate, Vec2 { x: -10.0, y: -10.0 });
    /// ```
    pub fn scale_from_point_with_origin(
        &mut self,
        raw_scale: impl Into<Vec2>,
        point: Vec2,
        origin: Vec2,
    ) -> &mut Self {
        let new_scale = self.scale.scale(raw_scale).max(MIN_SCALE);
        let real_ratio = new_scale / self.scale;
        let offset_to_origin = point - origin;
        let delta = offset_to_origin * real_ratio - offset_to_origin;
        self.set(
            TransformUpdate::default()
                .with_translate(self.translate - delta)
                .with_scale(new_scale),
        )
    }

    pub fn rotate_from_point(&mut self, radians: f64, point: Vec2) -> &mut Self {
        self.rotate_from_point_with_origin(radians, point, Vec2::zero())
    }

    /// Rotates by `radians` about `origin`, shifting the translation by how far `point` moves
    /// under that rotation. The rotation angle accumulates without wrapping.
    pub fn rotate_from_point_with_origin(
        &mut self,
        radians: f64,
        point: Vec2,
        origin: Vec2,
    ) -> &mut Self {
        let offset_to_origin = point - origin;
        let delta = offset_to_origin.rotated(radians) - offset_to_origin;
        self.set(
            TransformUpdate::default()
                .with_translate(self.translate + delta)
                .with_rotate(self.rotate + radians),
        )
    }

    /// Returns `[a, b, c, d, e, f]`, where
    /// ```text
    /// a = scale.x * cos   c = -scale.x * sin   e = translate.x
    /// b = scale.y * sin   d =  scale.y * cos   f = translate.y
    /// ```
    pub fn to_matrix(&self) -> [f64; 6] {
        let (sin, cos) = self.rotate.sin_cos();
        [
            self.scale.x * cos,
            self.scale.y * sin,
            -self.scale.x * sin,
            self.scale.y * cos,
            self.translate.x,
            self.translate.y,
        ]
    }

    /// Maps a point in content space to screen space through [`Transform2D::to_matrix`].
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        let [a, b, c, d, e, f] = self.to_matrix();
        Vec2 {
            x: a * point.x + c * point.y + e,
            y: b * point.x + d * point.y + f,
        }
    }
}

impl fmt::Display for Transform2D {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let values = self
            .to_matrix()
            .into_iter()
            .map(gg_float::force_positive_zero)
            .join(",");
        write!(f, "matrix({values})")
    }
}
