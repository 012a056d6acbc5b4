//! Plain records for the measurements a presentation layer reports (pointer positions, element
//! sizes, bounding boxes), and their conversions into [`Vec2`] and [`Rect`].
//!
//! Field names (de)serialize in the camelCase used by browser events, e.g. `clientX`.

use crate::core::prelude::*;
use serde::{Deserialize, Serialize};

/// Pointer position relative to the viewport.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPosition {
    pub client_x: f64,
    pub client_y: f64,
}

/// Pointer position relative to the target element's padding edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetPosition {
    pub offset_x: f64,
    pub offset_y: f64,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Layout size including borders.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetSize {
    pub offset_width: f64,
    pub offset_height: f64,
}

/// Inner size, excluding borders and scrollbars.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSize {
    pub client_width: f64,
    pub client_height: f64,
}

/// An element's bounding box in viewport coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl AxisAlignedExtent for BoundingRect {
    fn top_left(&self) -> Vec2 {
        Vec2 {
            x: self.left,
            y: self.top,
        }
    }
    fn extent(&self) -> Vec2 {
        Vec2 {
            x: self.width,
            y: self.height,
        }
    }
}

impl From<ClientPosition> for Vec2 {
    fn from(value: ClientPosition) -> Self {
        Vec2 {
            x: value.client_x,
            y: value.client_y,
        }
    }
}
impl From<OffsetPosition> for Vec2 {
    fn from(value: OffsetPosition) -> Self {
        Vec2 {
            x: value.offset_x,
            y: value.offset_y,
        }
    }
}
impl From<Size> for Vec2 {
    fn from(value: Size) -> Self {
        Vec2 {
            x: value.width,
            y: value.height,
        }
    }
}
impl From<OffsetSize> for Vec2 {
    fn from(value: OffsetSize) -> Self {
        Vec2 {
            x: value.offset_width,
            y: value.offset_height,
        }
    }
}
impl From<ClientSize> for Vec2 {
    fn from(value: ClientSize) -> Self {
        Vec2 {
            x: value.client_width,
            y: value.client_height,
        }
    }
}

impl From<BoundingRect> for Rect {
    fn from(value: BoundingRect) -> Self {
        value.as_rect()
    }
}
