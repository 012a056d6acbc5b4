#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context};
#[allow(unused_imports)]
pub use tracing::{debug, error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::config::*,
    util::{
        assert::*,
        gg_err::{GeometryError, Result},
        gg_float::GgFloat,
        linalg,
        linalg::{AxisAlignedExtent, PartialRect, Rect, RectArgs, RectStyle, Transform2D, TransformUpdate, Vec2},
        measure::{BoundingRect, ClientPosition, ClientSize, OffsetPosition, OffsetSize, Size},
        popup::{build_safe, PopupBuilder},
    },
};
