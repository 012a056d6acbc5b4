pub mod assert;
pub mod linalg;
pub mod measure;
pub mod popup;

pub mod gg_err {
    use thiserror::Error;
    use tracing::error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum GeometryError {
        #[error("invalid argument: {0}")]
        InvalidArgument(String),
    }

    pub type Result<T> = std::result::Result<T, GeometryError>;

    fn log_error(e: &anyhow::Error) {
        error!("{}", e);
        e.chain()
            .skip(1)
            .for_each(|cause| error!("caused by: {}", cause));
    }

    pub fn log_unwrap_or<T, U: Into<T>>(default: U, result: anyhow::Result<T>) -> T {
        match result {
            Ok(v) => v,
            Err(e) => {
                log_error(&e);
                default.into()
            }
        }
    }

    pub fn log_and_ok<T>(result: anyhow::Result<T>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                log_error(&e);
                None
            }
        }
    }

}

pub mod gg_float {
    use crate::util::linalg::{Transform2D, Vec2};
    use num_traits::Zero;

    pub trait GgFloat {
        fn is_finite(&self) -> bool;
    }

    impl GgFloat for Vec2 {
        fn is_finite(&self) -> bool {
            self.x.is_finite() && self.y.is_finite()
        }
    }

    impl GgFloat for Transform2D {
        fn is_finite(&self) -> bool {
            self.translate.is_finite() && self.rotate.is_finite() && self.scale.is_finite()
        }
    }

    /// Maps `-0.0` to `0.0`, leaving every other value untouched. Used wherever numbers are
    /// written out as text, so that e.g. a zero rotation never prints as `-0`.
    pub fn force_positive_zero(x: f64) -> f64 {
        if x.is_zero() { 0.0 } else { x }
    }

}
