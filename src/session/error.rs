use thiserror::Error;

pub type DragResult<T> = std::result::Result<T, DragError>;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DragError {
    #[error("{operation} called without an active drag session")]
    NoActiveSession { operation: &'static str },

    #[error("frame {width}x{height} has no usable extent")]
    DegenerateFrame { width: f64, height: f64 },
}
