pub mod editor;
pub mod error;
pub mod machine;
pub mod model;

pub use editor::CropEditor;
pub use error::{DragError, DragResult};
pub use machine::DragSession;
pub use model::{CropOutcome, DragPhase};
