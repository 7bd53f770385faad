pub mod layout;
pub mod task;
pub mod text;

pub use layout::{centered_area, render_panel};
pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};
pub use text::{prefix_width, truncate_with_ellipsis};
