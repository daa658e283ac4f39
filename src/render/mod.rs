//! Report rendering: the display-surface seam, the table builder, the
//! renderer itself, and the HTML surface implementation.

pub mod html;
pub mod report;
pub mod surface;
pub mod table;

pub use html::HtmlSurface;
pub use report::ReportRenderer;
pub use surface::{DisplaySurface, RecordingSurface, SurfaceEvent};
pub use table::{column_intensities, transpose_report, ReportTable, TableCell, TableRow};
