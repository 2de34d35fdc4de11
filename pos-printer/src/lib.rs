//! # pos-printer
//!
//! Plain-text receipt printing - low-level capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - Fixed-width text layout (centering, left/right pairs, separators)
//! - Handing finished documents to the host print facility
//!   (console or a spool directory the OS print queue watches)
//!
//! Business logic (WHAT to print) stays in application code:
//! - Receipt and kitchen ticket rendering → pos-terminal
//!
//! ## Example
//!
//! ```ignore
//! use pos_printer::{ConsolePrinter, PrintJob, Printer, TextBuilder};
//!
//! let mut b = TextBuilder::new(42);
//! b.text_center("Lanka Dosa House");
//! b.eq_sep();
//! b.line_lr("Total", "LKR 1,170");
//!
//! let job = PrintJob::new("100001", b.finalize());
//! ConsolePrinter::new().print(&job).await?;
//! ```

mod error;
mod printer;
mod text;
mod width;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use printer::{ConsolePrinter, HostPrinter, PrintJob, Printer, SpoolPrinter};
pub use text::TextBuilder;
pub use width::{pad, text_width, truncate};
