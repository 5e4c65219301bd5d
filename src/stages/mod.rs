pub mod stage0_scan;
pub mod stage1_assemble;
pub mod stage2_export;

pub use stage0_scan::*;
pub use stage1_assemble::*;
pub use stage2_export::*;
