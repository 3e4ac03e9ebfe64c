// Weekly report consolidation: year-partitioned xlsx workbooks in, one
// consolidated CSV per report out.
pub mod batch;
pub mod extract;
pub mod mapping;
pub mod output;
pub mod reshape;
pub mod types;
pub mod util;
