pub mod segment_list;

pub use segment_list::{SegmentList, SlotId};
