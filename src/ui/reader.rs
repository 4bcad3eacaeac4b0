// Reader view: chunk display with the pivot pinned to a fixed column
pub mod view;
